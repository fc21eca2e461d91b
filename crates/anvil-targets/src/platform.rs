//! The closed platform set and its derived properties.
//!
//! Every operation on [`TargetPlatform`] is an exhaustive `match`. Adding a
//! platform to the enum forces every call site to state what the new
//! platform does; there are no default arms to hide behind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// A build target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetPlatform {
    /// 64-bit Windows.
    Win64,
    /// 32-bit Windows.
    Win32,
    /// Linux (x86-64 and compatible).
    Linux,
    /// macOS.
    Mac,
}

/// The coarse family a platform belongs to.
///
/// Shared-library suffixes and platform-identifying definitions key off the
/// family rather than the individual platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformFamily {
    /// Win64 and Win32.
    Windows,
    /// Linux and Mac.
    Unix,
}

impl TargetPlatform {
    /// All supported platforms, in canonical order.
    pub fn all() -> &'static [TargetPlatform] {
        &[
            TargetPlatform::Win64,
            TargetPlatform::Win32,
            TargetPlatform::Linux,
            TargetPlatform::Mac,
        ]
    }

    /// The family this platform belongs to.
    pub fn family(&self) -> PlatformFamily {
        match self {
            TargetPlatform::Win64 | TargetPlatform::Win32 => PlatformFamily::Windows,
            TargetPlatform::Linux | TargetPlatform::Mac => PlatformFamily::Unix,
        }
    }

    /// Resolve the filename of a shared library for this platform.
    ///
    /// Windows-family platforms load `<base>.dll`; everything else loads
    /// `<base>.so`. The third-party SDKs this models ship their non-Windows
    /// binaries with a `.so` suffix on macOS as well.
    pub fn shared_library_name(&self, base: &str) -> String {
        match self.family() {
            PlatformFamily::Windows => format!("{base}.dll"),
            PlatformFamily::Unix => format!("{base}.so"),
        }
    }

    /// The directory segment used for per-platform binary layouts
    /// (e.g. `Binaries/ThirdParty/<Sdk>/Win64/`).
    pub fn dir_name(&self) -> &'static str {
        match self {
            TargetPlatform::Win64 => "Win64",
            TargetPlatform::Win32 => "Win32",
            TargetPlatform::Linux => "Linux",
            TargetPlatform::Mac => "Mac",
        }
    }

    /// Canonical lowercase name, as written in descriptors and on the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            TargetPlatform::Win64 => "win64",
            TargetPlatform::Win32 => "win32",
            TargetPlatform::Linux => "linux",
            TargetPlatform::Mac => "mac",
        }
    }

    /// Short human description for CLI listings.
    pub fn description(&self) -> &'static str {
        match self {
            TargetPlatform::Win64 => "Windows 64-bit",
            TargetPlatform::Win32 => "Windows 32-bit",
            TargetPlatform::Linux => "Linux x86-64",
            TargetPlatform::Mac => "macOS",
        }
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetPlatform {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for platform in TargetPlatform::all() {
            if s.eq_ignore_ascii_case(platform.name()) {
                return Ok(*platform);
            }
        }
        Err(TargetError::UnknownPlatform {
            name: s.to_string(),
            supported: TargetPlatform::all()
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_family_resolves_dll() {
        assert_eq!(
            TargetPlatform::Win64.shared_library_name("libmdl_sdk"),
            "libmdl_sdk.dll"
        );
        assert_eq!(
            TargetPlatform::Win32.shared_library_name("libmdl_sdk"),
            "libmdl_sdk.dll"
        );
    }

    #[test]
    fn unix_family_resolves_so() {
        assert_eq!(
            TargetPlatform::Linux.shared_library_name("libmdl_sdk"),
            "libmdl_sdk.so"
        );
        assert_eq!(
            TargetPlatform::Mac.shared_library_name("libmdl_sdk"),
            "libmdl_sdk.so"
        );
    }

    #[test]
    fn suffix_matches_family_for_all_platforms() {
        for platform in TargetPlatform::all() {
            let name = platform.shared_library_name("lib");
            match platform.family() {
                PlatformFamily::Windows => assert!(name.ends_with(".dll"), "{platform}: {name}"),
                PlatformFamily::Unix => assert!(name.ends_with(".so"), "{platform}: {name}"),
            }
        }
    }

    #[test]
    fn parse_canonical_names() {
        assert_eq!("win64".parse::<TargetPlatform>().unwrap(), TargetPlatform::Win64);
        assert_eq!("linux".parse::<TargetPlatform>().unwrap(), TargetPlatform::Linux);
        assert_eq!("mac".parse::<TargetPlatform>().unwrap(), TargetPlatform::Mac);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Win64".parse::<TargetPlatform>().unwrap(), TargetPlatform::Win64);
        assert_eq!("LINUX".parse::<TargetPlatform>().unwrap(), TargetPlatform::Linux);
    }

    #[test]
    fn parse_unknown_is_explicit_error() {
        let err = "ps5".parse::<TargetPlatform>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ps5"));
        assert!(msg.contains("win64"));
    }

    #[test]
    fn display_round_trips() {
        for platform in TargetPlatform::all() {
            let parsed: TargetPlatform = platform.to_string().parse().unwrap();
            assert_eq!(parsed, *platform);
        }
    }

    #[test]
    fn dir_names_are_distinct() {
        let mut names: Vec<_> = TargetPlatform::all().iter().map(|p| p.dir_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TargetPlatform::all().len());
    }
}
