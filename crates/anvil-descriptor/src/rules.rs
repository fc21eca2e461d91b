//! TOML parsing, serialization, and discovery for module descriptors.
//!
//! Descriptors are stored as `<name>.module.toml` files. This module provides
//! the data model plus functions to load, serialize, template, and discover
//! them. Structural validation beyond what serde enforces lives in
//! [`crate::validate`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DescriptorError, Result};

/// A complete module build descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ModuleRules {
    /// Module metadata (required).
    pub module: ModuleMetadata,
    /// Dependencies linked into this module but not re-exported.
    #[serde(default)]
    pub private_dependencies: Vec<String>,
    /// Dependencies transitively exposed to this module's dependents.
    #[serde(default)]
    pub public_dependencies: Vec<String>,
    /// Preprocessor definitions set unconditionally.
    #[serde(default)]
    pub definitions: Definitions,
    /// Shared libraries the built module requires at run time.
    #[serde(default)]
    pub shared_libraries: Vec<SharedLibraryRule>,
    /// Optional third-party SDK integration.
    #[serde(default)]
    pub third_party: Option<ThirdPartyRule>,
}

/// Core module metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ModuleMetadata {
    /// Module name (unique within the engine).
    pub name: String,
    /// Optional semantic version.
    #[serde(default)]
    pub version: Option<String>,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Unconditional preprocessor definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definitions {
    /// Definitions visible to dependents.
    #[serde(default)]
    pub public: Vec<String>,
    /// Definitions visible only when compiling this module.
    #[serde(default)]
    pub private: Vec<String>,
}

/// A shared library resolved and checked at configuration time.
///
/// The on-disk path is `engine_dir / directory / <platform dir> / <resolved
/// filename>`, where the filename is `base-name` plus the platform's
/// shared-library suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SharedLibraryRule {
    /// Filename stem, without platform suffix (e.g. `libmdl_sdk`).
    pub base_name: String,
    /// Engine-root-relative directory holding per-platform subdirectories.
    pub directory: String,
    /// Whether the library is resolved at first use rather than at load.
    #[serde(default = "default_true")]
    pub delay_load: bool,
}

fn default_true() -> bool {
    true
}

/// Optional third-party SDK activation.
///
/// Activation is all-or-nothing: the root and every library's `include/`
/// subdirectory must exist, otherwise the whole block is skipped without
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThirdPartyRule {
    /// Module-dir-relative path to the SDK root.
    pub root: String,
    /// Library directories under the root; each must contain `include/`.
    #[serde(default)]
    pub libraries: Vec<String>,
    /// Private definition set when the SDK activates.
    pub use_definition: String,
    /// Public platform-identifying definitions, one selected per target.
    pub platform_definitions: PlatformDefinitions,
}

/// Per-family platform-identifying definitions for a third-party SDK.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlatformDefinitions {
    /// Definition for Win64/Win32 targets.
    pub windows: String,
    /// Definition for Linux targets.
    pub linux: String,
    /// Definition for Mac targets.
    pub mac: String,
}

impl ModuleRules {
    /// Parse a module descriptor from a TOML string.
    pub fn parse(input: &str) -> Result<Self> {
        let rules: ModuleRules = toml::from_str(input)?;

        if rules.module.name.is_empty() {
            return Err(DescriptorError::InvalidDescriptor {
                detail: "module.name is required".to_string(),
            });
        }

        // Validate version is valid semver when present
        if let Some(version) = &rules.module.version {
            semver::Version::parse(version)?;
        }

        Ok(rules)
    }

    /// Load a module descriptor from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DescriptorError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Serialize this descriptor to pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        let toml_str = toml::to_string_pretty(self)?;
        Ok(toml_str)
    }

    /// Get the parsed semantic version, if declared.
    pub fn version(&self) -> Option<semver::Version> {
        self.module
            .version
            .as_deref()
            .map(|v| semver::Version::parse(v).expect("version validated in parse"))
    }

    /// Generate a starter descriptor for `anvil init`.
    pub fn template(name: &str) -> String {
        format!(
            r#"private-dependencies = [
    "Core",
    "Engine",
]

public-dependencies = []

[module]
name = "{name}"
version = "0.1.0"

[definitions]
public = []
private = []
"#
        )
    }
}

/// Discover all `.module.toml` files in a directory.
///
/// Returns a list of (module_name, file_path) pairs, sorted by name.
pub fn discover_modules(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut modules = Vec::new();
    let entries = std::fs::read_dir(dir)?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            if let Some(name) = file_name.strip_suffix(".module.toml") {
                modules.push((name.to_string(), path));
            }
        }
    }
    modules.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(modules)
}
