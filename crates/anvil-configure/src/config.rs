//! The resolved module configuration.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Serialize;

use anvil_targets::TargetPlatform;

/// Resolved build configuration for one module on one platform.
///
/// This is the record a build orchestrator consumes: which modules to link,
/// which definitions to set, where include search goes, and which binary
/// artifacts must ship with the build.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ModuleConfig {
    /// Module name.
    pub module: String,
    /// Platform this configuration was resolved for.
    pub platform: TargetPlatform,
    /// Dependencies linked but not re-exported.
    pub private_dependencies: Vec<String>,
    /// Dependencies transitively exposed to dependents.
    pub public_dependencies: Vec<String>,
    /// Preprocessor definitions visible to dependents.
    pub public_definitions: Vec<String>,
    /// Preprocessor definitions private to this module.
    pub private_definitions: Vec<String>,
    /// Include search paths exposed to dependents.
    pub public_include_paths: Vec<PathBuf>,
    /// Shared libraries resolved at first use rather than process startup.
    pub delay_load_libraries: Vec<String>,
    /// Files that must be present at execution time; tracked so packaging
    /// includes them.
    pub runtime_dependencies: Vec<PathBuf>,
    /// Whether the optional third-party SDK activated.
    pub third_party_active: bool,
}

impl ModuleConfig {
    /// Human-readable report for CLI output.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Module: {} ({}) ===", self.module, self.platform);
        let _ = writeln!(
            out,
            "Dependencies: {} private, {} public",
            self.private_dependencies.len(),
            self.public_dependencies.len()
        );
        for dep in &self.private_dependencies {
            let _ = writeln!(out, "  private  {dep}");
        }
        for dep in &self.public_dependencies {
            let _ = writeln!(out, "  public   {dep}");
        }
        if !self.public_definitions.is_empty() || !self.private_definitions.is_empty() {
            let _ = writeln!(out, "Definitions:");
            for def in &self.public_definitions {
                let _ = writeln!(out, "  public   {def}");
            }
            for def in &self.private_definitions {
                let _ = writeln!(out, "  private  {def}");
            }
        }
        if !self.public_include_paths.is_empty() {
            let _ = writeln!(out, "Include paths:");
            for path in &self.public_include_paths {
                let _ = writeln!(out, "  {}", path.display());
            }
        }
        if !self.delay_load_libraries.is_empty() {
            let _ = writeln!(out, "Delay-load libraries:");
            for lib in &self.delay_load_libraries {
                let _ = writeln!(out, "  {lib}");
            }
        }
        if !self.runtime_dependencies.is_empty() {
            let _ = writeln!(out, "Runtime dependencies:");
            for path in &self.runtime_dependencies {
                let _ = writeln!(out, "  {}", path.display());
            }
        }
        let _ = writeln!(
            out,
            "Third-party SDK: {}",
            if self.third_party_active {
                "active"
            } else {
                "not present"
            }
        );
        out
    }
}
