//! Orchestrator-supplied configuration context.

use std::path::{Path, PathBuf};

use anvil_targets::TargetPlatform;

/// Context handed to configuration by the build orchestrator.
#[derive(Debug, Clone)]
pub struct ConfigureContext {
    /// The platform being configured for.
    pub platform: TargetPlatform,
    /// Engine root; shared-library directories resolve against this.
    pub engine_dir: PathBuf,
    /// The directory holding the module's descriptor; third-party roots
    /// resolve against this.
    pub module_dir: PathBuf,
}

impl ConfigureContext {
    /// Construct a context for one module within an engine tree.
    pub fn new(platform: TargetPlatform, engine_dir: &Path, module_dir: &Path) -> Self {
        ConfigureContext {
            platform,
            engine_dir: engine_dir.to_path_buf(),
            module_dir: module_dir.to_path_buf(),
        }
    }
}
