//! `anvil init` — write a starter module descriptor.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use anvil_descriptor::ModuleRules;

/// Create `<name>.module.toml` in the current directory.
pub fn run(name: &str) -> Result<()> {
    let path = PathBuf::from(format!("{name}.module.toml"));
    create_descriptor(&path, name)?;
    println!("Created {}", path.display());
    println!("Edit the dependency lists, then run 'anvil validate {}'.", path.display());
    Ok(())
}

/// Write a template descriptor to `path`. Refuses to overwrite.
pub fn create_descriptor(path: &Path, name: &str) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    std::fs::write(path, ModuleRules::template(name))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_parseable_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("NewModule.module.toml");
        create_descriptor(&path, "NewModule").unwrap();

        let rules = ModuleRules::load(&path).unwrap();
        assert_eq!(rules.module.name, "NewModule");
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Existing.module.toml");
        create_descriptor(&path, "Existing").unwrap();
        assert!(create_descriptor(&path, "Existing").is_err());
    }
}
