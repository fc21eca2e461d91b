//! `anvil doctor` — environment diagnostics.

use std::path::Path;

use anyhow::Result;

use anvil_descriptor::discover_modules;
use anvil_targets::TargetPlatform;

/// Print diagnostic information about the tool and the working tree.
pub fn run(work_dir: &Path, engine_root: Option<&Path>) -> Result<()> {
    println!("=== Anvil Doctor ===");
    println!();

    println!("Anvil version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "Platforms:     {}",
        TargetPlatform::all()
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();

    println!("--- Descriptors ---");
    match discover_modules(work_dir) {
        Ok(modules) if modules.is_empty() => {
            println!("  no .module.toml files in {}", work_dir.display());
        }
        Ok(modules) => {
            for (name, path) in modules {
                println!("  {name}: {}", path.display());
            }
        }
        Err(e) => {
            println!("  discovery failed: {e}");
        }
    }

    if let Some(root) = engine_root {
        println!();
        println!("--- Engine root ---");
        if root.is_dir() {
            println!("  {}: found", root.display());
            for sub in ["Binaries", "Plugins"] {
                let status = if root.join(sub).is_dir() {
                    "present"
                } else {
                    "missing"
                };
                println!("  {sub}/: {status}");
            }
        } else {
            println!("  {}: not a directory", root.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn doctor_runs_without_error() {
        let dir = tempfile::tempdir().unwrap();
        super::run(dir.path(), None).unwrap();
        super::run(dir.path(), Some(dir.path())).unwrap();
    }
}
