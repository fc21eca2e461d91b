//! `anvil configure` — evaluate descriptors against an engine tree.

use std::path::Path;

use anyhow::{bail, Context, Result};

use anvil_configure::{configure, ConfigureContext};
use anvil_descriptor::{discover_modules, ModuleRules};
use anvil_targets::TargetPlatform;

/// Evaluate a single descriptor and print the resolved configuration.
///
/// The module directory defaults to the descriptor's parent, matching the
/// convention that third-party roots are declared relative to the
/// descriptor's location.
pub fn run(
    descriptor: &Path,
    target: &str,
    engine_root: &Path,
    module_dir: Option<&Path>,
    json: bool,
) -> Result<()> {
    let platform: TargetPlatform = target.parse()?;
    let rules = ModuleRules::load(descriptor)?;

    let module_dir = match module_dir {
        Some(dir) => dir,
        None => descriptor
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new(".")),
    };
    let ctx = ConfigureContext::new(platform, engine_root, module_dir);

    let config = configure(&rules, &ctx)
        .with_context(|| format!("configuring module '{}'", rules.module.name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", config.summary());
    }
    Ok(())
}

/// Evaluate every descriptor discovered in a directory.
///
/// Fails on the first module whose configuration fails; modules already
/// evaluated keep their printed output.
pub fn run_all(dir: &Path, target: &str, engine_root: &Path, json: bool) -> Result<()> {
    let modules = discover_modules(dir)?;
    if modules.is_empty() {
        bail!("no .module.toml files found in {}", dir.display());
    }
    for (_, path) in &modules {
        run(path, target, engine_root, None, json)?;
        if !json {
            println!();
        }
    }
    println!("Configured {} module(s).", modules.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = r#"
[module]
name = "Simple"
private-dependencies = ["Core"]
"#;

    #[test]
    fn configure_simple_module() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simple.module.toml");
        std::fs::write(&path, SIMPLE).unwrap();

        run(&path, "linux", dir.path(), None, false).unwrap();
        run(&path, "linux", dir.path(), None, true).unwrap();
    }

    #[test]
    fn unknown_target_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simple.module.toml");
        std::fs::write(&path, SIMPLE).unwrap();

        assert!(run(&path, "amiga", dir.path(), None, false).is_err());
    }

    #[test]
    fn run_all_requires_descriptors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_all(dir.path(), "linux", dir.path(), false).is_err());
    }

    #[test]
    fn run_all_configures_each() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.module.toml"), SIMPLE).unwrap();
        std::fs::write(
            dir.path().join("b.module.toml"),
            "[module]\nname = \"Second\"\n",
        )
        .unwrap();

        run_all(dir.path(), "win64", dir.path(), false).unwrap();
    }
}
