//! `anvil describe` — print a parsed descriptor.

use std::path::Path;

use anyhow::{bail, Result};

use anvil_descriptor::ModuleRules;

/// Print the parsed descriptor, human-readable or as canonical TOML.
pub fn run(descriptor: &Path, format: Option<&str>) -> Result<()> {
    let rules = ModuleRules::load(descriptor)?;

    match format {
        Some("toml") => {
            print!("{}", rules.to_toml()?);
            return Ok(());
        }
        Some(other) => bail!("unknown format '{other}' (expected: toml)"),
        None => {}
    }

    println!("=== Module: {} ===", rules.module.name);
    if let Some(version) = &rules.module.version {
        println!("Version: {version}");
    }
    if let Some(description) = &rules.module.description {
        println!("{description}");
    }
    println!();

    println!("--- Dependencies ---");
    for dep in &rules.private_dependencies {
        println!("  private  {dep}");
    }
    for dep in &rules.public_dependencies {
        println!("  public   {dep}");
    }
    println!();

    if !rules.definitions.public.is_empty() || !rules.definitions.private.is_empty() {
        println!("--- Definitions ---");
        for def in &rules.definitions.public {
            println!("  public   {def}");
        }
        for def in &rules.definitions.private {
            println!("  private  {def}");
        }
        println!();
    }

    if !rules.shared_libraries.is_empty() {
        println!("--- Shared libraries ---");
        for lib in &rules.shared_libraries {
            println!(
                "  {} in {}{}",
                lib.base_name,
                lib.directory,
                if lib.delay_load { " (delay-load)" } else { "" }
            );
        }
        println!();
    }

    match &rules.third_party {
        Some(tp) => {
            println!("--- Third-party SDK ---");
            println!("  Root:           {}", tp.root);
            println!("  Libraries:      {}", tp.libraries.join(", "));
            println!("  Use definition: {}", tp.use_definition);
        }
        None => {
            println!("No third-party SDK block.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.module.toml");
        std::fs::write(&path, ModuleRules::template("Described")).unwrap();
        run(&path, None).unwrap();
        run(&path, Some("toml")).unwrap();
    }

    #[test]
    fn unknown_format_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.module.toml");
        std::fs::write(&path, ModuleRules::template("Described")).unwrap();
        assert!(run(&path, Some("yaml")).is_err());
    }
}
