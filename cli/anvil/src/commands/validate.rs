//! `anvil validate` — structural descriptor checks.

use std::path::Path;

use anyhow::{bail, Result};

use anvil_descriptor::{validate, ModuleRules};

/// Parse and validate a descriptor, printing every issue found.
pub fn run(descriptor: &Path) -> Result<()> {
    let rules = ModuleRules::load(descriptor)?;

    match validate(&rules) {
        Ok(()) => {
            println!("{}: ok", rules.module.name);
            Ok(())
        }
        Err(issues) => {
            let mut errors = 0;
            for issue in &issues {
                println!("  {:<8} {}", issue.severity, issue.message);
                if issue.is_error() {
                    errors += 1;
                }
            }
            if errors > 0 {
                bail!(
                    "{}: {} error(s), {} warning(s)",
                    rules.module.name,
                    errors,
                    issues.len() - errors
                );
            }
            println!("{}: ok ({} warning(s))", rules.module.name, issues.len());
            Ok(())
        }
    }
}
