//! `anvil target` — platform listing and description.

use anyhow::Result;

use anvil_targets::{PlatformFamily, TargetPlatform};

/// List the supported platform set.
pub fn list() -> Result<()> {
    println!("Supported platforms:");
    println!();
    for platform in TargetPlatform::all() {
        println!("  {:<10} {}", platform.name(), platform.description());
    }
    println!();
    println!("Use 'anvil target describe <name>' for details.");
    Ok(())
}

/// Describe one platform: family, filename conventions, directory segment.
pub fn describe(name: &str) -> Result<()> {
    let platform: TargetPlatform = name.parse()?;

    println!("=== Platform: {} ===", platform.name());
    println!("Description:    {}", platform.description());
    println!(
        "Family:         {}",
        match platform.family() {
            PlatformFamily::Windows => "Windows",
            PlatformFamily::Unix => "Unix",
        }
    );
    println!("Binary dir:     {}", platform.dir_name());
    println!(
        "Shared library: {}",
        platform.shared_library_name("<base-name>")
    );
    Ok(())
}
