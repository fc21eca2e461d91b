//! Single-pass descriptor evaluation.

use anvil_descriptor::{validate, ModuleRules, ThirdPartyRule};
use anvil_targets::TargetPlatform;

use crate::config::ModuleConfig;
use crate::context::ConfigureContext;
use crate::error::{ConfigureError, Result};

/// Evaluate a module descriptor against a configuration context.
///
/// Fails hard when a declared shared library is missing from disk, naming
/// the exact path. Third-party SDK activation is best-effort: a missing root
/// or include directory skips the whole block without error.
pub fn configure(rules: &ModuleRules, ctx: &ConfigureContext) -> Result<ModuleConfig> {
    if let Err(issues) = validate(rules) {
        let errors: Vec<_> = issues.into_iter().filter(|i| i.is_error()).collect();
        if !errors.is_empty() {
            return Err(ConfigureError::InvalidRules {
                module: rules.module.name.clone(),
                issues: errors,
            });
        }
    }

    let mut config = ModuleConfig {
        module: rules.module.name.clone(),
        platform: ctx.platform,
        private_dependencies: rules.private_dependencies.clone(),
        public_dependencies: rules.public_dependencies.clone(),
        public_definitions: rules.definitions.public.clone(),
        private_definitions: rules.definitions.private.clone(),
        public_include_paths: Vec::new(),
        delay_load_libraries: Vec::new(),
        runtime_dependencies: Vec::new(),
        third_party_active: false,
    };

    for lib in &rules.shared_libraries {
        let file_name = ctx.platform.shared_library_name(&lib.base_name);
        if lib.delay_load {
            config.delay_load_libraries.push(file_name.clone());
        }
        let path = ctx
            .engine_dir
            .join(&lib.directory)
            .join(ctx.platform.dir_name())
            .join(&file_name);
        if !path.is_file() {
            return Err(ConfigureError::MissingRuntimeDependency { path });
        }
        config.runtime_dependencies.push(path);
    }

    if let Some(tp) = &rules.third_party {
        apply_third_party(tp, ctx, &mut config);
    }

    Ok(config)
}

/// Attempt all-or-nothing third-party SDK activation.
///
/// The SDK root and every library's `include/` subdirectory must exist.
/// Any missing directory leaves the config untouched: no partial include
/// list, no use-definition, no platform definition.
fn apply_third_party(tp: &ThirdPartyRule, ctx: &ConfigureContext, config: &mut ModuleConfig) {
    let root = ctx.module_dir.join(&tp.root);
    if !root.is_dir() {
        return;
    }

    let mut include_paths = Vec::with_capacity(tp.libraries.len());
    for lib in &tp.libraries {
        let include = root.join(lib).join("include");
        if !include.is_dir() {
            return;
        }
        include_paths.push(include);
    }

    config.public_include_paths.extend(include_paths);
    config.private_definitions.push(tp.use_definition.clone());
    let platform_def = match ctx.platform {
        TargetPlatform::Win64 | TargetPlatform::Win32 => &tp.platform_definitions.windows,
        TargetPlatform::Linux => &tp.platform_definitions.linux,
        TargetPlatform::Mac => &tp.platform_definitions.mac,
    };
    config.public_definitions.push(platform_def.clone());
    config.third_party_active = true;
}
