//! Module build descriptor model for Anvil.
//!
//! A module descriptor (`*.module.toml`) declares one compilable unit's
//! dependency lists, preprocessor definitions, shared-library artifacts, and
//! optional third-party SDK integration. Descriptors are declarative: this
//! crate parses and validates them, while `anvil-configure` evaluates them
//! against a target platform and an on-disk engine tree.

pub mod error;
pub mod rules;
pub mod validate;

pub use error::{DescriptorError, Result};
pub use rules::{
    discover_modules, Definitions, ModuleMetadata, ModuleRules, PlatformDefinitions,
    SharedLibraryRule, ThirdPartyRule,
};
pub use validate::{validate, ValidationIssue};
