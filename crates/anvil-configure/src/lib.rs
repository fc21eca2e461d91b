//! Configuration evaluation for Anvil module descriptors.
//!
//! Takes a parsed [`anvil_descriptor::ModuleRules`] and a
//! [`ConfigureContext`] (target platform plus engine/module roots) and
//! produces the resolved [`ModuleConfig`] a build orchestrator consumes.
//! Evaluation is a single synchronous pass: validate, copy the declarative
//! lists, check runtime artifacts on disk, then attempt third-party SDK
//! activation.

pub mod config;
pub mod context;
pub mod error;
mod evaluate;

pub use config::ModuleConfig;
pub use context::ConfigureContext;
pub use error::{ConfigureError, Result};
pub use evaluate::configure;
