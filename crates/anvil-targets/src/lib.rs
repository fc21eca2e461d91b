//! Target platform model for Anvil module configuration.
//!
//! Defines the closed set of platforms a module can be configured for,
//! the Windows/Unix family split, and shared-library filename resolution.
//! The set is deliberately a closed enum: an unrecognized platform name is
//! an explicit parse error, never a silent fallthrough to a default.

pub mod error;
pub mod platform;

pub use error::{Result, TargetError};
pub use platform::{PlatformFamily, TargetPlatform};
