//! CLI command implementations.

pub mod configure;
pub mod describe;
pub mod doctor;
pub mod init;
pub mod target;
pub mod validate;
