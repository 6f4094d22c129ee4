//! CLI command implementations

pub mod assess;
pub mod init;
pub mod validate;
