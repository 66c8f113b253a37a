//! CLI command implementations

pub mod init;
pub mod search;
pub mod stats;
pub mod validate;
