//! Configuration management
//!
//! TOML-backed configuration with environment variable substitution and
//! validation. See [`load_config`] for the loading pipeline and
//! [`default_config_toml`] for the file written by `ashraya init`.

pub mod loader;
pub mod schema;

pub use loader::{default_config_toml, load_config};
pub use schema::{AshrayaConfig, FacilityConfig, LoggingConfig};
