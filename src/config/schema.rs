//! Configuration schema types
//!
//! Maps the TOML configuration file onto typed structs with per-section
//! validation.

use serde::{Deserialize, Serialize};

/// Main Ashraya configuration
///
/// This is the root structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AshrayaConfig {
    /// Facility-level settings
    pub facility: FacilityConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AshrayaConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.facility.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Facility settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityConfig {
    /// Display name of the facility
    pub name: String,

    /// Lower bound of the admission-age hint shown to operators
    ///
    /// A hint, not a hard rule: the store does not reject ages outside
    /// the range.
    #[serde(default = "default_min_admission_age")]
    pub min_admission_age: u32,

    /// Upper bound of the admission-age hint
    #[serde(default = "default_max_admission_age")]
    pub max_admission_age: u32,

    /// Whether to pre-load the demo patients and users
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

fn default_min_admission_age() -> u32 {
    60
}

fn default_max_admission_age() -> u32 {
    120
}

fn default_seed_demo_data() -> bool {
    true
}

impl FacilityConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("facility.name must not be empty".to_string());
        }
        if self.min_admission_age >= self.max_admission_age {
            return Err(format!(
                "facility.min_admission_age ({}) must be below max_admission_age ({})",
                self.min_admission_age, self.max_admission_age
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to also write JSON logs to a rolling file
    #[serde(default)]
    pub file_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub file_path: String,

    /// Rotation policy: daily or hourly
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_enabled: false,
            file_path: default_log_path(),
            rotation: default_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        match self.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(format!(
                    "logging.level '{other}' is invalid. Must be one of: trace, debug, info, warn, error"
                ))
            }
        }
        match self.rotation.as_str() {
            "daily" | "hourly" => {}
            other => {
                return Err(format!(
                    "logging.rotation '{other}' is invalid. Must be daily or hourly"
                ))
            }
        }
        if self.file_enabled && self.file_path.trim().is_empty() {
            return Err("logging.file_path must be set when file logging is enabled".to_string());
        }
        Ok(())
    }
}
