//! Configuration loader with TOML parsing and environment variable substitution
//!
//! Loading performs, in order: file read, `${VAR}` substitution (comment
//! lines are left untouched), TOML parse, validation.

use super::schema::AshrayaConfig;
use crate::domain::errors::AshrayaError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced environment
/// variable is unset, TOML parsing fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use ashraya::config::load_config;
///
/// let config = load_config("ashraya.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AshrayaConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AshrayaError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AshrayaError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: AshrayaConfig = toml::from_str(&contents)
        .map_err(|e| AshrayaError::Configuration(format!("Failed to parse TOML: {e}")))?;

    config.validate().map_err(|e| {
        AshrayaError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Renders the default configuration file written by `ashraya init`
pub fn default_config_toml() -> String {
    r#"# Ashraya configuration

[facility]
name = "Ashraya Old Age Home"
# Admission-age hint shown to operators; not enforced by the store
min_admission_age = 60
max_admission_age = 120
# Pre-load the demo patients and users
seed_demo_data = true

[logging]
level = "info"
file_enabled = false
file_path = "logs"
rotation = "daily"
"#
    .to_string()
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are skipped so documentation examples survive verbatim.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid pattern");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(AshrayaError::Configuration(format!(
            "Environment variables not set: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}
