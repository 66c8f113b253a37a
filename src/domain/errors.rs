//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! The three caller-visible failure kinds the presentation layer must
//! distinguish are validation, not-found and forbidden; the remaining
//! variants cover configuration and I/O plumbing.

use thiserror::Error;

/// Main Ashraya error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum AshrayaError {
    /// Input failed validation (missing or malformed required field)
    #[error("Validation error: {0}")]
    Validation(String),

    /// No patient exists with the given id
    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    /// No health record exists with the given id
    #[error("Health record not found: {0}")]
    RecordNotFound(String),

    /// No user exists with the given id
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The actor is not permitted to perform the action
    ///
    /// Distinct from not-found so the presentation layer can show an
    /// authorization message instead of a missing-record one.
    #[error("Forbidden: {actor} may not {action}")]
    Forbidden { actor: String, action: String },

    /// A lifecycle transition that the record's current state does not allow
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// Login failed
    ///
    /// Deliberately carries no detail: the same error is returned for an
    /// unknown email, a wrong password and a role mismatch.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AshrayaError {
    /// Builds a [`AshrayaError::Forbidden`] for an actor/action pair
    pub fn forbidden(actor: impl Into<String>, action: impl Into<String>) -> Self {
        AshrayaError::Forbidden {
            actor: actor.into(),
            action: action.into(),
        }
    }
}

impl From<std::io::Error> for AshrayaError {
    fn from(err: std::io::Error) -> Self {
        AshrayaError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AshrayaError {
    fn from(err: serde_json::Error) -> Self {
        AshrayaError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for AshrayaError {
    fn from(err: toml::de::Error) -> Self {
        AshrayaError::Configuration(format!("TOML parse error: {err}"))
    }
}
