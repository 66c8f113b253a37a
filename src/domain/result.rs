//! Result type alias for Ashraya
//!
//! Convenience alias using [`AshrayaError`] as the error type.

use super::errors::AshrayaError;

/// Result type alias for Ashraya operations
///
/// # Examples
///
/// ```
/// use ashraya::domain::result::Result;
/// use ashraya::domain::errors::AshrayaError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(AshrayaError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, AshrayaError>;
