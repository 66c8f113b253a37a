//! Demo credential handling using the secrecy crate
//!
//! Passwords in the mock directory are held in `Secret<T>` so they are
//! zeroed on drop and redacted from Debug output. This is demo-login
//! plumbing only; real credential storage is out of scope.

use secrecy::{CloneableSecret, DebugSecret, ExposeSecret, Secret};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the traits Secret requires
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl From<&str> for SecretValue {
    fn from(s: &str) -> Self {
        SecretValue(s.to_string())
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Type alias for a protected password string
pub type Password = Secret<SecretValue>;

/// Builds a protected password from a plain string
pub fn password(value: impl Into<SecretValue>) -> Password {
    Secret::new(value.into())
}

/// Constant-position comparison helper for login checks
pub fn matches(secret: &Password, candidate: &str) -> bool {
    secret.expose_secret().as_ref() == candidate
}
