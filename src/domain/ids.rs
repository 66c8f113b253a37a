//! Domain identifier types with validation
//!
//! Newtype wrappers for actor, patient and health-record identifiers.
//! Identifiers are opaque strings: seeded demo data uses short numeric ids
//! while freshly created entities receive UUID v4 ids via `generate`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident, $label:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from a string
            ///
            /// # Errors
            ///
            /// Returns an error if the identifier is empty or whitespace-only
            pub fn new(id: impl Into<String>) -> Result<Self, String> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(concat!($label, " cannot be empty").to_string());
                }
                Ok(Self(id))
            }

            /// Generates a fresh random identifier
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes self and returns the inner String
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier for an actor (facility user)
    ///
    /// # Examples
    ///
    /// ```
    /// use ashraya::domain::ids::ActorId;
    /// use std::str::FromStr;
    ///
    /// let id = ActorId::from_str("3").unwrap();
    /// assert_eq!(id.as_str(), "3");
    /// ```
    ActorId,
    "Actor ID"
);

string_id!(
    /// Identifier for a patient record
    PatientId,
    "Patient ID"
);

string_id!(
    /// Identifier for an uploaded health record
    HealthRecordId,
    "Health record ID"
);
