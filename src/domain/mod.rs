//! Domain models and types for Ashraya
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ActorId`], [`PatientId`], [`HealthRecordId`])
//! - **Domain models** ([`Actor`], [`Patient`], [`HealthRecord`])
//! - **Error types** ([`AshrayaError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Identifiers use the newtype pattern so patient, actor and record ids
//! cannot be mixed up, and the patient lifecycle is a tagged union so a
//! deceased patient always carries its death date and reason:
//!
//! ```
//! use ashraya::domain::{LifecycleStatus, PatientId, ActorId};
//! use chrono::NaiveDate;
//!
//! let status = LifecycleStatus::Deceased {
//!     death_date: NaiveDate::from_ymd_opt(2024, 10, 15).unwrap(),
//!     death_reason: "Natural causes".to_string(),
//!     is_death_committed: false,
//!     death_committed_by: None,
//! };
//! assert!(status.is_deceased());
//! ```

pub mod actor;
pub mod errors;
pub mod health_record;
pub mod ids;
pub mod patient;
pub mod result;

// Re-export commonly used types for convenience
pub use actor::{Actor, ActorBuilder, Role};
pub use errors::AshrayaError;
pub use health_record::{HealthRecord, HealthRecordUpload};
pub use ids::{ActorId, HealthRecordId, PatientId};
pub use patient::{AdmissionRequest, LifecycleStatus, Patient};
pub use result::Result;
