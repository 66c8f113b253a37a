//! Health record domain model
//!
//! A health record is an uploaded document tied to a patient. Like
//! admissions and deaths, it starts provisional and is finalized by a
//! single commit; committer and commit timestamp are set together.

use super::ids::{ActorId, HealthRecordId, PatientId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded health document for a patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRecord {
    /// Unique identifier
    pub id: HealthRecordId,

    /// Patient this record belongs to
    pub patient_id: PatientId,

    /// Document reference (opaque URI)
    pub document_url: String,

    /// Display name of the document
    pub document_name: String,

    /// Optional free-text notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Actor that uploaded the document
    pub uploaded_by: ActorId,

    /// Upload timestamp
    pub uploaded_at: DateTime<Utc>,

    /// Whether the record has been approved
    pub is_committed: bool,

    /// Who approved the record; present iff committed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed_by: Option<ActorId>,

    /// When the record was approved; present iff committed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed_at: Option<DateTime<Utc>>,
}

/// Input for uploading a health record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRecordUpload {
    /// Patient the document belongs to
    pub patient_id: PatientId,
    /// Document reference (opaque URI)
    pub document_url: String,
    /// Display name of the document
    pub document_name: String,
    /// Optional free-text notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Actor performing the upload
    pub uploaded_by: ActorId,
}

impl HealthRecordUpload {
    /// Validates the required fields
    ///
    /// # Errors
    ///
    /// Returns a message naming the first empty required field
    pub fn validate(&self) -> Result<(), String> {
        if self.document_url.trim().is_empty() {
            return Err("document URL is required".to_string());
        }
        if self.document_name.trim().is_empty() {
            return Err("document name is required".to_string());
        }
        Ok(())
    }
}
