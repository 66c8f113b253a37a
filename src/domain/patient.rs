//! Patient domain model
//!
//! The lifecycle status is a tagged union rather than a pile of optional
//! fields: a deceased patient always carries a death date and reason, so
//! "deceased with no death date" is unrepresentable. The admission
//! committer is stored separately from the death committer (which lives
//! inside the `Deceased` variant) so neither approval overwrites the other.

use super::ids::{ActorId, PatientId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LifecycleStatus {
    /// Resident at the facility
    Admitted,
    /// Death has been registered
    Deceased {
        /// Date of death
        death_date: NaiveDate,
        /// Recorded cause of death
        death_reason: String,
        /// Whether the death registration has been approved
        is_death_committed: bool,
        /// Who approved the death registration, once committed
        #[serde(skip_serializing_if = "Option::is_none")]
        death_committed_by: Option<ActorId>,
    },
}

impl LifecycleStatus {
    /// True when the patient is still admitted
    pub fn is_admitted(&self) -> bool {
        matches!(self, LifecycleStatus::Admitted)
    }

    /// True when a death has been registered
    pub fn is_deceased(&self) -> bool {
        matches!(self, LifecycleStatus::Deceased { .. })
    }

    /// The death date, if a death has been registered
    pub fn death_date(&self) -> Option<NaiveDate> {
        match self {
            LifecycleStatus::Admitted => None,
            LifecycleStatus::Deceased { death_date, .. } => Some(*death_date),
        }
    }
}

/// A patient record
///
/// Created by an admission; a death may later be registered; both events
/// are finalized by a separate commit step performed by an authorized actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Unique identifier
    pub id: PatientId,

    /// Full name
    pub name: String,

    /// Age recorded at admission
    ///
    /// Static by design: it is not derived from the date of birth and the
    /// two may diverge over time.
    pub age: u32,

    /// Date of birth
    pub date_of_birth: NaiveDate,

    /// Facility-assigned memo number
    ///
    /// Opaque string; the model does not guarantee uniqueness.
    pub memo_number: String,

    /// Optional national identification number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,

    /// Name of the patient's guardian
    pub guardian_name: String,

    /// Optional guardian signature string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_signature: Option<String>,

    /// Optional photo reference (opaque URI)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    /// Optional fingerprint reference (opaque URI)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint_url: Option<String>,

    /// Date of admission
    pub admission_date: NaiveDate,

    /// Lifecycle status, including death details once registered
    #[serde(flatten)]
    pub status: LifecycleStatus,

    /// Whether the admission has been approved
    pub is_admission_committed: bool,

    /// Who approved the admission, once committed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_committed_by: Option<ActorId>,

    /// Actor that performed the admission
    pub created_by: ActorId,
}

impl Patient {
    /// Whether the death registration has been approved
    ///
    /// `None` while the patient is admitted, `Some(flag)` once a death has
    /// been registered.
    pub fn is_death_committed(&self) -> Option<bool> {
        match &self.status {
            LifecycleStatus::Admitted => None,
            LifecycleStatus::Deceased {
                is_death_committed, ..
            } => Some(*is_death_committed),
        }
    }

    /// True when an approval is still pending on this record
    ///
    /// Pending means an uncommitted admission or an uncommitted death.
    pub fn has_pending_commitment(&self) -> bool {
        !self.is_admission_committed || self.is_death_committed() == Some(false)
    }
}

/// Input for admitting a new patient
///
/// Identifier, status and commit flags are assigned by the store; the
/// admission date defaults to today when not supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmissionRequest {
    /// Full name (required)
    pub name: String,
    /// Age at admission; facility convention is 60-120 but this is a UI
    /// hint, not enforced here
    pub age: u32,
    /// Date of birth (required)
    pub date_of_birth: NaiveDate,
    /// Facility-assigned memo number (required)
    pub memo_number: String,
    /// Optional national identification number
    #[serde(default)]
    pub national_id: Option<String>,
    /// Guardian name (required)
    pub guardian_name: String,
    /// Optional guardian signature
    #[serde(default)]
    pub guardian_signature: Option<String>,
    /// Optional photo reference
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Optional fingerprint reference
    #[serde(default)]
    pub fingerprint_url: Option<String>,
    /// Admission date; defaults to today when absent
    #[serde(default)]
    pub admission_date: Option<NaiveDate>,
    /// Actor performing the admission
    pub created_by: ActorId,
}

impl AdmissionRequest {
    /// Validates the required free-text fields
    ///
    /// # Errors
    ///
    /// Returns a message naming the first empty required field
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is required".to_string());
        }
        if self.memo_number.trim().is_empty() {
            return Err("memo number is required".to_string());
        }
        if self.guardian_name.trim().is_empty() {
            return Err("guardian name is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> AdmissionRequest {
        AdmissionRequest {
            name: "Saraswati Bai".to_string(),
            age: 80,
            date_of_birth: NaiveDate::from_ymd_opt(1944, 9, 18).unwrap(),
            memo_number: "MEM004".to_string(),
            national_id: None,
            guardian_name: "Raman Pillai".to_string(),
            guardian_signature: None,
            photo_url: None,
            fingerprint_url: None,
            admission_date: Some(NaiveDate::from_ymd_opt(2024, 11, 1).unwrap()),
            created_by: ActorId::new("3").unwrap(),
        }
    }

    #[test]
    fn test_admission_request_validates() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn test_admission_request_rejects_blank_fields() {
        let mut req = sample_request();
        req.name = "  ".to_string();
        assert_eq!(req.validate().unwrap_err(), "name is required");

        let mut req = sample_request();
        req.memo_number = String::new();
        assert_eq!(req.validate().unwrap_err(), "memo number is required");

        let mut req = sample_request();
        req.guardian_name = String::new();
        assert_eq!(req.validate().unwrap_err(), "guardian name is required");
    }

    #[test]
    fn test_lifecycle_status_accessors() {
        let admitted = LifecycleStatus::Admitted;
        assert!(admitted.is_admitted());
        assert!(!admitted.is_deceased());
        assert_eq!(admitted.death_date(), None);

        let date = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
        let deceased = LifecycleStatus::Deceased {
            death_date: date,
            death_reason: "Natural causes".to_string(),
            is_death_committed: false,
            death_committed_by: None,
        };
        assert!(deceased.is_deceased());
        assert_eq!(deceased.death_date(), Some(date));
    }

    #[test]
    fn test_pending_commitment() {
        let patient = Patient {
            id: PatientId::new("4").unwrap(),
            name: "Saraswati Bai".to_string(),
            age: 80,
            date_of_birth: NaiveDate::from_ymd_opt(1944, 9, 18).unwrap(),
            memo_number: "MEM004".to_string(),
            national_id: None,
            guardian_name: "Raman Pillai".to_string(),
            guardian_signature: None,
            photo_url: None,
            fingerprint_url: None,
            admission_date: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            status: LifecycleStatus::Admitted,
            is_admission_committed: false,
            admission_committed_by: None,
            created_by: ActorId::new("3").unwrap(),
        };
        assert!(patient.has_pending_commitment());

        let committed = Patient {
            is_admission_committed: true,
            admission_committed_by: Some(ActorId::new("2").unwrap()),
            ..patient.clone()
        };
        assert!(!committed.has_pending_commitment());

        let deceased_uncommitted = Patient {
            is_admission_committed: true,
            status: LifecycleStatus::Deceased {
                death_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
                death_reason: "Cardiac arrest".to_string(),
                is_death_committed: false,
                death_committed_by: None,
            },
            ..patient
        };
        assert!(deceased_uncommitted.has_pending_commitment());
    }

    #[test]
    fn test_patient_serialization_round_trip() {
        let patient = Patient {
            id: PatientId::new("3").unwrap(),
            name: "Gopal Krishna".to_string(),
            age: 75,
            date_of_birth: NaiveDate::from_ymd_opt(1949, 11, 5).unwrap(),
            memo_number: "MEM003".to_string(),
            national_id: Some("9876-5432-1098".to_string()),
            guardian_name: "Meena Kumari".to_string(),
            guardian_signature: None,
            photo_url: None,
            fingerprint_url: None,
            admission_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            status: LifecycleStatus::Deceased {
                death_date: NaiveDate::from_ymd_opt(2024, 10, 15).unwrap(),
                death_reason: "Natural causes".to_string(),
                is_death_committed: true,
                death_committed_by: Some(ActorId::new("2").unwrap()),
            },
            is_admission_committed: true,
            admission_committed_by: Some(ActorId::new("2").unwrap()),
            created_by: ActorId::new("4").unwrap(),
        };

        let json = serde_json::to_string(&patient).unwrap();
        let deserialized: Patient = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.status, patient.status);
        assert_eq!(deserialized.id, patient.id);
    }
}
