//! In-memory record store
//!
//! Owns the authoritative collections of patients and health records for
//! the process lifetime and applies lifecycle transitions. The store is an
//! explicit object passed to whoever needs it, not ambient global state;
//! all mutation is synchronous through `&mut self`.
//!
//! Commit mutators re-check authorization themselves rather than trusting
//! the presentation layer to have hidden the button.

pub mod search;
pub mod seed;
pub mod stats;

pub use search::{search, SearchMode};
pub use stats::DashboardStats;

use crate::auth::{actor_can_commit, CommitAction};
use crate::domain::{
    Actor, AdmissionRequest, AshrayaError, HealthRecord, HealthRecordId, HealthRecordUpload,
    LifecycleStatus, Patient, PatientId, Result,
};
use chrono::{NaiveDate, Utc};

/// Authoritative in-memory store of patients and health records
///
/// # Examples
///
/// ```
/// use ashraya::store::RecordStore;
///
/// let store = RecordStore::seeded();
/// assert_eq!(store.patients().len(), 5);
/// ```
#[derive(Debug, Default)]
pub struct RecordStore {
    patients: Vec<Patient>,
    health_records: Vec<HealthRecord>,
}

impl RecordStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with the demo fixtures
    pub fn seeded() -> Self {
        Self {
            patients: seed::seed_patients(),
            health_records: seed::seed_health_records(),
        }
    }

    /// All patients, in insertion order
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// All health records, in insertion order
    pub fn health_records(&self) -> &[HealthRecord] {
        &self.health_records
    }

    /// Looks up a patient by id; `None` for unknown ids, never an error
    pub fn patient(&self, id: &PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| &p.id == id)
    }

    /// Looks up a health record by id
    pub fn health_record(&self, id: &HealthRecordId) -> Option<&HealthRecord> {
        self.health_records.iter().find(|r| &r.id == id)
    }

    /// All health records belonging to one patient
    pub fn records_for_patient(&self, patient_id: &PatientId) -> Vec<&HealthRecord> {
        self.health_records
            .iter()
            .filter(|r| &r.patient_id == patient_id)
            .collect()
    }

    /// Admits a new patient
    ///
    /// The new record starts provisional: status admitted, admission not
    /// yet committed. The admission date defaults to today when the
    /// request leaves it unset. Duplicate memo numbers are permitted by
    /// the model and only logged.
    ///
    /// # Errors
    ///
    /// Returns [`AshrayaError::Validation`] when a required field is blank
    pub fn admit_patient(&mut self, request: AdmissionRequest) -> Result<&Patient> {
        request.validate().map_err(AshrayaError::Validation)?;

        if self
            .patients
            .iter()
            .any(|p| p.memo_number == request.memo_number)
        {
            tracing::warn!(
                memo_number = %request.memo_number,
                "Admitting patient with a memo number already in use"
            );
        }

        let patient = Patient {
            id: PatientId::generate(),
            name: request.name,
            age: request.age,
            date_of_birth: request.date_of_birth,
            memo_number: request.memo_number,
            national_id: request.national_id,
            guardian_name: request.guardian_name,
            guardian_signature: request.guardian_signature,
            photo_url: request.photo_url,
            fingerprint_url: request.fingerprint_url,
            admission_date: request
                .admission_date
                .unwrap_or_else(|| Utc::now().date_naive()),
            status: LifecycleStatus::Admitted,
            is_admission_committed: false,
            admission_committed_by: None,
            created_by: request.created_by,
        };

        tracing::info!(
            patient_id = %patient.id,
            name = %patient.name,
            memo_number = %patient.memo_number,
            "Patient admitted"
        );

        self.patients.push(patient);
        Ok(self.patients.last().expect("just pushed"))
    }

    /// Registers the death of an admitted patient
    ///
    /// Sets the deceased status with the supplied date and reason and a
    /// fresh, uncommitted death flag. A patient whose death is already
    /// registered is rejected rather than silently overwritten, so a
    /// committed death record can never regress.
    ///
    /// # Errors
    ///
    /// - [`AshrayaError::Validation`] when the reason is blank
    /// - [`AshrayaError::PatientNotFound`] for an unknown id
    /// - [`AshrayaError::InvalidTransition`] when the patient is already deceased
    pub fn register_death(
        &mut self,
        patient_id: &PatientId,
        death_date: NaiveDate,
        reason: &str,
    ) -> Result<&Patient> {
        if reason.trim().is_empty() {
            return Err(AshrayaError::Validation(
                "death reason is required".to_string(),
            ));
        }

        let patient = self
            .patients
            .iter_mut()
            .find(|p| &p.id == patient_id)
            .ok_or_else(|| AshrayaError::PatientNotFound(patient_id.to_string()))?;

        if patient.status.is_deceased() {
            return Err(AshrayaError::InvalidTransition(format!(
                "death already registered for patient {patient_id}"
            )));
        }

        patient.status = LifecycleStatus::Deceased {
            death_date,
            death_reason: reason.trim().to_string(),
            is_death_committed: false,
            death_committed_by: None,
        };

        tracing::info!(
            patient_id = %patient.id,
            death_date = %death_date,
            "Death registered"
        );

        Ok(patient)
    }

    /// Approves a patient's admission
    ///
    /// Idempotent: re-committing an already-committed admission keeps the
    /// original approver and succeeds without changes.
    ///
    /// # Errors
    ///
    /// - [`AshrayaError::Forbidden`] when the actor may not commit patient events
    /// - [`AshrayaError::PatientNotFound`] for an unknown id
    pub fn commit_admission(&mut self, patient_id: &PatientId, actor: &Actor) -> Result<&Patient> {
        self.authorize(actor, CommitAction::CommitAdmission)?;

        let patient = self
            .patients
            .iter_mut()
            .find(|p| &p.id == patient_id)
            .ok_or_else(|| AshrayaError::PatientNotFound(patient_id.to_string()))?;

        if patient.is_admission_committed {
            tracing::debug!(patient_id = %patient.id, "Admission already committed");
            return Ok(patient);
        }

        patient.is_admission_committed = true;
        patient.admission_committed_by = Some(actor.id.clone());

        tracing::info!(
            patient_id = %patient.id,
            committed_by = %actor.id,
            "Admission committed"
        );

        Ok(patient)
    }

    /// Approves a patient's death registration
    ///
    /// Same contract as [`commit_admission`](Self::commit_admission); in
    /// addition the patient must actually have a registered death.
    ///
    /// # Errors
    ///
    /// - [`AshrayaError::Forbidden`] when the actor may not commit patient events
    /// - [`AshrayaError::PatientNotFound`] for an unknown id
    /// - [`AshrayaError::InvalidTransition`] when no death is registered
    pub fn commit_death(&mut self, patient_id: &PatientId, actor: &Actor) -> Result<&Patient> {
        self.authorize(actor, CommitAction::CommitDeath)?;

        let patient = self
            .patients
            .iter_mut()
            .find(|p| &p.id == patient_id)
            .ok_or_else(|| AshrayaError::PatientNotFound(patient_id.to_string()))?;

        match &mut patient.status {
            LifecycleStatus::Admitted => {
                return Err(AshrayaError::InvalidTransition(format!(
                    "no death registered for patient {patient_id}"
                )))
            }
            LifecycleStatus::Deceased {
                is_death_committed,
                death_committed_by,
                ..
            } => {
                if *is_death_committed {
                    tracing::debug!(patient_id = %patient_id, "Death already committed");
                } else {
                    *is_death_committed = true;
                    *death_committed_by = Some(actor.id.clone());
                    tracing::info!(
                        patient_id = %patient_id,
                        committed_by = %actor.id,
                        "Death committed"
                    );
                }
            }
        }

        Ok(patient)
    }

    /// Uploads a health record for an existing patient
    ///
    /// # Errors
    ///
    /// - [`AshrayaError::Validation`] when a required field is blank
    /// - [`AshrayaError::PatientNotFound`] when the patient does not exist
    pub fn add_health_record(&mut self, upload: HealthRecordUpload) -> Result<&HealthRecord> {
        upload.validate().map_err(AshrayaError::Validation)?;

        if self.patient(&upload.patient_id).is_none() {
            return Err(AshrayaError::PatientNotFound(upload.patient_id.to_string()));
        }

        let record = HealthRecord {
            id: HealthRecordId::generate(),
            patient_id: upload.patient_id,
            document_url: upload.document_url,
            document_name: upload.document_name,
            notes: upload.notes,
            uploaded_by: upload.uploaded_by,
            uploaded_at: Utc::now(),
            is_committed: false,
            committed_by: None,
            committed_at: None,
        };

        tracing::info!(
            record_id = %record.id,
            patient_id = %record.patient_id,
            document = %record.document_name,
            "Health record uploaded"
        );

        self.health_records.push(record);
        Ok(self.health_records.last().expect("just pushed"))
    }

    /// Approves an uploaded health record
    ///
    /// Sets committer and commit timestamp together. Idempotent: a second
    /// commit keeps the original approver and timestamp.
    ///
    /// # Errors
    ///
    /// - [`AshrayaError::Forbidden`] when the actor may not commit health records
    /// - [`AshrayaError::RecordNotFound`] for an unknown id
    pub fn commit_health_record(
        &mut self,
        record_id: &HealthRecordId,
        actor: &Actor,
    ) -> Result<&HealthRecord> {
        self.authorize(actor, CommitAction::CommitHealthRecord)?;

        let record = self
            .health_records
            .iter_mut()
            .find(|r| &r.id == record_id)
            .ok_or_else(|| AshrayaError::RecordNotFound(record_id.to_string()))?;

        if record.is_committed {
            tracing::debug!(record_id = %record.id, "Health record already committed");
            return Ok(record);
        }

        record.is_committed = true;
        record.committed_by = Some(actor.id.clone());
        record.committed_at = Some(Utc::now());

        tracing::info!(
            record_id = %record.id,
            committed_by = %actor.id,
            "Health record committed"
        );

        Ok(record)
    }

    /// Searches patients; see [`search`] for the mode semantics
    pub fn search_patients(&self, query: &str, mode: SearchMode) -> Vec<&Patient> {
        search(&self.patients, query, mode)
    }

    /// Dashboard statistics relative to the given reference date
    pub fn stats(&self, today: NaiveDate) -> DashboardStats {
        DashboardStats::compute(&self.patients, today)
    }

    fn authorize(&self, actor: &Actor, action: CommitAction) -> Result<()> {
        if actor_can_commit(actor, action) {
            Ok(())
        } else {
            tracing::warn!(
                actor_id = %actor.id,
                role = %actor.role,
                action = %action,
                "Authorization denied"
            );
            Err(AshrayaError::forbidden(actor.describe(), action.to_string()))
        }
    }
}
