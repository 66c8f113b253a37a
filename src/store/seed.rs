//! Demo seed data
//!
//! Fixed fixtures matching the facility's demo environment: five patients
//! (one deceased) and two health records. Ids are short numeric strings so
//! they are easy to type at the CLI.

use crate::domain::{
    ActorId, HealthRecord, HealthRecordId, LifecycleStatus, Patient, PatientId,
};
use chrono::{NaiveDate, TimeZone, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// The five demo patients
pub fn seed_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: PatientId::new("1").expect("valid seed id"),
            name: "Venkatesh Rao".to_string(),
            age: 78,
            date_of_birth: date(1946, 3, 15),
            memo_number: "MEM001".to_string(),
            national_id: Some("1234-5678-9012".to_string()),
            guardian_name: "Suresh Rao".to_string(),
            guardian_signature: None,
            photo_url: None,
            fingerprint_url: None,
            admission_date: date(2024, 1, 10),
            status: LifecycleStatus::Admitted,
            is_admission_committed: true,
            admission_committed_by: Some(ActorId::new("2").expect("valid seed id")),
            created_by: ActorId::new("3").expect("valid seed id"),
        },
        Patient {
            id: PatientId::new("2").expect("valid seed id"),
            name: "Kamala Devi".to_string(),
            age: 82,
            date_of_birth: date(1942, 7, 22),
            memo_number: "MEM002".to_string(),
            national_id: None,
            guardian_name: "Prakash Kumar".to_string(),
            guardian_signature: None,
            photo_url: None,
            fingerprint_url: None,
            admission_date: date(2024, 2, 20),
            status: LifecycleStatus::Admitted,
            is_admission_committed: true,
            admission_committed_by: Some(ActorId::new("2").expect("valid seed id")),
            created_by: ActorId::new("3").expect("valid seed id"),
        },
        Patient {
            id: PatientId::new("3").expect("valid seed id"),
            name: "Gopal Krishna".to_string(),
            age: 75,
            date_of_birth: date(1949, 11, 5),
            memo_number: "MEM003".to_string(),
            national_id: Some("9876-5432-1098".to_string()),
            guardian_name: "Meena Kumari".to_string(),
            guardian_signature: None,
            photo_url: None,
            fingerprint_url: None,
            admission_date: date(2024, 3, 5),
            status: LifecycleStatus::Deceased {
                death_date: date(2024, 10, 15),
                death_reason: "Natural causes".to_string(),
                is_death_committed: true,
                death_committed_by: Some(ActorId::new("2").expect("valid seed id")),
            },
            is_admission_committed: true,
            admission_committed_by: Some(ActorId::new("2").expect("valid seed id")),
            created_by: ActorId::new("4").expect("valid seed id"),
        },
        Patient {
            id: PatientId::new("4").expect("valid seed id"),
            name: "Saraswati Bai".to_string(),
            age: 80,
            date_of_birth: date(1944, 9, 18),
            memo_number: "MEM004".to_string(),
            national_id: None,
            guardian_name: "Raman Pillai".to_string(),
            guardian_signature: None,
            photo_url: None,
            fingerprint_url: None,
            admission_date: date(2024, 11, 1),
            status: LifecycleStatus::Admitted,
            is_admission_committed: false,
            admission_committed_by: None,
            created_by: ActorId::new("3").expect("valid seed id"),
        },
        Patient {
            id: PatientId::new("5").expect("valid seed id"),
            name: "Narasimha Murthy".to_string(),
            age: 85,
            date_of_birth: date(1939, 4, 12),
            memo_number: "MEM005".to_string(),
            national_id: None,
            guardian_name: "Lakshmi Narayan".to_string(),
            guardian_signature: None,
            photo_url: None,
            fingerprint_url: None,
            admission_date: date(2024, 11, 10),
            status: LifecycleStatus::Admitted,
            is_admission_committed: false,
            admission_committed_by: None,
            created_by: ActorId::new("4").expect("valid seed id"),
        },
    ]
}

/// The two demo health records
pub fn seed_health_records() -> Vec<HealthRecord> {
    vec![
        HealthRecord {
            id: HealthRecordId::new("1").expect("valid seed id"),
            patient_id: PatientId::new("1").expect("valid seed id"),
            document_url: "/documents/health1.pdf".to_string(),
            document_name: "Monthly Checkup Report".to_string(),
            notes: Some("Blood pressure stable, sugar levels normal".to_string()),
            uploaded_by: ActorId::new("3").expect("valid seed id"),
            uploaded_at: Utc.with_ymd_and_hms(2024, 11, 1, 9, 0, 0).single().expect("valid seed timestamp"),
            is_committed: true,
            committed_by: Some(ActorId::new("3").expect("valid seed id")),
            committed_at: Some(Utc.with_ymd_and_hms(2024, 11, 2, 9, 0, 0).single().expect("valid seed timestamp")),
        },
        HealthRecord {
            id: HealthRecordId::new("2").expect("valid seed id"),
            patient_id: PatientId::new("2").expect("valid seed id"),
            document_url: "/documents/health2.pdf".to_string(),
            document_name: "Cardiology Report".to_string(),
            notes: Some("Heart function normal for age".to_string()),
            uploaded_by: ActorId::new("4").expect("valid seed id"),
            uploaded_at: Utc.with_ymd_and_hms(2024, 11, 5, 9, 0, 0).single().expect("valid seed timestamp"),
            is_committed: false,
            committed_by: None,
            committed_at: None,
        },
    ]
}
