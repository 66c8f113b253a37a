//! Integration tests for the authorization predicates and their
//! enforcement inside the record store

use ashraya::auth::{can_commit, can_manage_users, CommitAction};
use ashraya::directory::UserDirectory;
use ashraya::domain::{AdmissionRequest, AshrayaError, HealthRecordUpload, Role};
use ashraya::store::RecordStore;
use chrono::NaiveDate;
use test_case::test_case;

#[test_case(Role::Staff, false, CommitAction::CommitAdmission, false)]
#[test_case(Role::Staff, true, CommitAction::CommitAdmission, false)]
#[test_case(Role::Trustee, false, CommitAction::CommitAdmission, true)]
#[test_case(Role::Founder, false, CommitAction::CommitAdmission, true)]
#[test_case(Role::Staff, false, CommitAction::CommitDeath, false)]
#[test_case(Role::Staff, true, CommitAction::CommitDeath, false)]
#[test_case(Role::Trustee, false, CommitAction::CommitDeath, true)]
#[test_case(Role::Founder, false, CommitAction::CommitDeath, true)]
#[test_case(Role::Staff, false, CommitAction::CommitHealthRecord, false)]
#[test_case(Role::Staff, true, CommitAction::CommitHealthRecord, true)]
#[test_case(Role::Trustee, false, CommitAction::CommitHealthRecord, false)]
#[test_case(Role::Founder, false, CommitAction::CommitHealthRecord, true)]
fn permission_matrix(role: Role, higher: bool, action: CommitAction, expected: bool) {
    assert_eq!(can_commit(role, higher, action), expected);
}

#[test]
fn test_manage_users_is_founder_only() {
    assert!(can_manage_users(Role::Founder));
    assert!(!can_manage_users(Role::Trustee));
    assert!(!can_manage_users(Role::Staff));
}

#[test]
fn test_store_enforces_predicates_not_just_ui() {
    // Defense in depth: calling the mutators directly, without any
    // presentation-layer gating, still yields Forbidden.
    let directory = UserDirectory::seeded();
    let plain_staff = directory
        .login("staff2@oldhome.example", "staff123", Role::Staff)
        .unwrap();
    let senior_staff = directory
        .login("staff@oldhome.example", "staff123", Role::Staff)
        .unwrap();
    let trustee = directory
        .login("trustee@oldhome.example", "trustee123", Role::Trustee)
        .unwrap();

    let mut store = RecordStore::new();
    let patient_id = store
        .admit_patient(AdmissionRequest {
            name: "Venkatesh Rao".to_string(),
            age: 78,
            date_of_birth: NaiveDate::from_ymd_opt(1946, 3, 15).unwrap(),
            memo_number: "MEM001".to_string(),
            national_id: None,
            guardian_name: "Suresh Rao".to_string(),
            guardian_signature: None,
            photo_url: None,
            fingerprint_url: None,
            admission_date: None,
            created_by: plain_staff.actor().id.clone(),
        })
        .unwrap()
        .id
        .clone();
    let record_id = store
        .add_health_record(HealthRecordUpload {
            patient_id: patient_id.clone(),
            document_url: "/documents/x.pdf".to_string(),
            document_name: "Report".to_string(),
            notes: None,
            uploaded_by: plain_staff.actor().id.clone(),
        })
        .unwrap()
        .id
        .clone();

    // Patient-event axis: staff denied regardless of the authority flag.
    for session in [&plain_staff, &senior_staff] {
        let err = store
            .commit_admission(&patient_id, session.actor())
            .unwrap_err();
        assert!(matches!(err, AshrayaError::Forbidden { .. }));
    }

    // Health-record axis: trustee denied, higher-authority staff allowed.
    let err = store
        .commit_health_record(&record_id, trustee.actor())
        .unwrap_err();
    assert!(matches!(err, AshrayaError::Forbidden { .. }));
    assert!(store
        .commit_health_record(&record_id, senior_staff.actor())
        .is_ok());
}

#[test]
fn test_forbidden_is_distinguishable_from_not_found() {
    let directory = UserDirectory::seeded();
    let plain_staff = directory
        .login("staff2@oldhome.example", "staff123", Role::Staff)
        .unwrap();
    let trustee = directory
        .login("trustee@oldhome.example", "trustee123", Role::Trustee)
        .unwrap();

    let mut store = RecordStore::seeded();
    let missing = ashraya::domain::PatientId::new("no-such").unwrap();
    let existing = ashraya::domain::PatientId::new("4").unwrap();

    // Authorization is checked first, so an unauthorized caller learns
    // nothing about whether the id exists.
    let err = store.commit_admission(&missing, plain_staff.actor()).unwrap_err();
    assert!(matches!(err, AshrayaError::Forbidden { .. }));
    let err = store.commit_admission(&existing, plain_staff.actor()).unwrap_err();
    assert!(matches!(err, AshrayaError::Forbidden { .. }));

    // An authorized caller gets the distinct not-found outcome.
    let err = store.commit_admission(&missing, trustee.actor()).unwrap_err();
    assert!(matches!(err, AshrayaError::PatientNotFound(_)));

    // The denied commits did not partially apply.
    assert!(!store.patient(&existing).unwrap().is_admission_committed);
}
