//! Authorization predicates
//!
//! Single source of truth for role-based permission checks. The store
//! mutators re-check these before applying a commit, and the presentation
//! layer consults them before rendering commit controls.
//!
//! There are two independent commit axes, deliberately not unified into
//! one permission tier:
//! - admission/death commits: trustees and founders;
//! - health-record commits: founders and higher-authority staff.
//!
//! A trustee can therefore approve an admission but not a health record,
//! while a higher-authority staff member can approve a health record but
//! not an admission. User and settings management is founder-only.

use crate::domain::{Actor, Role};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A commit (approval) action subject to authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommitAction {
    /// Approve a patient admission
    CommitAdmission,
    /// Approve a death registration
    CommitDeath,
    /// Approve an uploaded health record
    CommitHealthRecord,
}

impl fmt::Display for CommitAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CommitAction::CommitAdmission => "commit admission",
            CommitAction::CommitDeath => "commit death",
            CommitAction::CommitHealthRecord => "commit health record",
        };
        write!(f, "{s}")
    }
}

/// Whether a role may approve admission and death registrations
///
/// Trustees and founders only. The staff higher-authority flag does not
/// grant this; it applies to the health-record axis alone.
pub fn can_commit_patient_event(role: Role) -> bool {
    matches!(role, Role::Trustee | Role::Founder)
}

/// Whether an actor may approve health-record uploads
///
/// Founders, plus staff carrying the higher-authority flag. Trustees are
/// excluded from this axis.
pub fn can_commit_health_record(role: Role, is_higher_authority: bool) -> bool {
    match role {
        Role::Founder => true,
        Role::Staff => is_higher_authority,
        Role::Trustee => false,
    }
}

/// Whether a role may manage users and facility settings
pub fn can_manage_users(role: Role) -> bool {
    role == Role::Founder
}

/// Combined predicate over both commit axes
///
/// # Examples
///
/// ```
/// use ashraya::auth::{can_commit, CommitAction};
/// use ashraya::domain::Role;
///
/// assert!(can_commit(Role::Trustee, false, CommitAction::CommitAdmission));
/// assert!(!can_commit(Role::Trustee, false, CommitAction::CommitHealthRecord));
/// assert!(can_commit(Role::Staff, true, CommitAction::CommitHealthRecord));
/// ```
pub fn can_commit(role: Role, is_higher_authority: bool, action: CommitAction) -> bool {
    match action {
        CommitAction::CommitAdmission | CommitAction::CommitDeath => {
            can_commit_patient_event(role)
        }
        CommitAction::CommitHealthRecord => can_commit_health_record(role, is_higher_authority),
    }
}

/// Convenience wrapper taking a full [`Actor`]
pub fn actor_can_commit(actor: &Actor, action: CommitAction) -> bool {
    can_commit(actor.role, actor.is_higher_authority, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Role::Staff, false, false ; "plain staff denied")]
    #[test_case(Role::Staff, true, false ; "higher authority staff still denied")]
    #[test_case(Role::Trustee, false, true ; "trustee allowed")]
    #[test_case(Role::Founder, false, true ; "founder allowed")]
    fn patient_event_axis(role: Role, higher: bool, expected: bool) {
        assert_eq!(
            can_commit(role, higher, CommitAction::CommitAdmission),
            expected
        );
        assert_eq!(can_commit(role, higher, CommitAction::CommitDeath), expected);
    }

    #[test_case(Role::Staff, false, false ; "plain staff denied")]
    #[test_case(Role::Staff, true, true ; "higher authority staff allowed")]
    #[test_case(Role::Trustee, false, false ; "trustee denied")]
    #[test_case(Role::Trustee, true, false ; "trustee flag ignored")]
    #[test_case(Role::Founder, false, true ; "founder allowed")]
    fn health_record_axis(role: Role, higher: bool, expected: bool) {
        assert_eq!(
            can_commit(role, higher, CommitAction::CommitHealthRecord),
            expected
        );
    }

    #[test]
    fn test_axes_are_independent() {
        // A trustee can approve admissions but not health records, while a
        // higher-authority staff member can do exactly the opposite.
        assert!(can_commit_patient_event(Role::Trustee));
        assert!(!can_commit_health_record(Role::Trustee, false));
        assert!(!can_commit_patient_event(Role::Staff));
        assert!(can_commit_health_record(Role::Staff, true));
    }

    #[test]
    fn test_manage_users_founder_only() {
        assert!(can_manage_users(Role::Founder));
        assert!(!can_manage_users(Role::Trustee));
        assert!(!can_manage_users(Role::Staff));
    }

    #[test]
    fn test_commit_action_display() {
        assert_eq!(
            CommitAction::CommitHealthRecord.to_string(),
            "commit health record"
        );
    }

    #[test]
    fn test_commit_action_serde_kebab_case() {
        let json = serde_json::to_string(&CommitAction::CommitAdmission).unwrap();
        assert_eq!(json, "\"commit-admission\"");
    }
}
