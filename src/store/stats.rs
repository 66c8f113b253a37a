//! Dashboard statistics
//!
//! Aggregates the patient collection into the counters shown on the
//! dashboard. Computed against an explicit reference date so the 28-day
//! windows are deterministic in tests.

use crate::domain::Patient;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Counters for the facility dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// All patients ever admitted
    pub total_admissions: usize,
    /// Admissions within the last 28 days
    pub admissions_last_28_days: usize,
    /// Patients with a registered death
    pub total_deaths: usize,
    /// Deaths within the last 28 days
    pub deaths_last_28_days: usize,
    /// Records still awaiting approval (uncommitted admissions plus
    /// uncommitted deaths)
    pub pending_commitments: usize,
}

impl DashboardStats {
    /// Computes statistics over a patient collection
    pub fn compute(patients: &[Patient], today: NaiveDate) -> Self {
        let window_start = today.checked_sub_days(Days::new(28)).unwrap_or(today);

        let total_admissions = patients.len();
        let admissions_last_28_days = patients
            .iter()
            .filter(|p| p.admission_date >= window_start)
            .count();
        let total_deaths = patients.iter().filter(|p| p.status.is_deceased()).count();
        let deaths_last_28_days = patients
            .iter()
            .filter(|p| matches!(p.status.death_date(), Some(d) if d >= window_start))
            .count();
        let pending_commitments = patients
            .iter()
            .filter(|p| p.has_pending_commitment())
            .count();

        Self {
            total_admissions,
            admissions_last_28_days,
            total_deaths,
            deaths_last_28_days,
            pending_commitments,
        }
    }
}
