//! Patient search
//!
//! Pure, read-only filters over a patient slice. Queries that fail to
//! parse (a non-numeric age, a malformed date) match nothing instead of
//! erroring; an empty query returns everything in store order.

use crate::domain::Patient;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a search query is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Case-insensitive substring match on the patient name
    Name,
    /// Exact match on the recorded age
    Age,
    /// Patients admitted on or after the given `YYYY-MM-DD` date
    AdmittedOnOrAfter,
    /// Deceased patients whose death date is on or after the given date
    DiedOnOrAfter,
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SearchMode::Name),
            "age" => Ok(SearchMode::Age),
            "admitted-on-or-after" | "admission-date" => Ok(SearchMode::AdmittedOnOrAfter),
            "died-on-or-after" | "death-date" => Ok(SearchMode::DiedOnOrAfter),
            other => Err(format!(
                "Invalid search mode: {other}. Must be one of: name, age, \
                 admitted-on-or-after, died-on-or-after"
            )),
        }
    }
}

/// Filters patients by query and mode
///
/// # Examples
///
/// ```
/// use ashraya::store::{search, RecordStore, SearchMode};
///
/// let store = RecordStore::seeded();
/// let hits = search(store.patients(), "kamala", SearchMode::Name);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Kamala Devi");
/// ```
pub fn search<'a>(patients: &'a [Patient], query: &str, mode: SearchMode) -> Vec<&'a Patient> {
    let query = query.trim();
    if query.is_empty() {
        return patients.iter().collect();
    }

    match mode {
        SearchMode::Name => {
            let needle = query.to_lowercase();
            patients
                .iter()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .collect()
        }
        SearchMode::Age => match query.parse::<u32>() {
            Ok(age) => patients.iter().filter(|p| p.age == age).collect(),
            Err(_) => Vec::new(),
        },
        SearchMode::AdmittedOnOrAfter => match parse_date(query) {
            Some(threshold) => patients
                .iter()
                .filter(|p| p.admission_date >= threshold)
                .collect(),
            None => Vec::new(),
        },
        SearchMode::DiedOnOrAfter => match parse_date(query) {
            Some(threshold) => patients
                .iter()
                .filter(|p| matches!(p.status.death_date(), Some(d) if d >= threshold))
                .collect(),
            None => Vec::new(),
        },
    }
}

fn parse_date(query: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(query, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::seed_patients;

    #[test]
    fn test_empty_query_returns_all_in_store_order() {
        let patients = seed_patients();
        let hits = search(&patients, "", SearchMode::Name);
        assert_eq!(hits.len(), patients.len());
        assert_eq!(hits[0].name, "Venkatesh Rao");
        assert_eq!(hits[4].name, "Narasimha Murthy");
    }

    #[test]
    fn test_name_search_is_case_insensitive_substring() {
        let patients = seed_patients();
        let hits = search(&patients, "kamala", SearchMode::Name);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Kamala Devi");

        let hits = search(&patients, "RAO", SearchMode::Name);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Venkatesh Rao");
    }

    #[test]
    fn test_name_search_no_match() {
        let patients = seed_patients();
        assert!(search(&patients, "zzz", SearchMode::Name).is_empty());
    }

    #[test]
    fn test_age_search_exact_match() {
        let patients = seed_patients();
        let hits = search(&patients, "78", SearchMode::Age);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Venkatesh Rao");
    }

    #[test]
    fn test_age_search_non_numeric_matches_nothing() {
        let patients = seed_patients();
        assert!(search(&patients, "abc", SearchMode::Age).is_empty());
    }

    #[test]
    fn test_admitted_on_or_after_is_inclusive() {
        let patients = seed_patients();
        let hits = search(&patients, "2024-02-01", SearchMode::AdmittedOnOrAfter);
        let names: Vec<_> = hits.iter().map(|p| p.name.as_str()).collect();

        // Venkatesh Rao was admitted 2024-01-10 and must be excluded.
        assert!(!names.contains(&"Venkatesh Rao"));
        assert!(names.contains(&"Kamala Devi"));
        assert_eq!(hits.len(), 4);

        // Exact boundary date is included.
        let hits = search(&patients, "2024-02-20", SearchMode::AdmittedOnOrAfter);
        assert!(hits.iter().any(|p| p.name == "Kamala Devi"));
    }

    #[test]
    fn test_died_on_or_after_restricted_to_deceased() {
        let patients = seed_patients();
        let hits = search(&patients, "2024-01-01", SearchMode::DiedOnOrAfter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Gopal Krishna");

        let hits = search(&patients, "2024-11-01", SearchMode::DiedOnOrAfter);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_malformed_date_matches_nothing() {
        let patients = seed_patients();
        assert!(search(&patients, "not-a-date", SearchMode::AdmittedOnOrAfter).is_empty());
        assert!(search(&patients, "2024-13-99", SearchMode::DiedOnOrAfter).is_empty());
    }

    #[test]
    fn test_search_mode_from_str() {
        assert_eq!("name".parse::<SearchMode>().unwrap(), SearchMode::Name);
        assert_eq!(
            "admission-date".parse::<SearchMode>().unwrap(),
            SearchMode::AdmittedOnOrAfter
        );
        assert!("memo".parse::<SearchMode>().is_err());
    }
}
