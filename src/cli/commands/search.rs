//! Search command implementation
//!
//! Runs a patient search over the demo store and prints the matches.

use crate::store::{RecordStore, SearchMode};
use clap::Args;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query; empty returns every patient
    #[arg(default_value = "")]
    pub query: String,

    /// How to interpret the query: name, age, admitted-on-or-after,
    /// died-on-or-after
    #[arg(short, long, default_value = "name")]
    pub mode: SearchMode,
}

impl SearchArgs {
    /// Execute the search command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(query = %self.query, mode = ?self.mode, "Searching patients");

        let store = RecordStore::seeded();
        let hits = store.search_patients(&self.query, self.mode);

        if hits.is_empty() {
            println!("No patients matched.");
            return Ok(0);
        }

        println!("🔎 {} patient(s) matched", hits.len());
        println!();
        for patient in hits {
            let status = if patient.status.is_deceased() {
                "deceased"
            } else {
                "admitted"
            };
            println!(
                "   {:<20} age {:<4} memo {:<8} admitted {}  [{}]",
                patient.name, patient.age, patient.memo_number, patient.admission_date, status
            );
        }

        Ok(0)
    }
}
