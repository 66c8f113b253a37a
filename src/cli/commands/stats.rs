//! Stats command implementation
//!
//! Prints the dashboard counters computed over the demo store.

use crate::store::RecordStore;
use chrono::Utc;
use clap::Args;

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Reference date for the 28-day windows (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub as_of: Option<String>,
}

impl StatsArgs {
    /// Execute the stats command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let today = match &self.as_of {
            Some(raw) => match chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(d) => d,
                Err(_) => {
                    println!("❌ Invalid date: {raw} (expected YYYY-MM-DD)");
                    return Ok(2);
                }
            },
            None => Utc::now().date_naive(),
        };

        tracing::info!(as_of = %today, "Computing dashboard statistics");

        let store = RecordStore::seeded();
        let stats = store.stats(today);

        println!("📊 Facility Dashboard ({today})");
        println!();
        println!("   Total admissions:      {}", stats.total_admissions);
        println!("   Admissions (28 days):  {}", stats.admissions_last_28_days);
        println!("   Total deaths:          {}", stats.total_deaths);
        println!("   Deaths (28 days):      {}", stats.deaths_last_28_days);
        println!("   Pending commitments:   {}", stats.pending_commitments);

        Ok(0)
    }
}
