// Ashraya - care facility record keeping
// Copyright (c) 2025 Ashraya Contributors
// Licensed under the MIT License

//! # Ashraya - care facility record keeping
//!
//! Ashraya models the administrative workflow of a residential care
//! facility: patient admission, death registration, health-record uploads,
//! and a two-step commit (approval) workflow gated by role-based
//! authorization. State is held in memory for the process lifetime and can
//! be seeded from demo fixtures.
//!
//! ## Architecture
//!
//! Ashraya follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`store`] - Record store, lifecycle transitions, search, statistics
//! - [`auth`] - Role-based authorization predicates
//! - [`directory`] - User directory, demo login and session identity
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```
//! use ashraya::directory::UserDirectory;
//! use ashraya::domain::{PatientId, Role};
//! use ashraya::store::RecordStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = UserDirectory::seeded();
//! let mut store = RecordStore::seeded();
//!
//! // Authenticate and approve a pending admission as a trustee.
//! let session = directory.login("trustee@oldhome.example", "trustee123", Role::Trustee)?;
//! let patient = store.commit_admission(&PatientId::new("4")?, session.actor())?;
//! assert!(patient.is_admission_committed);
//! # Ok(())
//! # }
//! ```
//!
//! ## Commit workflow
//!
//! Every recorded event starts provisional and is finalized by a second,
//! authorized approval:
//!
//! - admissions and deaths are committed by trustees and founders;
//! - health records are committed by founders and higher-authority staff;
//! - user and settings management is founder-only.
//!
//! The two commit axes are independent by design: a trustee cannot approve
//! a health record, and a higher-authority staff member cannot approve an
//! admission. [`auth::can_commit`] is the single source of truth; the
//! store mutators re-check it before applying any commit.
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`], and the error kinds a
//! caller must distinguish are explicit: [`domain::AshrayaError::Forbidden`]
//! for authorization denials, the not-found variants for unknown ids, and
//! [`domain::AshrayaError::Validation`] for bad input. Search is the
//! exception by design: an unparseable query simply matches nothing.
//!
//! ## Logging
//!
//! Ashraya uses structured logging with the `tracing` crate:
//!
//! ```no_run
//! use tracing::{info, warn};
//!
//! info!(patient_id = "4", "Admission committed");
//! warn!(actor_id = "3", action = "commit admission", "Authorization denied");
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod directory;
pub mod domain;
pub mod logging;
pub mod store;
