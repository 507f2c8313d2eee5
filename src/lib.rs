//! Weekly shift rostering for the U-Engine ecosystem.
//!
//! Assigns employees to the shifts of a fixed seven-day week, honouring a
//! per-shift staffing target, a hard per-employee day cap, and each
//! employee's ranked shift preferences.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `ShiftKind`, `PreferenceSet`,
//!   `EmployeeRegistry`, `Schedule`, `WorkloadTally`
//! - **`scheduler`**: `ScheduleEngine` (preference passes + backfill),
//!   `SummaryProjector`, and the `Selector` randomness seam
//! - **`validation`**: Registration checks (empty or duplicate ids, rankings
//!   that repeat a shift)
//! - **`roster`**: `Roster`, a session holding a registry and its latest plan
//!
//! # Architecture
//!
//! The engine is a pure function of a registry snapshot: it keeps no state
//! between runs and performs no I/O. All validation happens at
//! registration, so scheduling a populated registry cannot fail.
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 13

pub mod config;
pub mod error;
pub mod models;
pub mod roster;
pub mod scheduler;
pub mod validation;

pub use config::{RosterConfig, MAX_DAYS_PER_EMPLOYEE, MIN_EMPLOYEES_PER_SHIFT};
pub use error::{PreferenceError, RegistryError, RegistryResult};
pub use roster::Roster;
