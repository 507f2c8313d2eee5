//! Rostering domain models.
//!
//! Provides the core data types for a weekly shift roster: the fixed
//! calendar, employee preferences and registry, and the resulting schedule
//! and workload tally.
//!
//! # Domain Mappings
//!
//! | u-roster | Retail | Healthcare | Hospitality |
//! |----------|--------|------------|-------------|
//! | Employee | Clerk | Nurse | Server |
//! | ShiftKind | Opening/Closing | Day/Night | Breakfast/Dinner |
//! | Schedule | Store rota | Ward roster | Floor plan |

mod preference;
mod registry;
mod schedule;
mod tally;
mod week;

pub use preference::{DayRanking, PreferenceSet, RANKS};
pub use registry::{Employee, EmployeeRegistry};
pub use schedule::{Schedule, Shortfall};
pub use tally::WorkloadTally;
pub use week::{Day, ParseLabelError, ShiftKind};
