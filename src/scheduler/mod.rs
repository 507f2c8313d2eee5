//! Greedy roster engine and workload summary.
//!
//! # Algorithm
//!
//! `ScheduleEngine` fills shifts in three phases: preference passes by rank,
//! a preference-agnostic backfill, and a workload projection. It is a
//! best-effort heuristic, not a constraint solver: staffing targets may be
//! missed, the day cap never is.
//!
//! # Randomness
//!
//! Ties between candidates are broken by a [`Selector`]. `RandomSelector`
//! gives uniform random order (seedable); `InOrder` keeps registry order for
//! exact, repeatable outcomes.

mod engine;
mod selector;
mod summary;

pub use engine::{ScheduleEngine, WeeklyPlan};
pub use selector::{InOrder, RandomSelector, Selector};
pub use summary::SummaryProjector;
