//! Workload summary projection.
//!
//! Derives the per-employee day count from a finished schedule without
//! rerunning the assignment phases. Useful whenever a display needs to be
//! refreshed from a stored or deserialized schedule.

use std::collections::HashSet;

use crate::models::{Day, EmployeeRegistry, Schedule, ShiftKind, WorkloadTally};

/// Projects a [`Schedule`] onto a [`WorkloadTally`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryProjector;

impl SummaryProjector {
    /// Counts distinct days per employee appearing in the schedule.
    ///
    /// Employees with no assignment are not listed.
    pub fn project(schedule: &Schedule) -> WorkloadTally {
        let mut tally = WorkloadTally::new();
        for day in Day::ALL {
            // A deserialized schedule may list someone twice on one day
            let mut counted: HashSet<&str> = HashSet::new();
            for shift in ShiftKind::ALL {
                for employee in schedule.assigned(day, shift) {
                    if counted.insert(employee.as_str()) {
                        tally.add_day(employee);
                    }
                }
            }
        }
        tally
    }

    /// Like [`project`](Self::project), but lists every registered
    /// employee, with zero days for those never assigned.
    pub fn project_with_roster(schedule: &Schedule, registry: &EmployeeRegistry) -> WorkloadTally {
        let mut tally = Self::project(schedule);
        for id in registry.ids() {
            tally.include(id);
        }
        tally
    }
}
