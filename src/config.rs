//! Roster configuration.

use serde::{Deserialize, Serialize};

/// Best-effort staffing target per shift.
pub const MIN_EMPLOYEES_PER_SHIFT: usize = 2;

/// Hard cap on days worked per employee per week.
pub const MAX_DAYS_PER_EMPLOYEE: usize = 5;

/// Staffing limits applied by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Employees each shift should reach. Shifts may end below this when
    /// nobody eligible is left; they never end above it.
    pub min_employees_per_shift: usize,
    /// Days an employee may work. Never exceeded.
    pub max_days_per_employee: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            min_employees_per_shift: MIN_EMPLOYEES_PER_SHIFT,
            max_days_per_employee: MAX_DAYS_PER_EMPLOYEE,
        }
    }
}

impl RosterConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-shift staffing target.
    pub fn with_min_employees_per_shift(mut self, min: usize) -> Self {
        self.min_employees_per_shift = min;
        self
    }

    /// Sets the per-employee day cap.
    pub fn with_max_days_per_employee(mut self, max: usize) -> Self {
        self.max_days_per_employee = max;
        self
    }
}
