//! Weekly schedule (solution) model.
//!
//! A schedule holds, for every day and shift, the ordered list of employees
//! assigned to it. An employee works at most one shift per day; the
//! [`assign`](Schedule::assign) method refuses anything else, so every
//! schedule in circulation satisfies that invariant.
//!
//! Schedules are rebuilt from scratch on every engine run and are never
//! patched incrementally.

use serde::{Deserialize, Serialize};

use super::{Day, ShiftKind};

/// Employee assignments for one week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    slots: [[Vec<String>; 3]; 7],
}

/// A shift left below its staffing target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    /// Day of the understaffed shift.
    pub day: Day,
    /// The understaffed shift.
    pub shift: ShiftKind,
    /// Employees actually assigned.
    pub assigned: usize,
    /// Staffing target.
    pub required: usize,
}

impl Shortfall {
    /// Employees missing to reach the target.
    #[inline]
    pub fn missing(&self) -> usize {
        self.required - self.assigned
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns an employee to a shift.
    ///
    /// Returns `false`, leaving the schedule untouched, if the employee
    /// already works any shift on that day.
    pub fn assign(&mut self, day: Day, shift: ShiftKind, employee: impl Into<String>) -> bool {
        let employee = employee.into();
        if self.shift_of(day, &employee).is_some() {
            return false;
        }
        self.slots[day.index()][shift.index()].push(employee);
        true
    }

    /// Employees on a shift, in assignment order.
    #[inline]
    pub fn assigned(&self, day: Day, shift: ShiftKind) -> &[String] {
        &self.slots[day.index()][shift.index()]
    }

    /// Number of employees on a shift.
    #[inline]
    pub fn headcount(&self, day: Day, shift: ShiftKind) -> usize {
        self.assigned(day, shift).len()
    }

    /// The shift an employee works on a day, if any.
    pub fn shift_of(&self, day: Day, employee: &str) -> Option<ShiftKind> {
        ShiftKind::ALL
            .into_iter()
            .find(|&shift| self.assigned(day, shift).iter().any(|e| e == employee))
    }

    /// Number of distinct days an employee works.
    pub fn days_worked(&self, employee: &str) -> usize {
        Day::ALL
            .into_iter()
            .filter(|&day| self.shift_of(day, employee).is_some())
            .count()
    }

    /// Iterates `(day, shift, employees)` in calendar then shift order.
    pub fn iter(&self) -> impl Iterator<Item = (Day, ShiftKind, &[String])> + '_ {
        Day::ALL.into_iter().flat_map(move |day| {
            ShiftKind::ALL
                .into_iter()
                .map(move |shift| (day, shift, self.assigned(day, shift)))
        })
    }

    /// Total number of employee-shift assignments.
    pub fn assignment_count(&self) -> usize {
        self.iter().map(|(_, _, employees)| employees.len()).sum()
    }

    /// Whether nobody is assigned anywhere.
    pub fn is_empty(&self) -> bool {
        self.assignment_count() == 0
    }

    /// Lists every shift holding fewer than `required` employees.
    pub fn shortfalls(&self, required: usize) -> Vec<Shortfall> {
        self.iter()
            .filter(|(_, _, employees)| employees.len() < required)
            .map(|(day, shift, employees)| Shortfall {
                day,
                shift,
                assigned: employees.len(),
                required,
            })
            .collect()
    }

    /// Whether every shift reaches `required` employees.
    pub fn is_fully_staffed(&self, required: usize) -> bool {
        self.shortfalls(required).is_empty()
    }
}
