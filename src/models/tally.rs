//! Per-employee workload tally.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Distinct days worked per employee.
///
/// Always derived from a [`Schedule`](super::Schedule); see
/// [`SummaryProjector`](crate::scheduler::SummaryProjector).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadTally {
    days: BTreeMap<String, usize>,
}

impl WorkloadTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures an employee is listed, with zero days if not yet counted.
    pub(crate) fn include(&mut self, employee: &str) {
        self.days.entry(employee.to_string()).or_insert(0);
    }

    /// Counts one more worked day for an employee.
    pub(crate) fn add_day(&mut self, employee: &str) {
        *self.days.entry(employee.to_string()).or_insert(0) += 1;
    }

    /// Days worked by an employee (0 if not listed).
    pub fn days(&self, employee: &str) -> usize {
        self.days.get(employee).copied().unwrap_or(0)
    }

    /// Whether an employee is listed.
    pub fn contains(&self, employee: &str) -> bool {
        self.days.contains_key(employee)
    }

    /// `(employee, days)` rows in identifier order, for tabular display.
    pub fn rows(&self) -> impl Iterator<Item = (&str, usize)> {
        self.days.iter().map(|(id, &n)| (id.as_str(), n))
    }

    /// Number of listed employees.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no employee is listed.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Sum of worked days across employees.
    pub fn total_days(&self) -> usize {
        self.days.values().sum()
    }

    /// Heaviest individual workload.
    pub fn max_days(&self) -> Option<usize> {
        self.days.values().copied().max()
    }

    /// Lightest individual workload.
    pub fn min_days(&self) -> Option<usize> {
        self.days.values().copied().min()
    }

    /// Mean days per listed employee (0.0 when empty).
    pub fn average_days(&self) -> f64 {
        if self.days.is_empty() {
            0.0
        } else {
            self.total_days() as f64 / self.days.len() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_rows() {
        let mut t = WorkloadTally::new();
        t.add_day("Bob");
        t.add_day("Alice");
        t.add_day("Bob");
        t.include("Carol");
        t.include("Bob");

        assert_eq!(t.days("Bob"), 2);
        assert_eq!(t.days("Carol"), 0);
        assert_eq!(t.days("Nobody"), 0);
        assert!(t.contains("Carol"));
        assert!(!t.contains("Nobody"));
        assert_eq!(
            t.rows().collect::<Vec<_>>(),
            vec![("Alice", 1), ("Bob", 2), ("Carol", 0)]
        );
    }

    #[test]
    fn test_statistics() {
        let mut t = WorkloadTally::new();
        for _ in 0..4 {
            t.add_day("Alice");
        }
        t.add_day("Bob");
        t.include("Carol");

        assert_eq!(t.total_days(), 5);
        assert_eq!(t.max_days(), Some(4));
        assert_eq!(t.min_days(), Some(0));
        assert!((t.average_days() - 5.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_tally() {
        let t = WorkloadTally::new();
        assert!(t.is_empty());
        assert_eq!(t.max_days(), None);
        assert!((t.average_days() - 0.0).abs() < 1e-10);
    }
}
