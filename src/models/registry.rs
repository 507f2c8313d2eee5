//! Employee registry.
//!
//! Maps employee identifiers to their validated weekly preferences.
//! Entries are immutable once registered; the only way to change the
//! population is to [`reset`](EmployeeRegistry::reset) and register again.
//!
//! # Persistence
//! The registry serializes as a list of [`Employee`] records. Loading goes
//! through [`EmployeeRegistry::register`], so a persisted file is
//! revalidated on the way in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::PreferenceSet;
use crate::error::{RegistryError, RegistryResult};
use crate::validation::validate_employee;

/// A registered employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique, non-empty identifier.
    pub id: String,
    /// Weekly shift rankings.
    pub preferences: PreferenceSet,
}

/// Registry of employees keyed by identifier.
///
/// Iteration is in identifier order, which is also the order in which
/// candidates are collected before the engine shuffles them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Employee>", into = "Vec<Employee>")]
pub struct EmployeeRegistry {
    employees: BTreeMap<String, PreferenceSet>,
}

impl Employee {
    /// Creates a new employee record.
    pub fn new(id: impl Into<String>, preferences: PreferenceSet) -> Self {
        Self {
            id: id.into(),
            preferences,
        }
    }
}

impl EmployeeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an employee.
    ///
    /// The identifier is trimmed before use. On failure the registry is
    /// left unchanged.
    ///
    /// # Errors
    /// - [`RegistryError::EmptyEmployeeId`] if the identifier is blank
    /// - [`RegistryError::DuplicateEmployee`] if it is already registered
    /// - [`RegistryError::InvalidPreferences`] if any day repeats a shift
    pub fn register(&mut self, id: &str, preferences: PreferenceSet) -> RegistryResult<()> {
        let id = validate_employee(id, &preferences, |id| self.employees.contains_key(id))?;
        tracing::debug!(employee = %id, "employee registered");
        self.employees.insert(id, preferences);
        Ok(())
    }

    /// Removes every employee.
    pub fn reset(&mut self) {
        tracing::debug!(employees = self.employees.len(), "registry reset");
        self.employees.clear();
    }

    /// Preferences for an employee.
    pub fn get(&self, id: &str) -> Option<&PreferenceSet> {
        self.employees.get(id)
    }

    /// Whether an employee is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.employees.contains_key(id)
    }

    /// Iterates `(id, preferences)` in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PreferenceSet)> {
        self.employees.iter().map(|(id, prefs)| (id.as_str(), prefs))
    }

    /// Iterates identifiers in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.employees.keys().map(String::as_str)
    }

    /// Number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl TryFrom<Vec<Employee>> for EmployeeRegistry {
    type Error = RegistryError;

    fn try_from(records: Vec<Employee>) -> Result<Self, Self::Error> {
        let mut registry = Self::new();
        for record in records {
            registry.register(&record.id, record.preferences)?;
        }
        Ok(registry)
    }
}

impl From<EmployeeRegistry> for Vec<Employee> {
    fn from(registry: EmployeeRegistry) -> Self {
        registry
            .employees
            .into_iter()
            .map(|(id, preferences)| Employee { id, preferences })
            .collect()
    }
}
