//! Registry error types.

use thiserror::Error;

use crate::models::{Day, ShiftKind};

/// Why a preference set was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("{shift} is ranked more than once on {day}")]
    DuplicateShift { day: Day, shift: ShiftKind },

    #[error("no ranking given for {0}")]
    MissingDay(Day),
}

/// Errors raised while building or reading an employee registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("employee already registered: {0}")]
    DuplicateEmployee(String),

    #[error("invalid preferences for {employee}: {source}")]
    InvalidPreferences {
        employee: String,
        #[source]
        source: PreferenceError,
    },

    #[error("employee id must not be empty")]
    EmptyEmployeeId,

    #[error("registry has no employees")]
    EmptyRegistry,
}

pub type RegistryResult<T> = Result<T, RegistryError>;
