//! Input validation for employee registration.
//!
//! All checks run at registration time so that a populated registry can
//! always be scheduled. Detects:
//! - Empty employee identifiers
//! - Rankings that repeat a shift within a day
//! - Identifiers already present in the registry

use crate::error::{RegistryError, RegistryResult};
use crate::models::PreferenceSet;

/// Trims an employee identifier and rejects it if nothing is left.
pub fn normalize_id(raw: &str) -> RegistryResult<String> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(RegistryError::EmptyEmployeeId);
    }
    Ok(id.to_string())
}

/// Validates a registration against the identifiers already taken.
///
/// Checks, in order:
/// 1. The identifier is non-empty after trimming
/// 2. The identifier is not already registered
/// 3. Every day ranks each shift exactly once
///
/// # Returns
/// The normalized identifier on success.
pub fn validate_employee<F>(
    raw_id: &str,
    preferences: &PreferenceSet,
    is_taken: F,
) -> RegistryResult<String>
where
    F: Fn(&str) -> bool,
{
    let id = normalize_id(raw_id)?;
    if is_taken(&id) {
        return Err(RegistryError::DuplicateEmployee(id));
    }
    preferences
        .validate()
        .map_err(|source| RegistryError::InvalidPreferences {
            employee: id.clone(),
            source,
        })?;
    Ok(id)
}
