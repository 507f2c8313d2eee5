//! Caller-side roster session.
//!
//! The engine keeps nothing between runs. `Roster` is the state a front end
//! would otherwise hold itself: the registry, the engine limits, and the
//! most recent plan. Resetting drops both registry and plan together, so a
//! stale schedule can never be shown for an emptied registry.

use crate::config::RosterConfig;
use crate::error::{RegistryError, RegistryResult};
use crate::models::{EmployeeRegistry, PreferenceSet, Schedule, WorkloadTally};
use crate::scheduler::{ScheduleEngine, Selector, SummaryProjector, WeeklyPlan};

/// Registry plus its latest weekly plan.
///
/// # Example
///
/// ```
/// use u_roster::models::PreferenceSet;
/// use u_roster::Roster;
///
/// let mut roster = Roster::new();
/// roster.register("Alice", PreferenceSet::default()).unwrap();
/// let plan = roster.optimize().unwrap();
/// assert_eq!(plan.tally.days("Alice"), 5);
///
/// roster.reset();
/// assert!(roster.optimize().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Roster {
    registry: EmployeeRegistry,
    engine: ScheduleEngine,
    plan: Option<WeeklyPlan>,
}

impl Roster {
    /// Creates an empty roster with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty roster with custom limits.
    pub fn with_config(config: RosterConfig) -> Self {
        Self {
            engine: ScheduleEngine::with_config(config),
            ..Self::default()
        }
    }

    /// Starts from an existing registry, e.g. one loaded from disk.
    pub fn from_registry(registry: EmployeeRegistry, config: RosterConfig) -> Self {
        Self {
            registry,
            engine: ScheduleEngine::with_config(config),
            plan: None,
        }
    }

    /// Registers an employee. The current plan is kept until the next
    /// [`optimize`](Self::optimize).
    pub fn register(&mut self, id: &str, preferences: PreferenceSet) -> RegistryResult<()> {
        self.registry.register(id, preferences)
    }

    /// Registers an employee and rebuilds the plan straight away.
    pub fn register_and_optimize(
        &mut self,
        id: &str,
        preferences: PreferenceSet,
    ) -> RegistryResult<&WeeklyPlan> {
        self.register(id, preferences)?;
        self.optimize().ok_or(RegistryError::EmptyRegistry)
    }

    /// Clears all employees and the current plan.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.plan = None;
    }

    /// Rebuilds the plan from the current registry.
    ///
    /// On an empty registry nothing changes and `None` is returned.
    pub fn optimize(&mut self) -> Option<&WeeklyPlan> {
        let plan = self.engine.optimize(&self.registry)?;
        Some(self.plan.insert(plan))
    }

    /// Rebuilds the plan with a caller-supplied selector.
    pub fn optimize_with<S: Selector + ?Sized>(&mut self, selector: &mut S) -> Option<&WeeklyPlan> {
        let plan = self.engine.optimize_with(&self.registry, selector)?;
        Some(self.plan.insert(plan))
    }

    /// The latest plan, if any.
    pub fn plan(&self) -> Option<&WeeklyPlan> {
        self.plan.as_ref()
    }

    /// The latest schedule, if any.
    pub fn schedule(&self) -> Option<&Schedule> {
        self.plan.as_ref().map(|p| &p.schedule)
    }

    /// Recomputes the tally of the latest schedule for display.
    pub fn summary(&self) -> Option<WorkloadTally> {
        self.schedule()
            .map(|s| SummaryProjector::project_with_roster(s, &self.registry))
    }

    /// The employee registry.
    pub fn registry(&self) -> &EmployeeRegistry {
        &self.registry
    }

    /// The engine limits.
    pub fn config(&self) -> &RosterConfig {
        self.engine.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, ShiftKind};
    use crate::scheduler::InOrder;

    #[test]
    fn test_register_then_optimize() {
        let mut roster = Roster::new();
        roster.register("Alice", PreferenceSet::default()).unwrap();
        roster.register("Bob", PreferenceSet::default()).unwrap();
        assert!(roster.plan().is_none());

        let plan = roster.optimize_with(&mut InOrder).unwrap();
        assert_eq!(
            plan.schedule.assigned(Day::Monday, ShiftKind::Morning),
            ["Alice", "Bob"]
        );
        assert!(roster.schedule().is_some());
    }

    #[test]
    fn test_register_and_optimize() {
        let mut roster = Roster::new();
        let plan = roster
            .register_and_optimize("Alice", PreferenceSet::default())
            .unwrap();
        assert_eq!(plan.tally.days("Alice"), 5);

        let plan = roster
            .register_and_optimize("Bob", PreferenceSet::default())
            .unwrap();
        assert_eq!(plan.tally.len(), 2);
    }

    #[test]
    fn test_failed_registration_keeps_plan() {
        let mut roster = Roster::new();
        roster
            .register_and_optimize("Alice", PreferenceSet::default())
            .unwrap();
        let before = roster.plan().cloned();

        let err = roster
            .register_and_optimize("Alice", PreferenceSet::default())
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateEmployee("Alice".into()));
        assert_eq!(roster.plan().cloned(), before);
    }

    #[test]
    fn test_reset_drops_plan() {
        let mut roster = Roster::new();
        roster.register("Alice", PreferenceSet::default()).unwrap();
        roster.optimize().unwrap();
        assert!(roster.summary().is_some());

        roster.reset();
        assert!(roster.registry().is_empty());
        // Optimizing an empty roster does nothing
        assert!(roster.optimize().is_none());
        assert!(roster.plan().is_none());
        // and the old schedule does not come back
        assert!(roster.schedule().is_none());
        assert!(roster.summary().is_none());
    }

    #[test]
    fn test_summary_matches_plan_tally() {
        let mut roster = Roster::new();
        for id in ["Alice", "Bob", "Carol"] {
            roster.register(id, PreferenceSet::default()).unwrap();
        }
        let tally = roster.optimize().unwrap().tally.clone();
        assert_eq!(roster.summary(), Some(tally));
    }

    #[test]
    fn test_custom_config() {
        let config = RosterConfig::new().with_max_days_per_employee(2);
        let mut roster = Roster::with_config(config);
        roster.register("Alice", PreferenceSet::default()).unwrap();
        let plan = roster.optimize().unwrap();
        assert_eq!(plan.tally.days("Alice"), 2);
        assert_eq!(roster.config(), &config);
    }

    #[test]
    fn test_from_registry() {
        let mut registry = EmployeeRegistry::new();
        registry.register("Alice", PreferenceSet::default()).unwrap();
        let mut roster = Roster::from_registry(registry, RosterConfig::default());
        assert!(roster.optimize().is_some());
    }
}
