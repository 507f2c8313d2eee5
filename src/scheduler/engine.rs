//! Preference-ranked greedy roster engine.
//!
//! # Algorithm
//!
//! 1. **Preference passes.** For rank 0, 1, 2 (best first), then each day,
//!    then each shift: collect employees under the day cap, still free that
//!    day, whose rank-`r` choice for the day is this shift. Visit them in
//!    selector order and admit one at a time until the shift reaches its
//!    staffing target.
//! 2. **Backfill.** For each shift still under target, repeatedly pick one
//!    employee under the cap and free that day, ignoring preference, until
//!    the shift is staffed or nobody is left.
//! 3. **Projection.** Count distinct days worked per employee.
//!
//! The day cap and the one-shift-per-day rule hold by construction: an
//! employee is only ever admitted after passing the eligibility check.
//! Understaffing is reported, not treated as an error.
//!
//! # Complexity
//! O(r * d * s * n) for the preference passes and O(d * s * m * n) for
//! backfill, where n = employees and m = staffing target.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use super::selector::{RandomSelector, Selector};
use super::summary::SummaryProjector;
use crate::config::RosterConfig;
use crate::error::{RegistryError, RegistryResult};
use crate::models::{Day, EmployeeRegistry, Schedule, ShiftKind, Shortfall, WorkloadTally, RANKS};

/// Result of one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyPlan {
    /// Assignments per day and shift.
    pub schedule: Schedule,
    /// Distinct days worked per registered employee.
    pub tally: WorkloadTally,
    /// Limits the plan was built under.
    pub config: RosterConfig,
}

impl WeeklyPlan {
    /// Shifts left below the staffing target.
    pub fn shortfalls(&self) -> Vec<Shortfall> {
        self.schedule.shortfalls(self.config.min_employees_per_shift)
    }

    /// Splits the plan into schedule and tally.
    pub fn into_parts(self) -> (Schedule, WorkloadTally) {
        (self.schedule, self.tally)
    }
}

/// Stateless weekly roster builder.
///
/// Holds only its configuration; every call to [`optimize`](Self::optimize)
/// reads the registry and returns a fresh plan.
///
/// # Example
///
/// ```
/// use u_roster::models::{Day, EmployeeRegistry, PreferenceSet, ShiftKind};
/// use u_roster::scheduler::{InOrder, ScheduleEngine};
///
/// let mut registry = EmployeeRegistry::new();
/// registry.register("Alice", PreferenceSet::default()).unwrap();
/// registry.register("Bob", PreferenceSet::default()).unwrap();
///
/// let plan = ScheduleEngine::new()
///     .optimize_with(&registry, &mut InOrder)
///     .unwrap();
/// assert_eq!(plan.schedule.assigned(Day::Monday, ShiftKind::Morning), ["Alice", "Bob"]);
/// assert_eq!(plan.tally.days("Alice"), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleEngine {
    config: RosterConfig,
}

/// Per-run bookkeeping: days worked and who is busy on each day.
struct AssignmentState<'a> {
    days_worked: HashMap<&'a str, usize>,
    busy: [HashSet<&'a str>; 7],
    max_days: usize,
}

impl<'a> AssignmentState<'a> {
    fn new(registry: &'a EmployeeRegistry, max_days: usize) -> Self {
        Self {
            days_worked: registry.ids().map(|id| (id, 0)).collect(),
            busy: std::array::from_fn(|_| HashSet::new()),
            max_days,
        }
    }

    fn is_eligible(&self, employee: &str, day: Day) -> bool {
        self.days_worked.get(employee).copied().unwrap_or(0) < self.max_days
            && !self.busy[day.index()].contains(employee)
    }

    fn admit(&mut self, schedule: &mut Schedule, day: Day, shift: ShiftKind, employee: &'a str) {
        let placed = schedule.assign(day, shift, employee);
        debug_assert!(placed, "{employee} already works on {day}");
        self.busy[day.index()].insert(employee);
        *self.days_worked.entry(employee).or_insert(0) += 1;
    }
}

impl ScheduleEngine {
    /// Creates an engine with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom limits.
    pub fn with_config(config: RosterConfig) -> Self {
        Self { config }
    }

    /// The engine's limits.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Builds a plan using the thread-local random generator.
    ///
    /// Returns `None` for an empty registry.
    pub fn optimize(&self, registry: &EmployeeRegistry) -> Option<WeeklyPlan> {
        self.optimize_with(registry, &mut RandomSelector::thread())
    }

    /// Like [`optimize`](Self::optimize), but an empty registry is an error.
    pub fn try_optimize(&self, registry: &EmployeeRegistry) -> RegistryResult<WeeklyPlan> {
        self.optimize(registry).ok_or(RegistryError::EmptyRegistry)
    }

    /// Builds a plan, delegating every ordering decision to `selector`.
    ///
    /// Returns `None` for an empty registry.
    pub fn optimize_with<S: Selector + ?Sized>(
        &self,
        registry: &EmployeeRegistry,
        selector: &mut S,
    ) -> Option<WeeklyPlan> {
        if registry.is_empty() {
            debug!("registry is empty, nothing to schedule");
            return None;
        }

        let mut schedule = Schedule::new();
        let mut state = AssignmentState::new(registry, self.config.max_days_per_employee);

        self.assign_by_preference(registry, &mut schedule, &mut state, selector);
        self.backfill(registry, &mut schedule, &mut state, selector);

        let tally = SummaryProjector::project_with_roster(&schedule, registry);
        let plan = WeeklyPlan {
            schedule,
            tally,
            config: self.config,
        };

        let shortfalls = plan.shortfalls();
        for gap in &shortfalls {
            warn!(
                day = %gap.day,
                shift = %gap.shift,
                assigned = gap.assigned,
                required = gap.required,
                "shift left understaffed"
            );
        }
        info!(
            employees = registry.len(),
            assignments = plan.schedule.assignment_count(),
            understaffed = shortfalls.len(),
            "weekly plan built"
        );

        Some(plan)
    }

    /// Preference passes, best rank first.
    fn assign_by_preference<'a, S: Selector + ?Sized>(
        &self,
        registry: &'a EmployeeRegistry,
        schedule: &mut Schedule,
        state: &mut AssignmentState<'a>,
        selector: &mut S,
    ) {
        let target = self.config.min_employees_per_shift;

        for rank in 0..RANKS {
            for day in Day::ALL {
                for shift in ShiftKind::ALL {
                    if schedule.headcount(day, shift) >= target {
                        continue;
                    }

                    let mut candidates: Vec<&'a str> = registry
                        .iter()
                        .filter(|&(id, prefs)| {
                            prefs.at_rank(day, rank) == shift && state.is_eligible(id, day)
                        })
                        .map(|(id, _)| id)
                        .collect();
                    selector.shuffle(&mut candidates);

                    for employee in candidates {
                        if schedule.headcount(day, shift) >= target {
                            break;
                        }
                        state.admit(schedule, day, shift, employee);
                        debug!(employee, %day, %shift, rank, "assigned by preference");
                    }
                }
            }
        }
    }

    /// Preference-agnostic top-up of understaffed shifts.
    fn backfill<'a, S: Selector + ?Sized>(
        &self,
        registry: &'a EmployeeRegistry,
        schedule: &mut Schedule,
        state: &mut AssignmentState<'a>,
        selector: &mut S,
    ) {
        let target = self.config.min_employees_per_shift;

        for day in Day::ALL {
            for shift in ShiftKind::ALL {
                while schedule.headcount(day, shift) < target {
                    let available: Vec<&'a str> = registry
                        .ids()
                        .filter(|id| state.is_eligible(id, day))
                        .collect();
                    let Some(employee) = selector
                        .choose(available.len())
                        .and_then(|idx| available.get(idx).copied())
                    else {
                        break;
                    };
                    state.admit(schedule, day, shift, employee);
                    debug!(employee, %day, %shift, "assigned by backfill");
                }
            }
        }
    }
}
