//! Per-employee shift preference model.
//!
//! Each day carries a ranking: the three shift kinds ordered from most
//! (rank 0) to least (rank 2) preferred. A ranking is only meaningful when
//! it is a permutation of [`ShiftKind::ALL`]; [`PreferenceSet::validate`]
//! enforces that before a set enters a registry.

use serde::{Deserialize, Serialize};

use super::{Day, ShiftKind};
use crate::error::PreferenceError;

/// Number of preference ranks per day.
pub const RANKS: usize = 3;

/// A day's shifts ordered by preference, best first.
pub type DayRanking = [ShiftKind; RANKS];

/// Shift preferences for a full week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSet {
    rankings: [DayRanking; 7],
}

impl PreferenceSet {
    /// Uses the same ranking on every day.
    pub fn uniform(ranking: DayRanking) -> Self {
        Self {
            rankings: [ranking; 7],
        }
    }

    /// Overrides the ranking for one day.
    pub fn with_day(mut self, day: Day, ranking: DayRanking) -> Self {
        self.rankings[day.index()] = ranking;
        self
    }

    /// Builds a set from per-day rankings. Every day must be present.
    ///
    /// Later entries for the same day replace earlier ones. Only
    /// completeness is checked here; permutation checks happen in
    /// [`validate`](Self::validate).
    pub fn from_days<I>(days: I) -> Result<Self, PreferenceError>
    where
        I: IntoIterator<Item = (Day, DayRanking)>,
    {
        let mut slots: [Option<DayRanking>; 7] = [None; 7];
        for (day, ranking) in days {
            slots[day.index()] = Some(ranking);
        }

        let mut rankings = [ShiftKind::ALL; 7];
        for day in Day::ALL {
            rankings[day.index()] = slots[day.index()].ok_or(PreferenceError::MissingDay(day))?;
        }
        Ok(Self { rankings })
    }

    /// The ranking for a day.
    #[inline]
    pub fn ranking(&self, day: Day) -> &DayRanking {
        &self.rankings[day.index()]
    }

    /// The shift at `rank` on `day` (0 = most preferred).
    ///
    /// # Panics
    /// If `rank >= RANKS`.
    #[inline]
    pub fn at_rank(&self, day: Day, rank: usize) -> ShiftKind {
        self.rankings[day.index()][rank]
    }

    /// Rank of `shift` on `day`.
    pub fn rank_of(&self, day: Day, shift: ShiftKind) -> Option<usize> {
        self.ranking(day).iter().position(|&s| s == shift)
    }

    /// Checks that every day ranks each shift exactly once.
    ///
    /// Returns the first offending day in calendar order.
    pub fn validate(&self) -> Result<(), PreferenceError> {
        for day in Day::ALL {
            let mut seen = [false; RANKS];
            for &shift in self.ranking(day) {
                if std::mem::replace(&mut seen[shift.index()], true) {
                    return Err(PreferenceError::DuplicateShift { day, shift });
                }
            }
        }
        Ok(())
    }
}

impl Default for PreferenceSet {
    fn default() -> Self {
        Self::uniform(ShiftKind::ALL)
    }
}
