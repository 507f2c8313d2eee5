//! Fixed weekly calendar: days and shift kinds.
//!
//! Both enums double as identity and sort key. Their declaration order is
//! the order every pass of the engine walks, and the order a schedule is
//! rendered in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A day of the scheduling week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// A shift within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShiftKind {
    Morning,
    Afternoon,
    Evening,
}

/// Error returned when a day or shift label cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} label: {label:?}")]
pub struct ParseLabelError {
    kind: &'static str,
    label: String,
}

impl Day {
    /// All days in calendar order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Position in [`Day::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl ShiftKind {
    /// All shifts in daily order.
    pub const ALL: [ShiftKind; 3] = [ShiftKind::Morning, ShiftKind::Afternoon, ShiftKind::Evening];

    /// Position in [`ShiftKind::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            ShiftKind::Morning => "Morning",
            ShiftKind::Afternoon => "Afternoon",
            ShiftKind::Evening => "Evening",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Labels come from dropdowns and free text alike: ignore case and padding.
fn parse_label<T: Copy>(
    kind: &'static str,
    input: &str,
    all: &[T],
    label: fn(T) -> &'static str,
) -> Result<T, ParseLabelError> {
    let trimmed = input.trim();
    all.iter()
        .copied()
        .find(|&v| label(v).eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| ParseLabelError {
            kind,
            label: input.to_string(),
        })
}

impl FromStr for Day {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("day", s, &Day::ALL, Day::label)
    }
}

impl FromStr for ShiftKind {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("shift", s, &ShiftKind::ALL, ShiftKind::label)
    }
}
