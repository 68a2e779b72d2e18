//! Tracker domain model.
//!
//! # Responsibility
//! - Define the canonical tracker record shared by habit and irregular
//!   projections.
//! - Provide pure weekday/date helpers and pin reconstruction.
//!
//! # Invariants
//! - `id` is stable and never reused for another tracker.
//! - Tracker values are immutable; "mutation" produces a new value that
//!   keeps the same `id`.
//! - `kind == Habit` with an empty schedule is admitted by the entity; the
//!   service layer rejects it at creation time.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every tracker.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TrackerId = Uuid;

/// Maximum tracker name length in characters.
pub const MAX_NAME_CHARS: usize = 38;

/// Recurrence kind of a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerType {
    /// Recurs on a fixed weekly schedule.
    Habit,
    /// One-off event without a fixed schedule; due on every date.
    Irregular,
}

/// Closed enumeration of the seven weekdays.
///
/// Ordered by the calendar numbering used throughout the app:
/// 1 = Sunday ... 7 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Maps a calendar date to its weekday.
    ///
    /// Deterministic and locale-independent; no side effects.
    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday().number_from_sunday() {
            1 => Self::Sunday,
            2 => Self::Monday,
            3 => Self::Tuesday,
            4 => Self::Wednesday,
            5 => Self::Thursday,
            6 => Self::Friday,
            _ => Self::Saturday,
        }
    }
}

/// Validation failures for tracker field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerValidationError {
    /// Name is empty or whitespace-only after trimming.
    BlankName,
    /// Name exceeds [`MAX_NAME_CHARS`] characters.
    NameTooLong { len: usize },
}

impl Display for TrackerValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "tracker name must not be blank"),
            Self::NameTooLong { len } => write!(
                f,
                "tracker name must be at most {MAX_NAME_CHARS} characters, got {len}"
            ),
        }
    }
}

impl Error for TrackerValidationError {}

/// Canonical tracker record.
///
/// Habit and irregular trackers share one shape; `schedule` is simply empty
/// for the usual irregular case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracker {
    /// Stable global ID used for record linkage and pin toggling.
    pub id: TrackerId,
    pub name: String,
    /// Opaque display color (`#RRGGBB`); the core never interprets it.
    pub color: String,
    pub emoji: String,
    /// Weekdays the tracker is due on. Only meaningful for habits.
    pub schedule: BTreeSet<Weekday>,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: TrackerType,
    /// Pinned trackers surface in the synthetic "Pinned" group.
    pub is_pinned: bool,
}

impl Tracker {
    /// Creates a tracker with a generated stable ID and `is_pinned = false`.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        emoji: impl Into<String>,
        schedule: BTreeSet<Weekday>,
        kind: TrackerType,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, color, emoji, schedule, kind)
    }

    /// Creates a tracker with a caller-provided stable ID.
    ///
    /// Used by load paths where identity already exists in storage.
    pub fn with_id(
        id: TrackerId,
        name: impl Into<String>,
        color: impl Into<String>,
        emoji: impl Into<String>,
        schedule: BTreeSet<Weekday>,
        kind: TrackerType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            emoji: emoji.into(),
            schedule,
            kind,
            is_pinned: false,
        }
    }

    /// Checks name constraints (non-blank, at most [`MAX_NAME_CHARS`] chars).
    pub fn validate(&self) -> Result<(), TrackerValidationError> {
        if self.name.trim().is_empty() {
            return Err(TrackerValidationError::BlankName);
        }
        let len = self.name.chars().count();
        if len > MAX_NAME_CHARS {
            return Err(TrackerValidationError::NameTooLong { len });
        }
        Ok(())
    }

    /// Returns a copy with `is_pinned` set to `pinned`, identity unchanged.
    ///
    /// Pure value operation; the caller persists the change separately.
    pub fn with_pinned(&self, pinned: bool) -> Self {
        Self {
            is_pinned: pinned,
            ..self.clone()
        }
    }

    /// Whether this tracker is a candidate for the given date.
    ///
    /// Irregular trackers are due on every date; habits only on scheduled
    /// weekdays.
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        match self.kind {
            TrackerType::Irregular => true,
            TrackerType::Habit => self.schedule.contains(&Weekday::from_date(date)),
        }
    }
}
