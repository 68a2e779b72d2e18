//! Completion record model.
//!
//! # Invariants
//! - At most one record exists per `(tracker_id, calendar day)`; the record
//!   repository enforces this on insert.
//! - Time-of-day is stored but carries no meaning; all comparisons truncate
//!   to the calendar day.

use crate::model::tracker::TrackerId;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single completion mark for one tracker on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerRecord {
    pub tracker_id: TrackerId,
    pub date: NaiveDateTime,
}

impl TrackerRecord {
    pub fn new(tracker_id: TrackerId, date: NaiveDateTime) -> Self {
        Self { tracker_id, date }
    }

    /// Convenience constructor anchored at midnight of `day`.
    pub fn on_day(tracker_id: TrackerId, day: NaiveDate) -> Self {
        Self {
            tracker_id,
            date: NaiveDateTime::new(day, NaiveTime::MIN),
        }
    }

    /// The calendar day this record counts for.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    pub fn is_on_day(&self, day: NaiveDate) -> bool {
        self.day() == day
    }
}
