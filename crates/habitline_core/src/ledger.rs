//! Completion ledger: read-only, day-granularity queries over records.
//!
//! # Responsibility
//! - Answer "is this tracker done on this day" and "how many completions
//!   all time" over the record snapshot.
//! - Guard against forward-dated completions.
//!
//! # Invariants
//! - All comparisons truncate to the calendar day; time-of-day never
//!   matters.
//! - This module only reads; record mutation lives in the repository layer.

use crate::model::record::TrackerRecord;
use crate::model::tracker::TrackerId;
use chrono::{NaiveDate, NaiveDateTime};

/// Whether a completion exists for `(tracker_id, day)`.
pub fn is_completed(records: &[TrackerRecord], tracker_id: TrackerId, day: NaiveDate) -> bool {
    records
        .iter()
        .any(|record| record.tracker_id == tracker_id && record.is_on_day(day))
}

/// Total completions for the tracker, all time.
pub fn completion_count(records: &[TrackerRecord], tracker_id: TrackerId) -> usize {
    records
        .iter()
        .filter(|record| record.tracker_id == tracker_id)
        .count()
}

/// Whether a completion may be recorded for `date` as of `now`.
///
/// False iff `date`'s calendar day is strictly after `now`'s. Callers
/// surface a refusal as a blocked mutation, never a crash.
pub fn can_mark(date: NaiveDateTime, now: NaiveDateTime) -> bool {
    date.date() <= now.date()
}
