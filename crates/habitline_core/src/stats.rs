//! Longitudinal statistics over the full record history.
//!
//! # Responsibility
//! - Derive aggregate metrics (best streak, perfect days, totals, daily
//!   average) from the complete tracker/record snapshot.
//!
//! # Invariants
//! - All functions are pure and total over well-formed snapshots.
//! - Streaks and perfect days operate on calendar days, never timestamps.

use crate::model::record::TrackerRecord;
use crate::model::tracker::{Tracker, TrackerId, Weekday};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Aggregate metrics shown on the statistics screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub best_streak: u32,
    pub perfect_days: u32,
    pub total_completions: u32,
    pub average_per_active_day: u32,
}

/// Computes all aggregate metrics in one pass over the snapshot.
pub fn compute_statistics(trackers: &[Tracker], records: &[TrackerRecord]) -> Statistics {
    Statistics {
        best_streak: best_streak(records),
        perfect_days: perfect_days(trackers, records),
        total_completions: records.len() as u32,
        average_per_active_day: average_per_active_day(records),
    }
}

/// Longest run of exactly-consecutive completion days for any one tracker.
///
/// Gaps break the run; 0 when there are no records.
pub fn best_streak(records: &[TrackerRecord]) -> u32 {
    let mut days_by_tracker: HashMap<TrackerId, BTreeSet<NaiveDate>> = HashMap::new();
    for record in records {
        days_by_tracker
            .entry(record.tracker_id)
            .or_default()
            .insert(record.day());
    }

    let mut best = 0u32;
    for days in days_by_tracker.values() {
        let mut current = 0u32;
        let mut previous: Option<NaiveDate> = None;
        for &day in days {
            current = match previous {
                Some(prev) if prev.succ_opt() == Some(day) => current + 1,
                _ => 1,
            };
            best = best.max(current);
            previous = Some(day);
        }
    }

    best
}

/// Days where the number of distinct completed trackers equals the number
/// of trackers scheduled for that day's weekday.
///
/// Deliberately a count equality, not a set equality: a completion from an
/// unrelated tracker can stand in for a scheduled one. Trackers with an
/// empty schedule never contribute to the scheduled count.
pub fn perfect_days(trackers: &[Tracker], records: &[TrackerRecord]) -> u32 {
    let mut completed_by_day: BTreeMap<NaiveDate, HashSet<TrackerId>> = BTreeMap::new();
    for record in records {
        completed_by_day
            .entry(record.day())
            .or_default()
            .insert(record.tracker_id);
    }

    completed_by_day
        .iter()
        .filter(|(day, completed)| {
            let weekday = Weekday::from_date(**day);
            let scheduled = trackers
                .iter()
                .filter(|tracker| tracker.schedule.contains(&weekday))
                .count();
            completed.len() == scheduled
        })
        .count() as u32
}

/// Floor of total completions over the number of days with at least one
/// completion; 0 when there are no active days.
pub fn average_per_active_day(records: &[TrackerRecord]) -> u32 {
    let active_days: HashSet<NaiveDate> = records.iter().map(TrackerRecord::day).collect();
    if active_days.is_empty() {
        return 0;
    }
    (records.len() / active_days.len()) as u32
}
