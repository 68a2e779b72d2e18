//! Read snapshot of the full tracker/category/record state.
//!
//! # Responsibility
//! - Hold the in-memory state the visibility filter and statistics engine
//!   compute over.
//! - Diff two snapshots into index-based deltas so the caller can animate
//!   list updates after a gateway mutation + re-fetch.
//!
//! # Invariants
//! - Snapshots are never mutated in place; every gateway write is followed
//!   by a fresh load.

use crate::model::category::TrackerCategory;
use crate::model::record::TrackerRecord;
use crate::model::tracker::{Tracker, TrackerId};
use crate::stats::{compute_statistics, Statistics};
use crate::visibility::{visible_structure, FilterQuery, VisibleCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable read snapshot loaded from the persistence gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Categories in gateway fetch order (alphabetical by title).
    pub categories: Vec<TrackerCategory>,
    pub records: Vec<TrackerRecord>,
}

impl Snapshot {
    pub fn new(categories: Vec<TrackerCategory>, records: Vec<TrackerRecord>) -> Self {
        Self {
            categories,
            records,
        }
    }

    /// All trackers in category order, flattened.
    pub fn trackers(&self) -> impl Iterator<Item = &Tracker> {
        self.categories.iter().flat_map(|c| c.trackers.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(TrackerCategory::is_empty) && self.records.is_empty()
    }

    /// Computes the ordered display structure for the given filter state.
    pub fn visible_structure(&self, query: &FilterQuery) -> Vec<VisibleCategory> {
        visible_structure(&self.categories, &self.records, query)
    }

    /// Computes aggregate statistics over the full history.
    pub fn statistics(&self) -> Statistics {
        let trackers: Vec<Tracker> = self.trackers().cloned().collect();
        compute_statistics(&trackers, &self.records)
    }
}

/// Index-based tracker deltas between two snapshots.
///
/// Indices address the flattened tracker list (`Snapshot::trackers`):
/// `deleted` in the old snapshot, `inserted` and `updated` in the new one,
/// `moved` pairs are `(old_index, new_index)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDelta {
    pub inserted: Vec<usize>,
    pub deleted: Vec<usize>,
    pub updated: Vec<usize>,
    pub moved: Vec<(usize, usize)>,
}

impl SnapshotDelta {
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty()
            && self.deleted.is_empty()
            && self.updated.is_empty()
            && self.moved.is_empty()
    }
}

/// Diffs two snapshots by stable tracker ID.
///
/// A tracker present in both snapshots counts as `updated` when its value
/// changed, and as `moved` when only its flattened position changed.
pub fn diff_snapshots(old: &Snapshot, new: &Snapshot) -> SnapshotDelta {
    let old_trackers: Vec<&Tracker> = old.trackers().collect();
    let new_trackers: Vec<&Tracker> = new.trackers().collect();

    let old_index: HashMap<TrackerId, usize> = old_trackers
        .iter()
        .enumerate()
        .map(|(index, tracker)| (tracker.id, index))
        .collect();
    let new_index: HashMap<TrackerId, usize> = new_trackers
        .iter()
        .enumerate()
        .map(|(index, tracker)| (tracker.id, index))
        .collect();

    let mut delta = SnapshotDelta::default();

    for (index, tracker) in new_trackers.iter().enumerate() {
        match old_index.get(&tracker.id) {
            None => delta.inserted.push(index),
            Some(&old_position) => {
                if old_trackers[old_position] != *tracker {
                    delta.updated.push(index);
                } else if old_position != index {
                    delta.moved.push((old_position, index));
                }
            }
        }
    }

    for (index, tracker) in old_trackers.iter().enumerate() {
        if !new_index.contains_key(&tracker.id) {
            delta.deleted.push(index);
        }
    }

    delta
}
