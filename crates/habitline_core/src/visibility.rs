//! Visibility filtering over the tracker snapshot.
//!
//! # Responsibility
//! - Compute, for one selected date and the active search/filter state, the
//!   ordered category/tracker structure the user sees.
//! - Keep the computation pure: snapshot in, derived view out.
//!
//! # Invariants
//! - Pinned date-candidates surface in exactly one synthetic "Pinned" group
//!   placed first, in discovery order.
//! - Pinning never overrides schedule matching.
//! - Categories left empty by any narrowing step are pruned from the result.

use crate::ledger;
use crate::model::category::TrackerCategory;
use crate::model::filter::TrackerFilter;
use crate::model::record::TrackerRecord;
use crate::model::tracker::Tracker;
use chrono::NaiveDate;

/// Title of the synthetic category holding pinned trackers.
pub const PINNED_CATEGORY_TITLE: &str = "Pinned";

/// Filter state for one visibility computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    /// Date selected in the date picker.
    pub selected_date: NaiveDate,
    /// Current calendar day; [`TrackerFilter::Today`] snaps the selected
    /// date to it before schedule matching.
    pub today: NaiveDate,
    /// Case-insensitive substring match against tracker names; empty
    /// disables the search step.
    pub search_text: String,
    pub filter: TrackerFilter,
}

impl FilterQuery {
    /// Query with no search text and no filter restriction.
    pub fn for_date(selected_date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            selected_date,
            today,
            search_text: String::new(),
            filter: TrackerFilter::AllTrackers,
        }
    }
}

/// One displayed category with its ordered trackers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleCategory {
    pub title: String,
    pub trackers: Vec<Tracker>,
}

/// Computes the ordered display structure.
///
/// An empty result means "nothing to show"; the caller distinguishes
/// no-data from no-search-results via `query.search_text`.
///
/// Steps, in order: date candidacy by schedule/type, pin partition,
/// per-category name sort, pruning, search narrowing, filter-mode
/// narrowing.
pub fn visible_structure(
    categories: &[TrackerCategory],
    records: &[TrackerRecord],
    query: &FilterQuery,
) -> Vec<VisibleCategory> {
    // Today mode changes the schedule match itself, not just a post-filter.
    let selected_date = match query.filter {
        TrackerFilter::Today => query.today,
        _ => query.selected_date,
    };

    let mut pinned: Vec<Tracker> = Vec::new();
    let mut visible: Vec<VisibleCategory> = Vec::new();

    for category in categories {
        let mut remaining: Vec<Tracker> = Vec::new();
        for tracker in &category.trackers {
            if !tracker.is_due_on(selected_date) {
                continue;
            }
            if tracker.is_pinned {
                pinned.push(tracker.clone());
            } else {
                remaining.push(tracker.clone());
            }
        }

        // Stable sort: equal names keep their original relative order.
        remaining.sort_by(|a, b| a.name.cmp(&b.name));

        if !remaining.is_empty() {
            visible.push(VisibleCategory {
                title: category.title.clone(),
                trackers: remaining,
            });
        }
    }

    if !pinned.is_empty() {
        visible.insert(
            0,
            VisibleCategory {
                title: PINNED_CATEGORY_TITLE.to_string(),
                trackers: pinned,
            },
        );
    }

    if !query.search_text.is_empty() {
        let needle = query.search_text.to_lowercase();
        retain_trackers(&mut visible, |tracker| {
            tracker.name.to_lowercase().contains(&needle)
        });
    }

    match query.filter {
        TrackerFilter::AllTrackers | TrackerFilter::Today => {}
        TrackerFilter::Completed => {
            retain_trackers(&mut visible, |tracker| {
                ledger::is_completed(records, tracker.id, selected_date)
            });
        }
        TrackerFilter::Uncompleted => {
            retain_trackers(&mut visible, |tracker| {
                !ledger::is_completed(records, tracker.id, selected_date)
            });
        }
    }

    visible
}

fn retain_trackers(visible: &mut Vec<VisibleCategory>, mut keep: impl FnMut(&Tracker) -> bool) {
    for category in visible.iter_mut() {
        category.trackers.retain(&mut keep);
    }
    visible.retain(|category| !category.trackers.is_empty());
}
