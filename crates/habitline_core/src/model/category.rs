//! Tracker category grouping container.

use crate::model::tracker::Tracker;
use serde::{Deserialize, Serialize};

/// Pure grouping container for display purposes.
///
/// The title is the category's unique key; two categories compare equal iff
/// their titles match. Trackers are held by value; the persistence gateway
/// stays the owner of record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerCategory {
    pub title: String,
    pub trackers: Vec<Tracker>,
}

impl TrackerCategory {
    pub fn new(title: impl Into<String>, trackers: Vec<Tracker>) -> Self {
        Self {
            title: title.into(),
            trackers,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }
}

impl PartialEq for TrackerCategory {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for TrackerCategory {}
