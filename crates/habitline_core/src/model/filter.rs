//! Transient filter selection for the tracker list.

use serde::{Deserialize, Serialize};

/// Active filter mode chosen in the filter sheet.
///
/// UI selection state, never persisted as domain data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerFilter {
    #[default]
    AllTrackers,
    /// Snaps the selected date to the current day before schedule matching.
    Today,
    /// Only trackers completed on the selected date.
    Completed,
    /// Only trackers not completed on the selected date.
    Uncompleted,
}
