//! Core domain logic for HabitLine.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod ledger;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod stats;
pub mod visibility;

pub use ledger::{can_mark, completion_count, is_completed};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::TrackerCategory;
pub use model::filter::TrackerFilter;
pub use model::record::TrackerRecord;
pub use model::snapshot::{diff_snapshots, Snapshot, SnapshotDelta};
pub use model::tracker::{Tracker, TrackerId, TrackerType, TrackerValidationError, Weekday};
pub use repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
pub use repo::record_repo::{RecordRepository, SqliteRecordRepository};
pub use repo::tracker_repo::{SqliteTrackerRepository, TrackerRepository};
pub use repo::{StoreError, StoreResult};
pub use service::category_service::CategoryService;
pub use service::record_service::RecordService;
pub use service::tracker_service::TrackerService;
pub use service::{load_snapshot, ServiceError, ServiceResult};
pub use stats::{compute_statistics, Statistics};
pub use visibility::{visible_structure, FilterQuery, VisibleCategory, PINNED_CATEGORY_TITLE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
