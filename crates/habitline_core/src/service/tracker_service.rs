//! Tracker use-case service.
//!
//! # Responsibility
//! - Enforce creation-time invariants (name rules, habit schedule) above
//!   the tracker store.
//! - Model pin toggling as value reconstruction plus a gateway write.
//!
//! # Invariants
//! - A habit is never persisted with an empty schedule.
//! - Validation failures block the mutation before any gateway call.

use crate::model::tracker::{Tracker, TrackerId, TrackerType, Weekday};
use crate::repo::tracker_repo::TrackerRepository;
use crate::repo::StoreError;
use crate::service::{ServiceError, ServiceResult};
use log::info;
use std::collections::BTreeSet;

/// Use-case service wrapper for tracker operations.
pub struct TrackerService<R: TrackerRepository> {
    repo: R,
}

impl<R: TrackerRepository> TrackerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a habit tracker due on the given weekdays.
    pub fn create_habit(
        &self,
        name: impl Into<String>,
        color: impl Into<String>,
        emoji: impl Into<String>,
        schedule: BTreeSet<Weekday>,
        category_title: &str,
    ) -> ServiceResult<TrackerId> {
        if schedule.is_empty() {
            return Err(ServiceError::EmptyHabitSchedule);
        }
        let tracker = Tracker::new(name, color, emoji, schedule, TrackerType::Habit);
        self.persist_new(tracker, category_title)
    }

    /// Creates an irregular tracker, due on every date.
    pub fn create_irregular(
        &self,
        name: impl Into<String>,
        color: impl Into<String>,
        emoji: impl Into<String>,
        category_title: &str,
    ) -> ServiceResult<TrackerId> {
        let tracker = Tracker::new(name, color, emoji, BTreeSet::new(), TrackerType::Irregular);
        self.persist_new(tracker, category_title)
    }

    fn persist_new(&self, tracker: Tracker, category_title: &str) -> ServiceResult<TrackerId> {
        tracker.validate()?;
        if category_title.trim().is_empty() {
            return Err(ServiceError::BlankCategoryTitle);
        }
        let id = self.repo.add_tracker(&tracker, category_title)?;
        info!(
            "event=tracker_created module=service status=ok id={id} kind={:?}",
            tracker.kind
        );
        Ok(id)
    }

    /// Rewrites an existing tracker and its category assignment.
    pub fn update_tracker(&self, tracker: &Tracker, category_title: &str) -> ServiceResult<()> {
        tracker.validate()?;
        if category_title.trim().is_empty() {
            return Err(ServiceError::BlankCategoryTitle);
        }
        self.repo.update_tracker(tracker, category_title)?;
        Ok(())
    }

    pub fn delete_tracker(&self, id: TrackerId) -> ServiceResult<()> {
        self.repo.delete_tracker(id)?;
        info!("event=tracker_deleted module=service status=ok id={id}");
        Ok(())
    }

    /// Flips the pin flag and returns the reconstructed tracker value.
    pub fn toggle_pin(&self, id: TrackerId) -> ServiceResult<Tracker> {
        let tracker = self
            .repo
            .get_tracker(id)?
            .ok_or(ServiceError::Store(StoreError::TrackerNotFound(id)))?;

        let updated = tracker.with_pinned(!tracker.is_pinned);
        self.repo.set_pinned(id, updated.is_pinned)?;
        Ok(updated)
    }

    pub fn load_trackers(&self) -> ServiceResult<Vec<Tracker>> {
        Ok(self.repo.load_trackers()?)
    }
}
