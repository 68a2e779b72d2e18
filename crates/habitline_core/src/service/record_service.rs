//! Completion record use-case service.
//!
//! # Responsibility
//! - Guard completion marking against forward-dated days.
//! - Delegate day-unique persistence to the record store.
//!
//! # Invariants
//! - A rejected future date never reaches the gateway.
//! - Unmarking matches by calendar day, not exact timestamp.

use crate::ledger;
use crate::model::record::TrackerRecord;
use crate::model::tracker::TrackerId;
use crate::repo::record_repo::RecordRepository;
use crate::service::{ServiceError, ServiceResult};
use chrono::{NaiveDate, NaiveDateTime};

/// Use-case service wrapper for completion records.
pub struct RecordService<R: RecordRepository> {
    repo: R,
}

impl<R: RecordRepository> RecordService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Marks the tracker done for `date`'s calendar day.
    ///
    /// Fails with a validation error when the day lies after `now`'s; a
    /// duplicate mark for an already-completed day is a silent no-op.
    pub fn mark_completed(
        &self,
        tracker_id: TrackerId,
        date: NaiveDateTime,
        now: NaiveDateTime,
    ) -> ServiceResult<()> {
        if !ledger::can_mark(date, now) {
            return Err(ServiceError::FutureCompletionDate {
                date: date.date(),
                today: now.date(),
            });
        }
        self.repo.add_record(&TrackerRecord::new(tracker_id, date))?;
        Ok(())
    }

    /// Removes the completion for `(tracker_id, day)`.
    pub fn unmark_completed(&self, tracker_id: TrackerId, day: NaiveDate) -> ServiceResult<()> {
        self.repo.delete_record(tracker_id, day)?;
        Ok(())
    }

    pub fn load_records(&self) -> ServiceResult<Vec<TrackerRecord>> {
        Ok(self.repo.load_records()?)
    }
}
