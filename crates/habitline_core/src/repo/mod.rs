//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define the persistence gateway contracts for trackers, categories and
//!   completion records.
//! - Isolate SQL details from service/business orchestration.
//!
//! # Invariants
//! - Repositories return semantic errors (`*NotFound`) in addition to DB
//!   transport errors.
//! - Record writes enforce day-uniqueness; duplicate inserts for the same
//!   `(tracker, day)` are suppressed.

use crate::db::DbError;
use crate::model::tracker::TrackerId;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod category_repo;
pub mod record_repo;
pub mod tracker_repo;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence gateway error shared by all stores.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    TrackerNotFound(TrackerId),
    CategoryNotFound(String),
    RecordNotFound {
        tracker_id: TrackerId,
        day: NaiveDate,
    },
    /// Persisted data cannot be converted to a valid read model.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::TrackerNotFound(id) => write!(f, "tracker not found: {id}"),
            Self::CategoryNotFound(title) => write!(f, "category not found: {title}"),
            Self::RecordNotFound { tracker_id, day } => {
                write!(f, "record not found: tracker {tracker_id} on {day}")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::TrackerNotFound(_) => None,
            Self::CategoryNotFound(_) => None,
            Self::RecordNotFound { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
