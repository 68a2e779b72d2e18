//! Core use-case services.
//!
//! # Responsibility
//! - Validate mutations before any gateway call; a validation failure
//!   leaves the stored state untouched.
//! - Orchestrate repository calls into use-case level APIs.
//!
//! # Invariants
//! - Services never bypass repository persistence contracts.
//! - Gateway errors surface unchanged; no partial state is applied.

use crate::model::snapshot::Snapshot;
use crate::model::tracker::TrackerValidationError;
use crate::repo::category_repo::CategoryRepository;
use crate::repo::record_repo::RecordRepository;
use crate::repo::StoreError;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod category_service;
pub mod record_service;
pub mod tracker_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors from use-case service operations.
///
/// Validation variants are detected before any gateway call; `Store` wraps
/// failures originating in the persistence layer.
#[derive(Debug)]
pub enum ServiceError {
    /// Tracker field validation failed (blank or overlong name).
    Tracker(TrackerValidationError),
    /// Habit creation requires at least one scheduled weekday.
    EmptyHabitSchedule,
    /// Category title is empty or whitespace-only after trimming.
    BlankCategoryTitle,
    /// A category with this title already exists.
    DuplicateCategoryTitle(String),
    /// Completion date lies on a calendar day after today.
    FutureCompletionDate { date: NaiveDate, today: NaiveDate },
    /// Persistence gateway failure.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tracker(err) => write!(f, "{err}"),
            Self::EmptyHabitSchedule => {
                write!(f, "a habit tracker requires at least one scheduled weekday")
            }
            Self::BlankCategoryTitle => write!(f, "category title must not be blank"),
            Self::DuplicateCategoryTitle(title) => {
                write!(f, "category `{title}` already exists")
            }
            Self::FutureCompletionDate { date, today } => {
                write!(f, "cannot mark completion for {date}: today is {today}")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Tracker(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TrackerValidationError> for ServiceError {
    fn from(value: TrackerValidationError) -> Self {
        Self::Tracker(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Loads a fresh read snapshot from the persistence gateway.
pub fn load_snapshot(
    categories: &impl CategoryRepository,
    records: &impl RecordRepository,
) -> ServiceResult<Snapshot> {
    Ok(Snapshot::new(
        categories.load_categories()?,
        records.load_records()?,
    ))
}
