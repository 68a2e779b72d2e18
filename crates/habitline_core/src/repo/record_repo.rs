//! Completion record store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist one completion row per `(tracker, calendar day)`.
//! - Match deletes by day, never by exact timestamp.
//!
//! # Invariants
//! - A second insert for an already-completed day is a suppressed no-op.
//! - `load_records` ordering is deterministic: `day ASC, tracker_uuid ASC`.

use crate::model::record::TrackerRecord;
use crate::model::tracker::TrackerId;
use crate::repo::{StoreError, StoreResult};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection};
use uuid::Uuid;

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DAY_FORMAT: &str = "%Y-%m-%d";

/// Store interface for completion records.
pub trait RecordRepository {
    /// Inserts a completion; a duplicate for the same day is a no-op.
    fn add_record(&self, record: &TrackerRecord) -> StoreResult<()>;
    /// Deletes the completion for `(tracker_id, day)`.
    fn delete_record(&self, tracker_id: TrackerId, day: NaiveDate) -> StoreResult<()>;
    fn load_records(&self) -> StoreResult<Vec<TrackerRecord>>;
}

/// SQLite-backed record store.
pub struct SqliteRecordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecordRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl RecordRepository for SqliteRecordRepository<'_> {
    fn add_record(&self, record: &TrackerRecord) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO records (tracker_uuid, completed_at, day)
             VALUES (?1, ?2, ?3);",
            params![
                record.tracker_id.to_string(),
                record.date.format(DATETIME_FORMAT).to_string(),
                record.day().format(DAY_FORMAT).to_string(),
            ],
        )?;
        Ok(())
    }

    fn delete_record(&self, tracker_id: TrackerId, day: NaiveDate) -> StoreResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM records WHERE tracker_uuid = ?1 AND day = ?2;",
            params![tracker_id.to_string(), day.format(DAY_FORMAT).to_string()],
        )?;

        if changed == 0 {
            return Err(StoreError::RecordNotFound { tracker_id, day });
        }

        Ok(())
    }

    fn load_records(&self) -> StoreResult<Vec<TrackerRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT tracker_uuid, completed_at
             FROM records
             ORDER BY day ASC, tracker_uuid ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let uuid_text: String = row.get("tracker_uuid")?;
            let tracker_id = Uuid::parse_str(&uuid_text).map_err(|_| {
                StoreError::InvalidData(format!(
                    "invalid uuid value `{uuid_text}` in records.tracker_uuid"
                ))
            })?;

            let completed_text: String = row.get("completed_at")?;
            let date =
                NaiveDateTime::parse_from_str(&completed_text, DATETIME_FORMAT).map_err(|_| {
                    StoreError::InvalidData(format!(
                        "invalid timestamp `{completed_text}` in records.completed_at"
                    ))
                })?;

            records.push(TrackerRecord::new(tracker_id, date));
        }

        Ok(records)
    }
}
