//! Tracker store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and pin-toggle APIs over `trackers` storage.
//! - Keep SQL details and row codecs inside the persistence boundary.
//!
//! # Invariants
//! - Inserting a tracker into an unknown category creates the category row.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::model::tracker::{Tracker, TrackerId, TrackerType, Weekday};
use crate::repo::{StoreError, StoreResult};
use rusqlite::{params, Connection, Row};
use std::collections::BTreeSet;
use uuid::Uuid;

const TRACKER_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    color,
    emoji,
    schedule,
    type,
    is_pinned
FROM trackers";

/// Store interface for tracker CRUD operations.
pub trait TrackerRepository {
    /// Inserts a tracker under the given category, creating the category
    /// row when missing.
    fn add_tracker(&self, tracker: &Tracker, category_title: &str) -> StoreResult<TrackerId>;
    /// Rewrites all tracker fields and its category assignment.
    fn update_tracker(&self, tracker: &Tracker, category_title: &str) -> StoreResult<()>;
    fn get_tracker(&self, id: TrackerId) -> StoreResult<Option<Tracker>>;
    fn load_trackers(&self) -> StoreResult<Vec<Tracker>>;
    fn delete_tracker(&self, id: TrackerId) -> StoreResult<()>;
    fn set_pinned(&self, id: TrackerId, pinned: bool) -> StoreResult<()>;
}

/// SQLite-backed tracker store.
pub struct SqliteTrackerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTrackerRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn ensure_category(&self, title: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO categories (title) VALUES (?1);",
            [title],
        )?;
        Ok(())
    }
}

impl TrackerRepository for SqliteTrackerRepository<'_> {
    fn add_tracker(&self, tracker: &Tracker, category_title: &str) -> StoreResult<TrackerId> {
        self.ensure_category(category_title)?;

        self.conn.execute(
            "INSERT INTO trackers (
                uuid,
                name,
                color,
                emoji,
                schedule,
                type,
                is_pinned,
                category_title
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                tracker.id.to_string(),
                tracker.name.as_str(),
                tracker.color.as_str(),
                tracker.emoji.as_str(),
                schedule_to_db(&tracker.schedule),
                tracker_type_to_db(tracker.kind),
                bool_to_int(tracker.is_pinned),
                category_title,
            ],
        )?;

        Ok(tracker.id)
    }

    fn update_tracker(&self, tracker: &Tracker, category_title: &str) -> StoreResult<()> {
        self.ensure_category(category_title)?;

        let changed = self.conn.execute(
            "UPDATE trackers
             SET
                name = ?1,
                color = ?2,
                emoji = ?3,
                schedule = ?4,
                type = ?5,
                is_pinned = ?6,
                category_title = ?7
             WHERE uuid = ?8;",
            params![
                tracker.name.as_str(),
                tracker.color.as_str(),
                tracker.emoji.as_str(),
                schedule_to_db(&tracker.schedule),
                tracker_type_to_db(tracker.kind),
                bool_to_int(tracker.is_pinned),
                category_title,
                tracker.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::TrackerNotFound(tracker.id));
        }

        Ok(())
    }

    fn get_tracker(&self, id: TrackerId) -> StoreResult<Option<Tracker>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TRACKER_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_tracker_row(row)?));
        }

        Ok(None)
    }

    fn load_trackers(&self) -> StoreResult<Vec<Tracker>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TRACKER_SELECT_SQL} ORDER BY name ASC, uuid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut trackers = Vec::new();
        while let Some(row) = rows.next()? {
            trackers.push(parse_tracker_row(row)?);
        }

        Ok(trackers)
    }

    fn delete_tracker(&self, id: TrackerId) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM trackers WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(StoreError::TrackerNotFound(id));
        }

        Ok(())
    }

    fn set_pinned(&self, id: TrackerId, pinned: bool) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE trackers SET is_pinned = ?1 WHERE uuid = ?2;",
            params![bool_to_int(pinned), id.to_string()],
        )?;

        if changed == 0 {
            return Err(StoreError::TrackerNotFound(id));
        }

        Ok(())
    }
}

pub(crate) fn parse_tracker_row(row: &Row<'_>) -> StoreResult<Tracker> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        StoreError::InvalidData(format!("invalid uuid value `{uuid_text}` in trackers.uuid"))
    })?;

    let type_text: String = row.get("type")?;
    let kind = parse_tracker_type(&type_text).ok_or_else(|| {
        StoreError::InvalidData(format!("invalid tracker type `{type_text}` in trackers.type"))
    })?;

    let schedule_text: String = row.get("schedule")?;
    let schedule = parse_schedule(&schedule_text).ok_or_else(|| {
        StoreError::InvalidData(format!(
            "invalid schedule value `{schedule_text}` in trackers.schedule"
        ))
    })?;

    let is_pinned = match row.get::<_, i64>("is_pinned")? {
        0 => false,
        1 => true,
        other => {
            return Err(StoreError::InvalidData(format!(
                "invalid is_pinned value `{other}` in trackers.is_pinned"
            )));
        }
    };

    let mut tracker = Tracker::with_id(
        id,
        row.get::<_, String>("name")?,
        row.get::<_, String>("color")?,
        row.get::<_, String>("emoji")?,
        schedule,
        kind,
    );
    tracker.is_pinned = is_pinned;
    Ok(tracker)
}

pub(crate) fn schedule_to_db(schedule: &BTreeSet<Weekday>) -> String {
    schedule
        .iter()
        .map(|day| weekday_to_db(*day))
        .collect::<Vec<_>>()
        .join(",")
}

pub(crate) fn parse_schedule(value: &str) -> Option<BTreeSet<Weekday>> {
    if value.is_empty() {
        return Some(BTreeSet::new());
    }
    value.split(',').map(parse_weekday).collect()
}

fn weekday_to_db(day: Weekday) -> &'static str {
    match day {
        Weekday::Sunday => "sunday",
        Weekday::Monday => "monday",
        Weekday::Tuesday => "tuesday",
        Weekday::Wednesday => "wednesday",
        Weekday::Thursday => "thursday",
        Weekday::Friday => "friday",
        Weekday::Saturday => "saturday",
    }
}

fn parse_weekday(value: &str) -> Option<Weekday> {
    match value {
        "sunday" => Some(Weekday::Sunday),
        "monday" => Some(Weekday::Monday),
        "tuesday" => Some(Weekday::Tuesday),
        "wednesday" => Some(Weekday::Wednesday),
        "thursday" => Some(Weekday::Thursday),
        "friday" => Some(Weekday::Friday),
        "saturday" => Some(Weekday::Saturday),
        _ => None,
    }
}

fn tracker_type_to_db(kind: TrackerType) -> &'static str {
    match kind {
        TrackerType::Habit => "habit",
        TrackerType::Irregular => "irregular",
    }
}

fn parse_tracker_type(value: &str) -> Option<TrackerType> {
    match value {
        "habit" => Some(TrackerType::Habit),
        "irregular" => Some(TrackerType::Irregular),
        _ => None,
    }
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
