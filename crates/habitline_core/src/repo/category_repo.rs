//! Category store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide category CRUD and the grouped category/tracker fetch the
//!   visibility filter consumes.
//!
//! # Invariants
//! - `load_categories` returns categories alphabetically by title, each
//!   with its trackers in deterministic `name ASC, uuid ASC` order.
//! - Renames cascade to tracker assignments; deletes cascade to trackers
//!   and their records.

use crate::model::category::TrackerCategory;
use crate::repo::tracker_repo::parse_tracker_row;
use crate::repo::{StoreError, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;

/// Store interface for category operations.
pub trait CategoryRepository {
    fn add_category(&self, title: &str) -> StoreResult<()>;
    fn edit_category(&self, old_title: &str, new_title: &str) -> StoreResult<()>;
    fn delete_category(&self, title: &str) -> StoreResult<()>;
    fn category_exists(&self, title: &str) -> StoreResult<bool>;
    /// Full grouped fetch: every category with its trackers.
    fn load_categories(&self) -> StoreResult<Vec<TrackerCategory>>;
}

/// SQLite-backed category store.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn add_category(&self, title: &str) -> StoreResult<()> {
        self.conn
            .execute("INSERT INTO categories (title) VALUES (?1);", [title])?;
        Ok(())
    }

    fn edit_category(&self, old_title: &str, new_title: &str) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE categories SET title = ?1 WHERE title = ?2;",
            params![new_title, old_title],
        )?;

        if changed == 0 {
            return Err(StoreError::CategoryNotFound(old_title.to_string()));
        }

        Ok(())
    }

    fn delete_category(&self, title: &str) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM categories WHERE title = ?1;", [title])?;

        if changed == 0 {
            return Err(StoreError::CategoryNotFound(title.to_string()));
        }

        Ok(())
    }

    fn category_exists(&self, title: &str) -> StoreResult<bool> {
        let found = self
            .conn
            .query_row("SELECT 1 FROM categories WHERE title = ?1;", [title], |_| {
                Ok(())
            })
            .optional()?;
        Ok(found.is_some())
    }

    fn load_categories(&self) -> StoreResult<Vec<TrackerCategory>> {
        let mut categories: Vec<TrackerCategory> = Vec::new();
        let mut position_by_title: HashMap<String, usize> = HashMap::new();

        let mut stmt = self
            .conn
            .prepare("SELECT title FROM categories ORDER BY title ASC;")?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let title: String = row.get(0)?;
            position_by_title.insert(title.clone(), categories.len());
            categories.push(TrackerCategory::new(title, Vec::new()));
        }

        let mut stmt = self.conn.prepare(
            "SELECT
                uuid,
                name,
                color,
                emoji,
                schedule,
                type,
                is_pinned,
                category_title
            FROM trackers
            ORDER BY name ASC, uuid ASC;",
        )?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let tracker = parse_tracker_row(row)?;
            let category_title: String = row.get("category_title")?;
            let position = position_by_title.get(&category_title).ok_or_else(|| {
                StoreError::InvalidData(format!(
                    "tracker {} references unknown category `{category_title}`",
                    tracker.id
                ))
            })?;
            categories[*position].trackers.push(tracker);
        }

        Ok(categories)
    }
}
