//! Category use-case service.
//!
//! # Responsibility
//! - Enforce title uniqueness and blank-title rejection above the category
//!   store.
//!
//! # Invariants
//! - Duplicate titles are detected before the gateway insert runs.
//! - Titles are stored trimmed.

use crate::model::category::TrackerCategory;
use crate::repo::category_repo::CategoryRepository;
use crate::service::{ServiceError, ServiceResult};

/// Use-case service wrapper for category operations.
pub struct CategoryService<R: CategoryRepository> {
    repo: R,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_category(&self, title: &str) -> ServiceResult<()> {
        let title = validated_title(title)?;
        if self.repo.category_exists(title)? {
            return Err(ServiceError::DuplicateCategoryTitle(title.to_string()));
        }
        self.repo.add_category(title)?;
        Ok(())
    }

    pub fn rename_category(&self, old_title: &str, new_title: &str) -> ServiceResult<()> {
        let new_title = validated_title(new_title)?;
        if new_title != old_title && self.repo.category_exists(new_title)? {
            return Err(ServiceError::DuplicateCategoryTitle(new_title.to_string()));
        }
        self.repo.edit_category(old_title, new_title)?;
        Ok(())
    }

    pub fn delete_category(&self, title: &str) -> ServiceResult<()> {
        self.repo.delete_category(title)?;
        Ok(())
    }

    pub fn load_categories(&self) -> ServiceResult<Vec<TrackerCategory>> {
        Ok(self.repo.load_categories()?)
    }
}

fn validated_title(title: &str) -> ServiceResult<&str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::BlankCategoryTitle);
    }
    Ok(trimmed)
}
