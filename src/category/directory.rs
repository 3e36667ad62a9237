//! Read-only lookup of categories by ID.

use std::collections::BTreeMap;

use rusqlite::Connection;

use crate::{
    Error,
    category::{CategoryId, CategoryName, db::get_all_categories, db::get_category},
};

/// Looks up category names and checks that category IDs exist.
///
/// The directory borrows a database connection for the duration of one
/// request and holds no other state.
#[derive(Debug, Clone, Copy)]
pub struct CategoryDirectory<'a> {
    connection: &'a Connection,
}

impl<'a> CategoryDirectory<'a> {
    /// Create a directory that reads from `connection`.
    pub fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    /// Get the name of every category, keyed by category ID.
    pub fn all(&self) -> Result<BTreeMap<CategoryId, CategoryName>, Error> {
        let categories = get_all_categories(self.connection)?
            .into_iter()
            .map(|category| (category.id, category.name))
            .collect();

        Ok(categories)
    }

    /// Whether a category with `category_id` exists.
    pub fn exists(&self, category_id: CategoryId) -> Result<bool, Error> {
        Ok(get_category(category_id, self.connection)?.is_some())
    }

    /// Get the name of the category with `category_id`, or `None` if it does not exist.
    pub fn name_of(&self, category_id: CategoryId) -> Result<Option<CategoryName>, Error> {
        Ok(get_category(category_id, self.connection)?.map(|category| category.name))
    }
}
