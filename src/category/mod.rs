//! Categories that group questions together.

mod db;
mod directory;
mod domain;
mod list;

pub use db::{create_category, create_category_table};
pub use directory::CategoryDirectory;
pub use domain::{Category, CategoryId, CategoryName};
pub use list::get_categories_endpoint;
