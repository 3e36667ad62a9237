//! Endpoint for listing every category.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::Serialize;

use crate::{
    AppState, Error,
    category::{CategoryDirectory, CategoryId, CategoryName},
    db::lock_connection,
};

/// The state needed for listing categories.
#[derive(Debug, Clone)]
pub struct CategoriesEndpointState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CategoriesEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The response body for the category list.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<CategoryId, CategoryName>,
    pub success: bool,
}

/// Get the name of every category keyed by ID.
pub async fn get_categories_endpoint(
    State(state): State<CategoriesEndpointState>,
) -> Result<Json<CategoriesResponse>, Error> {
    let connection = lock_connection(&state.db_connection)?;
    let categories = CategoryDirectory::new(&connection).all()?;

    Ok(Json(CategoriesResponse {
        categories,
        success: true,
    }))
}
