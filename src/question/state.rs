//! The state shared by the question endpoints.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{AppState, ResultPolicy, pagination::PaginationConfig, question::QuestionCatalog};

/// The state needed for the question endpoints.
#[derive(Debug, Clone)]
pub struct QuestionsEndpointState {
    pub db_connection: Arc<Mutex<Connection>>,
    pub pagination_config: PaginationConfig,
    pub result_policy: ResultPolicy,
}

impl QuestionsEndpointState {
    /// Create a catalog configured from this state that reads from `connection`.
    pub fn catalog<'a>(&self, connection: &'a Connection) -> QuestionCatalog<'a> {
        QuestionCatalog::new(connection)
            .with_page_size(self.pagination_config.page_size)
            .with_policy(self.result_policy)
    }
}

impl FromRef<AppState> for QuestionsEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            pagination_config: state.pagination_config.clone(),
            result_policy: state.result_policy,
        }
    }
}
