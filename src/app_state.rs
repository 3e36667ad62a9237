//! Implements a struct that holds the state of the REST server.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use rusqlite::Connection;

use crate::{ResultPolicy, db::initialize, pagination::PaginationConfig};

/// How long a request may take before the server gives up on it.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The config that controls how to display pages of questions.
    pub pagination_config: PaginationConfig,

    /// Whether out-of-range pages and empty searches are errors.
    pub result_policy: ResultPolicy,

    /// How long a request may take before it is answered with a timeout error.
    pub request_timeout: Duration,

    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(
        db_connection: Connection,
        result_policy: ResultPolicy,
    ) -> Result<Self, rusqlite::Error> {
        initialize(&db_connection)?;

        Ok(Self {
            pagination_config: PaginationConfig::default(),
            result_policy,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }

    /// Use `request_timeout` as the time limit for each request.
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}
