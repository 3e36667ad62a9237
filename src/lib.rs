//! Trivia is a web service for storing quiz questions grouped by category and
//! playing quizzes drawn from them.
//!
//! This library provides a JSON REST API backed by a SQLite database.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::Serialize;
use tokio::signal;

mod app_state;
mod category;
mod db;
pub mod endpoints;
mod extract;
mod id_param;
mod logging;
mod not_found;
mod pagination;
mod question;
mod quiz;
mod result_policy;
mod routing;
#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::{Category, CategoryDirectory, CategoryId, CategoryName, create_category};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, REQUEST_BODY_SIZE_LIMIT, logging_middleware};
pub use pagination::{PaginationConfig, QUESTIONS_PER_PAGE};
pub use question::{
    CategoryQuestions, NewQuestion, Question, QuestionCatalog, QuestionId, QuestionPage,
    insert_question,
};
pub use quiz::QuizSelector;
pub use result_policy::ResultPolicy;
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// No question exists with the given ID.
    #[error("the question {0} could not be found")]
    QuestionNotFound(QuestionId),

    /// No category exists with the given ID.
    #[error("the category {0} could not be found")]
    CategoryNotFound(CategoryId),

    /// A category ID was given that is not an integer, so it cannot refer to
    /// any category.
    ///
    /// Clients see the same response as for [Error::CategoryNotFound].
    #[error("\"{0}\" is not a valid category ID")]
    InvalidCategoryId(String),

    /// A search returned no questions.
    #[error("no questions contain the search term \"{0}\"")]
    NoMatchingQuestions(String),

    /// A question was submitted without one of its required fields.
    ///
    /// The question text and answer must be non-empty, and the category and
    /// difficulty must be non-zero integers.
    #[error("one or more required fields are missing")]
    MissingFields,

    /// The requested page number is zero or past the last page.
    #[error("page {0} is out of range")]
    InvalidPage(u64),

    /// The query string could not be parsed.
    #[error("could not parse the query string: {0}")]
    InvalidQuery(String),

    /// The request body is larger than the given number of bytes.
    #[error("the request body is larger than {0} bytes")]
    PayloadTooLarge(usize),

    /// The request body could not be parsed as the expected JSON object.
    #[error("could not parse the request body: {0}")]
    InvalidJson(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unexpected fault, such as a panic in a request handler.
    #[error("{0}")]
    Internal(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidJson(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::InvalidQuery(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("rejected path parameters: {}", rejection.body_text());
        Error::NotFound
    }
}

impl Error {
    /// The HTTP status code that this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::QuestionNotFound(_)
            | Error::CategoryNotFound(_)
            | Error::InvalidCategoryId(_)
            | Error::NoMatchingQuestions(_)
            | Error::NotFound => StatusCode::NOT_FOUND,
            Error::MissingFields | Error::InvalidPage(_) | Error::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Error::InvalidJson(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::SqlError(_) | Error::DatabaseLockError | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message shown to clients.
    ///
    /// Internal errors report their description as-is so that faults are
    /// never hidden from the caller.
    pub fn client_message(&self) -> String {
        match self {
            Error::QuestionNotFound(_) | Error::NoMatchingQuestions(_) => {
                "No Record Found".to_owned()
            }
            Error::CategoryNotFound(_) | Error::InvalidCategoryId(_) => {
                "No Category Found".to_owned()
            }
            Error::NotFound => "Resource not found".to_owned(),
            Error::MissingFields => "Missing required fields".to_owned(),
            Error::InvalidPage(_) | Error::InvalidQuery(_) => "Bad request".to_owned(),
            Error::PayloadTooLarge(_) => "Payload too large".to_owned(),
            Error::InvalidJson(_) => "Unprocessable entity".to_owned(),
            error => error.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("An unexpected error occurred: {}", self);
        } else {
            tracing::debug!("Responding with {status}: {}", self);
        }

        error_response(status, &self.client_message())
    }
}

/// The JSON body sent for every failed request.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorEnvelope<'a> {
    success: bool,
    error: u16,
    message: &'a str,
}

/// Create a response with the JSON error envelope.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    let body = ErrorEnvelope {
        success: false,
        error: status.as_u16(),
        message,
    };

    (status, Json(body)).into_response()
}
