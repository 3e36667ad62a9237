#![allow(missing_docs)]

pub(crate) mod db;
pub(crate) mod http;

pub(crate) use db::{get_test_connection, get_test_state, seed_categories, seed_questions};
pub(crate) use http::assert_error_body;
