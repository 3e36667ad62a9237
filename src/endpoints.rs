//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/questions/{question_id}', use [format_endpoint].

use std::fmt::Display;

/// The route for listing every category.
pub const CATEGORIES: &str = "/categories";
/// The route for listing the questions in a category.
pub const CATEGORY_QUESTIONS: &str = "/categories/{category_id}/questions";
/// The route for listing and creating questions.
pub const QUESTIONS: &str = "/questions";
/// The route for a single question.
pub const QUESTION: &str = "/questions/{question_id}";
/// The route for searching question text.
pub const SEARCH: &str = "/search";
/// The route for drawing the next quiz question.
pub const QUIZZES: &str = "/quizzes";

/// Replace the first parameter in `endpoint_path` with `value`.
///
/// A parameter is a string that starts with a left brace and ends with a
/// right brace. For example, in the endpoint path '/questions/{question_id}',
/// '{question_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, value: impl Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        value,
        &endpoint_path[param_end..]
    )
}
