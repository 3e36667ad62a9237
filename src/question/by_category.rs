//! Endpoint for listing the questions in one category.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::{
    Error,
    category::CategoryName,
    db::lock_connection,
    extract::PathParam,
    question::{CategoryQuestions, Question, state::QuestionsEndpointState},
};

/// The response body for the questions in a category.
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// The name of the requested category.
    pub current_category: CategoryName,
    pub success: bool,
}

impl From<CategoryQuestions> for CategoryQuestionsResponse {
    fn from(category_questions: CategoryQuestions) -> Self {
        Self {
            total_questions: category_questions.questions.len(),
            questions: category_questions.questions,
            current_category: category_questions.category.name,
            success: true,
        }
    }
}

/// Get every question in a category.
///
/// The category ID is taken as a string so that non-numeric IDs are reported
/// as a missing category rather than a malformed path.
pub async fn get_category_questions_endpoint(
    State(state): State<QuestionsEndpointState>,
    PathParam(raw_category_id): PathParam<String>,
) -> Result<Json<CategoryQuestionsResponse>, Error> {
    let category_id = raw_category_id
        .trim()
        .parse()
        .map_err(|_| Error::InvalidCategoryId(raw_category_id.clone()))?;

    let connection = lock_connection(&state.db_connection)?;
    let category_questions = state.catalog(&connection).list_by_category(category_id)?;

    Ok(Json(category_questions.into()))
}
