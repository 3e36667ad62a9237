//! Question deletion endpoint.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::{
    Error,
    db::lock_connection,
    extract::PathParam,
    question::{QuestionId, state::QuestionsEndpointState},
};

/// The response body for a deleted question.
#[derive(Debug, Serialize)]
pub struct DeletedQuestionResponse {
    pub message: String,
    pub success: bool,
}

/// Handle question deletion.
pub async fn delete_question_endpoint(
    State(state): State<QuestionsEndpointState>,
    PathParam(question_id): PathParam<QuestionId>,
) -> Result<Json<DeletedQuestionResponse>, Error> {
    let connection = lock_connection(&state.db_connection)?;
    state.catalog(&connection).delete(question_id)?;

    Ok(Json(DeletedQuestionResponse {
        message: "Question deleted successfully".to_owned(),
        success: true,
    }))
}
