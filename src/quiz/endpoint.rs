//! Endpoint for drawing the next quiz question.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    category::CategoryId,
    db::lock_connection,
    extract::JsonBody,
    id_param::IdParam,
    question::{Question, QuestionId},
    quiz::QuizSelector,
};

/// The state needed for playing a quiz.
#[derive(Debug, Clone)]
pub struct QuizEndpointState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for QuizEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The category a quiz is played in.
///
/// The web client sends the selected category as an object with the ID and
/// name, other clients send just the ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuizCategory {
    /// Just the category ID.
    Id(IdParam),
    /// The category ID along with its display name.
    Object {
        id: IdParam,
        #[serde(default, rename = "type")]
        name: Option<String>,
    },
}

impl QuizCategory {
    fn id(&self) -> &IdParam {
        match self {
            QuizCategory::Id(id) => id,
            QuizCategory::Object { id, .. } => id,
        }
    }

    fn name(&self) -> Option<&str> {
        match self {
            QuizCategory::Id(_) => None,
            QuizCategory::Object { name, .. } => name.as_deref(),
        }
    }
}

/// The request body for the next quiz question.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QuizForm {
    #[serde(default, alias = "quiz_category")]
    pub category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Vec<QuestionId>,
}

impl QuizForm {
    /// The category to draw from, or `None` to draw from every category.
    ///
    /// The ID zero is the web client's "All" option.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidCategoryId] if the ID is not an integer.
    pub fn category_id(&self) -> Result<Option<CategoryId>, Error> {
        let Some(category) = &self.category else {
            return Ok(None);
        };

        match category.id().to_integer() {
            Some(0) => Ok(None),
            Some(category_id) => Ok(Some(category_id)),
            None => Err(Error::InvalidCategoryId(category.id().to_string())),
        }
    }
}

/// The response body for the next quiz question.
///
/// `success` is false and `question` is omitted once every eligible question
/// has been asked.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

/// Draw a random question that has not been asked yet.
pub async fn next_quiz_question_endpoint(
    State(state): State<QuizEndpointState>,
    JsonBody(form): JsonBody<QuizForm>,
) -> Result<Json<QuizResponse>, Error> {
    let category_id = form.category_id()?;
    if let Some(name) = form.category.as_ref().and_then(QuizCategory::name) {
        tracing::debug!("Drawing a quiz question from {name:?}");
    }
    let previous_question_ids: HashSet<QuestionId> =
        form.previous_questions.iter().copied().collect();

    let connection = lock_connection(&state.db_connection)?;
    let question = QuizSelector::new(&connection).next_question(
        category_id,
        &previous_question_ids,
        &mut rand::thread_rng(),
    )?;

    Ok(Json(QuizResponse {
        success: question.is_some(),
        question,
    }))
}
