//! Question creation endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::{
    Error,
    db::lock_connection,
    extract::JsonBody,
    question::{NewQuestion, Question, domain::NewQuestionForm, state::QuestionsEndpointState},
};

/// The response body for a created question.
#[derive(Debug, Serialize)]
pub struct CreatedQuestionResponse {
    pub success: bool,
    pub question: Question,
}

/// Handle question creation. Responds with the stored question and its new ID.
pub async fn create_question_endpoint(
    State(state): State<QuestionsEndpointState>,
    JsonBody(form): JsonBody<NewQuestionForm>,
) -> Result<(StatusCode, Json<CreatedQuestionResponse>), Error> {
    let new_question = NewQuestion::try_from(form)?;

    let connection = lock_connection(&state.db_connection)?;
    let question = state.catalog(&connection).add(&new_question)?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedQuestionResponse {
            success: true,
            question,
        }),
    ))
}

#[cfg(test)]
mod create_question_endpoint_tests {
    use axum::{Router, http::StatusCode, routing::post};
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::{
        QuestionCatalog, endpoints,
        test_utils::{assert_error_body, get_test_state, seed_categories},
    };

    use super::create_question_endpoint;

    fn get_test_server() -> (TestServer, crate::AppState) {
        let state = get_test_state();
        seed_categories(&state.db_connection.lock().unwrap(), &["Science", "Art"]);
        let app = Router::new()
            .route(endpoints::QUESTIONS, post(create_question_endpoint))
            .with_state(state.clone());

        (
            TestServer::try_new(app).expect("Could not create test server."),
            state,
        )
    }

    #[tokio::test]
    async fn create_question_succeeds() {
        let (server, state) = get_test_server();

        let response = server
            .post(endpoints::QUESTIONS)
            .json(&json!({"question": "Q?", "answer": "A", "category": 2, "difficulty": 3}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        let id = body["question"]["id"].as_i64().expect("id should be an integer");
        assert!(id > 0);
        assert_eq!(
            body["question"],
            json!({"id": id, "question": "Q?", "answer": "A", "category": 2, "difficulty": 3})
        );

        let connection = state.db_connection.lock().unwrap();
        let stored = QuestionCatalog::new(&connection).list(1).unwrap();
        assert_eq!(stored.questions.len(), 1);
        assert_eq!(stored.questions[0].id, id);
    }

    #[tokio::test]
    async fn accepts_string_category_and_difficulty() {
        let (server, _) = get_test_server();

        let response = server
            .post(endpoints::QUESTIONS)
            .json(&json!({"question": "Q?", "answer": "A", "category": "1", "difficulty": "5"}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body = response.json::<Value>();
        assert_eq!(body["question"]["category"], 1);
        assert_eq!(body["question"]["difficulty"], 5);
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let (server, state) = get_test_server();
        let bodies = [
            json!({"answer": "A", "category": 2, "difficulty": 3}),
            json!({"question": "Q?", "category": 2, "difficulty": 3}),
            json!({"question": "Q?", "answer": "A", "difficulty": 3}),
            json!({"question": "Q?", "answer": "A", "category": 2}),
            json!({"question": "", "answer": "A", "category": 2, "difficulty": 3}),
            json!({"question": "Q?", "answer": "A", "category": 0, "difficulty": 3}),
        ];

        for body in bodies {
            let response = server.post(endpoints::QUESTIONS).json(&body).await;

            assert_error_body(&response, StatusCode::BAD_REQUEST, "Missing required fields");
        }

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(
            QuestionCatalog::new(&connection)
                .list(1)
                .unwrap()
                .total_questions,
            0
        );
    }
}
