//! Endpoint for searching question text.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    db::lock_connection,
    extract::JsonBody,
    question::{Question, state::QuestionsEndpointState},
};

/// The request body for a question search.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchForm {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// The response body for a question search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub success: bool,
}

/// Find every question containing the search term, ignoring case.
pub async fn search_questions_endpoint(
    State(state): State<QuestionsEndpointState>,
    JsonBody(form): JsonBody<SearchForm>,
) -> Result<Json<SearchResponse>, Error> {
    let term = form.search_term.ok_or(Error::MissingFields)?;

    let connection = lock_connection(&state.db_connection)?;
    let questions = state.catalog(&connection).search(&term)?;

    Ok(Json(SearchResponse {
        total_questions: questions.len(),
        questions,
        success: true,
    }))
}

#[cfg(test)]
mod search_questions_endpoint_tests {
    use axum::{Router, http::StatusCode, routing::post};
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::{
        AppState, NewQuestion, ResultPolicy, endpoints, insert_question,
        test_utils::{assert_error_body, get_test_state, seed_categories},
    };

    use super::search_questions_endpoint;

    fn get_test_server(state: AppState) -> TestServer {
        let app = Router::new()
            .route(endpoints::SEARCH, post(search_questions_endpoint))
            .with_state(state);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    fn get_seeded_state() -> AppState {
        let state = get_test_state();
        {
            let connection = state.db_connection.lock().unwrap();
            let categories = seed_categories(&connection, &["Science", "History"]);
            for text in [
                "Who discovered penicillin?",
                "Which explorer discovered the Pacific Ocean?",
                "What is the heaviest organ in the human body?",
            ] {
                insert_question(
                    &NewQuestion::new(text, "answer", categories[1].id, 2).unwrap(),
                    &connection,
                )
                .unwrap();
            }
        }
        state
    }

    #[tokio::test]
    async fn finds_matching_questions() {
        let server = get_test_server(get_seeded_state());

        let response = server
            .post(endpoints::SEARCH)
            .json(&json!({"searchTerm": "DISCOV"}))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["total_questions"], 2);
        assert_eq!(body["questions"][0]["question"], "Who discovered penicillin?");
    }

    #[tokio::test]
    async fn no_matches_is_not_found() {
        let server = get_test_server(get_seeded_state());

        let response = server
            .post(endpoints::SEARCH)
            .json(&json!({"searchTerm": "testtest test test"}))
            .await;

        assert_error_body(&response, StatusCode::NOT_FOUND, "No Record Found");
    }

    #[tokio::test]
    async fn lenient_policy_returns_empty_list() {
        let mut state = get_seeded_state();
        state.result_policy = ResultPolicy::Lenient;
        let server = get_test_server(state);

        let response = server
            .post(endpoints::SEARCH)
            .json(&json!({"searchTerm": "testtest test test"}))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({"questions": [], "total_questions": 0, "success": true})
        );
    }

    #[tokio::test]
    async fn missing_search_term_is_bad_request() {
        let server = get_test_server(get_seeded_state());

        let response = server.post(endpoints::SEARCH).json(&json!({})).await;

        assert_error_body(&response, StatusCode::BAD_REQUEST, "Missing required fields");
    }

    #[tokio::test]
    async fn malformed_body_is_unprocessable() {
        let server = get_test_server(get_seeded_state());

        let response = server
            .post(endpoints::SEARCH)
            .json(&json!({"searchTerm": 42}))
            .await;

        assert_error_body(
            &response,
            StatusCode::UNPROCESSABLE_ENTITY,
            "Unprocessable entity",
        );
    }
}
