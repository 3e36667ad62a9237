//! Endpoint for the paginated question list.

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    category::{CategoryId, CategoryName},
    db::lock_connection,
    extract::QueryParams,
    question::{Question, QuestionPage, state::QuestionsEndpointState},
};

/// The query parameters for the question list.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
}

/// The response body for one page of questions.
#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub questions: Vec<Question>,
    pub total_pages: u64,
    pub total_questions: u64,
    pub categories: BTreeMap<CategoryId, CategoryName>,
    /// Always null, the question list is not filtered by category.
    pub current_category: Option<CategoryName>,
    pub success: bool,
}

impl From<QuestionPage> for QuestionPageResponse {
    fn from(page: QuestionPage) -> Self {
        Self {
            questions: page.questions,
            total_pages: page.total_pages,
            total_questions: page.total_questions,
            categories: page.categories,
            current_category: None,
            success: true,
        }
    }
}

/// Get a page of questions, ten at a time.
pub async fn get_questions_endpoint(
    State(state): State<QuestionsEndpointState>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<Json<QuestionPageResponse>, Error> {
    let page = query.page.unwrap_or(state.pagination_config.default_page);

    let connection = lock_connection(&state.db_connection)?;
    let page = state.catalog(&connection).list(page)?;

    Ok(Json(page.into()))
}

#[cfg(test)]
mod get_questions_endpoint_tests {
    use axum::{Router, http::StatusCode, routing::get};
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::{
        AppState, ResultPolicy, endpoints,
        test_utils::{assert_error_body, get_test_state, seed_categories, seed_questions},
    };

    use super::get_questions_endpoint;

    fn get_test_server(state: AppState) -> TestServer {
        let app = Router::new()
            .route(endpoints::QUESTIONS, get(get_questions_endpoint))
            .with_state(state);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    fn get_seeded_state(question_count: usize) -> AppState {
        let state = get_test_state();
        {
            let connection = state.db_connection.lock().unwrap();
            let categories = seed_categories(&connection, &["Science", "Art"]);
            seed_questions(&connection, categories[0].id, question_count);
        }
        state
    }

    #[tokio::test]
    async fn defaults_to_first_page() {
        let server = get_test_server(get_seeded_state(15));

        let response = server.get(endpoints::QUESTIONS).await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["questions"].as_array().unwrap().len(), 10);
        assert_eq!(body["questions"][0]["id"], 1);
        assert_eq!(body["total_questions"], 15);
        assert_eq!(body["total_pages"], 2);
        assert_eq!(body["categories"]["2"], "Art");
        assert_eq!(body["current_category"], Value::Null);
    }

    #[tokio::test]
    async fn returns_requested_page() {
        let server = get_test_server(get_seeded_state(15));

        let response = server.get(endpoints::QUESTIONS).add_query_param("page", 2).await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["questions"].as_array().unwrap().len(), 5);
        assert_eq!(body["questions"][0]["id"], 11);
    }

    #[tokio::test]
    async fn question_objects_have_exactly_the_documented_fields() {
        let server = get_test_server(get_seeded_state(1));

        let body = server.get(endpoints::QUESTIONS).await.json::<Value>();

        let question = body["questions"][0].as_object().unwrap();
        let mut keys: Vec<_> = question.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["answer", "category", "difficulty", "id", "question"]);
    }

    #[tokio::test]
    async fn page_out_of_range_is_bad_request() {
        let server = get_test_server(get_seeded_state(15));

        let response = server
            .get(endpoints::QUESTIONS)
            .add_query_param("page", 500)
            .await;

        assert_error_body(&response, StatusCode::BAD_REQUEST, "Bad request");
    }

    #[tokio::test]
    async fn non_numeric_page_is_bad_request() {
        let server = get_test_server(get_seeded_state(15));

        let response = server
            .get(endpoints::QUESTIONS)
            .add_query_param("page", "two")
            .await;

        assert_error_body(&response, StatusCode::BAD_REQUEST, "Bad request");
    }

    #[tokio::test]
    async fn lenient_policy_returns_empty_page() {
        let mut state = get_seeded_state(15);
        state.result_policy = ResultPolicy::Lenient;
        let server = get_test_server(state);

        let response = server
            .get(endpoints::QUESTIONS)
            .add_query_param("page", 500)
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["questions"], Value::Array(vec![]));
        assert_eq!(body["success"], true);
    }
}
