//! Application router configuration.

use std::{any::Any, time::Duration};

use axum::{
    Router,
    http::{
        Method, StatusCode,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    timeout::TimeoutLayer,
};

use crate::{
    AppState, Error,
    category::get_categories_endpoint,
    endpoints, error_response,
    logging::logging_middleware,
    not_found::get_404_not_found,
    question::{
        create_question_endpoint, delete_question_endpoint, get_category_questions_endpoint,
        get_questions_endpoint, search_questions_endpoint,
    },
    quiz::next_quiz_question_endpoint,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout;

    let router = Router::new()
        .route(endpoints::CATEGORIES, get(get_categories_endpoint))
        .route(
            endpoints::CATEGORY_QUESTIONS,
            get(get_category_questions_endpoint),
        )
        .route(
            endpoints::QUESTIONS,
            get(get_questions_endpoint).post(create_question_endpoint),
        )
        .route(endpoints::QUESTION, delete(delete_question_endpoint))
        .route(endpoints::SEARCH, post(search_questions_endpoint))
        .route(endpoints::QUIZZES, post(next_quiz_question_endpoint))
        .fallback(get_404_not_found);

    add_middleware(router, request_timeout).with_state(state)
}

/// Wrap `router` in the logging, panic, timeout, error body and CORS layers.
fn add_middleware<S>(router: Router<S>, request_timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(middleware::from_fn(logging_middleware))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(middleware::map_response(wrap_bare_error_response))
        .layer(cors_layer())
}

/// Allow any origin to call the API.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

/// Report a panic in a request handler as an internal server error.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let description = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "a request handler panicked".to_owned()
    };

    Error::Internal(description).into_response()
}

/// Give error responses produced outside of the handlers, such as a wrong
/// method or a timeout, the same JSON body as the handlers' errors.
async fn wrap_bare_error_response(response: Response) -> Response {
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error())
        || response.headers().contains_key(CONTENT_TYPE)
    {
        return response;
    }

    error_response(status, status.canonical_reason().unwrap_or("Unknown error"))
}

#[cfg(test)]
mod router_tests {
    use std::time::Duration;

    use axum::{
        Router,
        http::{HeaderName, HeaderValue, StatusCode},
        routing::get,
    };
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::{
        build_router, endpoints,
        test_utils::{assert_error_body, get_test_state, seed_categories},
    };

    use super::add_middleware;

    async fn failing_handler() -> &'static str {
        panic!("disk on fire")
    }

    async fn slow_handler() -> &'static str {
        tokio::time::sleep(Duration::from_secs(5)).await;
        "too late"
    }

    fn get_middleware_test_server(request_timeout: Duration) -> TestServer {
        let app = Router::new()
            .route("/fail", get(failing_handler))
            .route("/slow", get(slow_handler));

        TestServer::try_new(add_middleware(app, request_timeout))
            .expect("Could not create test server.")
    }

    fn get_test_server() -> TestServer {
        let state = get_test_state().with_request_timeout(Duration::from_secs(5));
        seed_categories(&state.db_connection.lock().unwrap(), &["Science", "Art"]);

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn get_categories_end_to_end() {
        let server = get_test_server();

        let response = server.get(endpoints::CATEGORIES).await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({"categories": {"1": "Science", "2": "Art"}, "success": true})
        );
    }

    #[tokio::test]
    async fn create_question_end_to_end() {
        let server = get_test_server();

        let response = server
            .post(endpoints::QUESTIONS)
            .json(&json!({"question": "Q?", "answer": "A", "category": 2, "difficulty": 3}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let id = response.json::<Value>()["question"]["id"]
            .as_i64()
            .expect("id should be an integer");
        assert!(id > 0);

        let listed = server.get(endpoints::QUESTIONS).await.json::<Value>();
        assert_eq!(listed["total_questions"], 1);
        assert_eq!(listed["questions"][0]["id"], id);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        let response = server.get("/does/not/exist").await;

        assert_error_body(&response, StatusCode::NOT_FOUND, "Resource not found");
    }

    #[tokio::test]
    async fn wrong_method_has_error_body() {
        let server = get_test_server();

        let response = server.put(endpoints::QUESTIONS).await;

        assert_error_body(
            &response,
            StatusCode::METHOD_NOT_ALLOWED,
            "Method Not Allowed",
        );
    }

    #[tokio::test]
    async fn non_numeric_question_id_is_not_found() {
        let server = get_test_server();

        let response = server.delete("/questions/abc").await;

        assert_error_body(&response, StatusCode::NOT_FOUND, "Resource not found");
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let server = get_test_server();

        let response = server
            .get(endpoints::CATEGORIES)
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("http://localhost:3000"),
            )
            .await;

        assert_eq!(
            response.header("access-control-allow-origin"),
            HeaderValue::from_static("*")
        );
    }

    #[tokio::test]
    async fn panic_is_internal_error_with_description() {
        let server = get_middleware_test_server(Duration::from_secs(5));

        let response = server.get("/fail").await;

        assert_error_body(&response, StatusCode::INTERNAL_SERVER_ERROR, "disk on fire");
    }

    #[tokio::test]
    async fn slow_request_times_out_with_error_body() {
        let server = get_middleware_test_server(Duration::from_millis(50));

        let response = server.get("/slow").await;

        assert_error_body(&response, StatusCode::REQUEST_TIMEOUT, "Request Timeout");
    }
}
