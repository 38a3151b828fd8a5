#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use todo_api::routes;
use todo_api::services::records::TodoRecords;
use todo_api::services::seed_list::SeedListGenerator;
use todo_api::services::{GeneratingTodoService, StoreTodoService, TodoService};
use todo_api::state::AppState;
use todo_core::ids::UuidGenerator;
use todo_core::seed_list::SeedPrompt;
use todo_db::store::PgTodoStore;
use todo_openai::{ChatCompletionApi, OpenAiConfig};

/// Record service over the test database with random UUID keys.
pub fn test_records(pool: &PgPool) -> TodoRecords {
    TodoRecords::new(
        Arc::new(PgTodoStore::new(pool.clone())),
        Arc::new(UuidGenerator),
    )
}

/// Build the application with the store-only service variant.
pub fn build_test_app(pool: PgPool) -> Router {
    let service = Arc::new(StoreTodoService::new(test_records(&pool)));
    build_app_with_service(pool, service)
}

/// Build the application with the generating variant, pointed at
/// `completion_url` (usually a wiremock server).
pub fn build_generating_app(pool: PgPool, completion_url: &str) -> Router {
    let api = ChatCompletionApi::new(OpenAiConfig::new(completion_url, "test-key")).unwrap();
    let generator = SeedListGenerator::new(api, SeedPrompt::default());
    let service = Arc::new(GeneratingTodoService::new(test_records(&pool), generator));
    build_app_with_service(pool, service)
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_app_with_service(pool: PgPool, todo_service: Arc<dyn TodoService>) -> Router {
    build_app_with_timeout(pool, todo_service, Duration::from_secs(30))
}

/// Same as [`build_app_with_service`] with a custom request timeout.
pub fn build_app_with_timeout(
    pool: PgPool,
    todo_service: Arc<dyn TodoService>,
    request_timeout: Duration,
) -> Router {
    let state = AppState { pool, todo_service };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
