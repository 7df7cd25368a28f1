#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        graphql_playground: false,
        database_max_connections: 5,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with_config(pool, test_config())
}

pub fn build_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// POST a GraphQL document with variables to `/graphql`.
pub async fn post_graphql(app: Router, query: &str, variables: Value) -> Response<Body> {
    let body = json!({ "query": query, "variables": variables });
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Run a GraphQL document through the full router and return the JSON body.
pub async fn graphql(pool: &PgPool, query: &str, variables: Value) -> Value {
    let app = build_test_app(pool.clone());
    body_json(post_graphql(app, query, variables).await).await
}

/// The `extensions.code` of the first error in a GraphQL response.
pub fn first_error_code(body: &Value) -> &str {
    body["errors"][0]["extensions"]["code"]
        .as_str()
        .expect("response should carry an error code")
}

/// The message of the first error in a GraphQL response.
pub fn first_error_message(body: &Value) -> &str {
    body["errors"][0]["message"]
        .as_str()
        .expect("response should carry an error message")
}

pub const CREATE_CATEGORY: &str = r#"
    mutation($name: String!) {
        createCategory(createCategoryInput: { name: $name }) { id name }
    }
"#;

pub const CREATE_PRODUCT: &str = r#"
    mutation($input: CreateProductInput!) {
        createProduct(createProductInput: $input) { id name color price categoryId }
    }
"#;

/// Create a category through the API and return its id.
pub async fn create_category(pool: &PgPool, name: &str) -> i64 {
    let body = graphql(pool, CREATE_CATEGORY, json!({ "name": name })).await;
    body["data"]["createCategory"]["id"]
        .as_i64()
        .unwrap_or_else(|| panic!("createCategory failed: {body}"))
}

/// Create a product through the API and return its id.
pub async fn create_product(pool: &PgPool, input: Value) -> i64 {
    let body = graphql(pool, CREATE_PRODUCT, json!({ "input": input })).await;
    body["data"]["createProduct"]["id"]
        .as_i64()
        .unwrap_or_else(|| panic!("createProduct failed: {body}"))
}
