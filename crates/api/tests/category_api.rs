//! GraphQL-level integration tests for category queries and mutations.

mod common;

use common::{create_category, first_error_code, first_error_message, graphql};
use serde_json::json;
use sqlx::PgPool;

const GET_ONE: &str = r#"
    query($id: Int!) {
        getOneCategory(id: $id) { id name createdAt }
    }
"#;

const GET_ALL: &str = r#"
    query($search: String, $page: Int, $limit: Int) {
        getAllCategory(search: $search, page: $page, limit: $limit) { id name }
    }
"#;

const UPDATE: &str = r#"
    mutation($input: UpdateCategoryInput!) {
        updateCategory(updateCategoryInput: $input) { id name }
    }
"#;

const REMOVE: &str = r#"
    mutation($id: Int!) {
        removeCategory(id: $id) { id name }
    }
"#;

fn names(body: &serde_json::Value) -> Vec<&str> {
    body["data"]["getAllCategory"]
        .as_array()
        .unwrap_or_else(|| panic!("unexpected response: {body}"))
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Create / find
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_then_get_one_round_trips(pool: PgPool) {
    let id = create_category(&pool, "Electronics").await;

    let body = graphql(&pool, GET_ONE, json!({ "id": id })).await;
    assert!(body["errors"].is_null(), "unexpected errors: {body}");
    let category = &body["data"]["getOneCategory"];
    assert_eq!(category["id"], id);
    assert_eq!(category["name"], "Electronics");
    assert!(category["createdAt"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_one_missing_reports_not_found(pool: PgPool) {
    let body = graphql(&pool, GET_ONE, json!({ "id": 404 })).await;
    assert_eq!(first_error_message(&body), "Category not found");
    assert_eq!(first_error_code(&body), "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_keeps_blank_name_as_given(pool: PgPool) {
    let body = graphql(&pool, common::CREATE_CATEGORY, json!({ "name": "   " })).await;
    assert!(body["errors"].is_null(), "unexpected errors: {body}");
    assert_eq!(body["data"]["createCategory"]["name"], "   ");

    let all = graphql(&pool, GET_ALL, json!({})).await;
    assert_eq!(names(&all), ["   "]);
}

// ---------------------------------------------------------------------------
// List: search and pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn search_matches_name_case_insensitively(pool: PgPool) {
    for name in ["Red Wine", "Blue Cheese", "REDWOOD", "Bored", "Green Tea"] {
        create_category(&pool, name).await;
    }

    let body = graphql(&pool, GET_ALL, json!({ "search": "red" })).await;
    assert_eq!(names(&body), ["Red Wine", "REDWOOD", "Bored"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_search_is_unfiltered(pool: PgPool) {
    create_category(&pool, "A").await;
    create_category(&pool, "B").await;

    let body = graphql(&pool, GET_ALL, json!({ "search": "" })).await;
    assert_eq!(names(&body), ["A", "B"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn pagination_returns_requested_window(pool: PgPool) {
    let all: Vec<String> = (1..=23).map(|i| format!("Cat {i:02}")).collect();
    for name in &all {
        create_category(&pool, name).await;
    }

    let body = graphql(&pool, GET_ALL, json!({ "page": 2, "limit": 10 })).await;
    assert_eq!(names(&body), all[10..20]);

    // Omitted or zero values fall back to page 1, limit 10.
    let body = graphql(&pool, GET_ALL, json!({})).await;
    assert_eq!(names(&body), all[..10]);

    let body = graphql(&pool, GET_ALL, json!({ "page": 1, "limit": 0 })).await;
    assert_eq!(names(&body), all[..10]);

    let body = graphql(&pool, GET_ALL, json!({ "page": 5, "limit": 10 })).await;
    assert!(names(&body).is_empty());

    // Large limits are not capped.
    let body = graphql(&pool, GET_ALL, json!({ "limit": 500 })).await;
    assert_eq!(names(&body), all);
}

// ---------------------------------------------------------------------------
// Update / remove
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_replaces_supplied_fields(pool: PgPool) {
    let id = create_category(&pool, "Old").await;

    let body = graphql(&pool, UPDATE, json!({ "input": { "id": id, "name": "New" } })).await;
    assert_eq!(body["data"]["updateCategory"]["name"], "New");

    // No fields supplied: nothing changes.
    let body = graphql(&pool, UPDATE, json!({ "input": { "id": id } })).await;
    assert_eq!(body["data"]["updateCategory"]["name"], "New");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_reports_not_found_and_mutates_nothing(pool: PgPool) {
    let id = create_category(&pool, "Keep").await;

    let body = graphql(
        &pool,
        UPDATE,
        json!({ "input": { "id": id + 1000, "name": "Changed" } }),
    )
    .await;
    assert_eq!(first_error_message(&body), "Category not found");
    assert_eq!(first_error_code(&body), "BAD_REQUEST");

    let all = graphql(&pool, GET_ALL, json!({})).await;
    assert_eq!(names(&all), ["Keep"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn remove_returns_deleted_category(pool: PgPool) {
    let id = create_category(&pool, "Gone").await;

    let body = graphql(&pool, REMOVE, json!({ "id": id })).await;
    assert_eq!(body["data"]["removeCategory"]["id"], id);
    assert_eq!(body["data"]["removeCategory"]["name"], "Gone");

    let body = graphql(&pool, GET_ONE, json!({ "id": id })).await;
    assert_eq!(first_error_message(&body), "Category not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn remove_missing_reports_not_found(pool: PgPool) {
    create_category(&pool, "Stay").await;

    let body = graphql(&pool, REMOVE, json!({ "id": 99_999 })).await;
    assert_eq!(first_error_message(&body), "Category not found");

    let all = graphql(&pool, GET_ALL, json!({})).await;
    assert_eq!(names(&all), ["Stay"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn remove_category_with_products_is_an_internal_error(pool: PgPool) {
    let id = create_category(&pool, "Parent").await;
    common::create_product(&pool, json!({ "name": "Child", "categoryId": id })).await;

    let body = graphql(&pool, REMOVE, json!({ "id": id })).await;
    assert_eq!(first_error_code(&body), "INTERNAL_SERVER_ERROR");
    assert!(!first_error_message(&body).is_empty());

    let body = graphql(&pool, GET_ONE, json!({ "id": id })).await;
    assert_eq!(body["data"]["getOneCategory"]["name"], "Parent");
}
