//! Router-level tests driving the full middleware stack with `oneshot`.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use super::{build_router, AppState};
use crate::config::{DatabaseConfig, StoreBackend};
use crate::domain::NewQuestion;
use crate::infrastructure::persistence::Repositories;

/// Two categories, 12 questions, the first 3 in category 1.
async fn seeded_repos() -> Repositories {
    let repos = Repositories::in_memory();
    let science = repos.categories.insert("Science").await.unwrap();
    let art = repos.categories.insert("Art").await.unwrap();
    for i in 0..12 {
        let category = if i < 3 { science } else { art };
        repos
            .questions
            .insert(&NewQuestion {
                question: format!("Question {} about a Title", i),
                answer: format!("Answer {}", i),
                category,
                difficulty: 1 + (i % 5),
            })
            .await
            .unwrap();
    }
    repos
}

fn app(repos: &Repositories) -> Router {
    build_router(Arc::new(AppState::from_repositories(repos)))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(repos: &Repositories, uri: &str) -> (StatusCode, Value) {
    send(app(repos), Method::GET, uri, None).await
}

async fn post(repos: &Repositories, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app(repos), Method::POST, uri, Some(body)).await
}

async fn delete(repos: &Repositories, uri: &str) -> (StatusCode, Value) {
    send(app(repos), Method::DELETE, uri, None).await
}

fn question_ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

// ============================================================================
// Categories
// ============================================================================

#[tokio::test]
async fn test_list_categories_keys_match_store() {
    let repos = seeded_repos().await;
    let (status, body) = get(&repos, "/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "categories": {"1": "Science", "2": "Art"}})
    );
}

#[tokio::test]
async fn test_post_categories_alias() {
    let repos = seeded_repos().await;
    let (status, body) = send(app(&repos), Method::POST, "/categories", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"].as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_category_questions_fit_on_one_page() {
    let repos = seeded_repos().await;
    let (status, body) = get(&repos, "/categories/1/questions?page=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["current_category"], 1);
    assert_eq!(body["total_questions"], 3);
    assert_eq!(question_ids(&body), vec![1, 2, 3]);
    // the sidebar still lists every category
    assert_eq!(body["categories"].as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_category_questions_unknown_category_is_empty() {
    let repos = seeded_repos().await;
    let (status, body) = get(&repos, "/categories/99/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 0);
    assert!(question_ids(&body).is_empty());
}

#[tokio::test]
async fn test_category_questions_non_numeric_id_is_not_found() {
    let repos = seeded_repos().await;
    let (status, body) = get(&repos, "/categories/science/questions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
}

// ============================================================================
// Questions
// ============================================================================

#[tokio::test]
async fn test_list_questions_pages() {
    let repos = seeded_repos().await;

    let (status, first) = get(&repos, "/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["total_questions"], 12);
    assert_eq!(question_ids(&first), (1..=10).collect::<Vec<_>>());

    let (_, second) = get(&repos, "/questions?page=2").await;
    assert_eq!(question_ids(&second), vec![11, 12]);
    assert_eq!(second["total_questions"], 12);

    let (_, in_path) = get(&repos, "/questions/2").await;
    assert_eq!(question_ids(&in_path), vec![11, 12]);
}

#[tokio::test]
async fn test_page_beyond_end_is_empty() {
    let repos = seeded_repos().await;
    let (status, body) = get(&repos, "/questions?page=5").await;

    assert_eq!(status, StatusCode::OK);
    assert!(question_ids(&body).is_empty());
    assert_eq!(body["total_questions"], 12);
}

#[tokio::test]
async fn test_invalid_page_is_bad_request() {
    let repos = seeded_repos().await;

    for uri in ["/questions?page=0", "/questions?page=-1", "/questions?page=abc", "/questions/0"] {
        let (status, body) = get(&repos, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(
            body,
            json!({"success": false, "error": 400, "message": "Bad Request"})
        );
    }
}

#[tokio::test]
async fn test_question_shape() {
    let repos = seeded_repos().await;
    let (_, body) = get(&repos, "/questions").await;

    assert_eq!(
        body["questions"][0],
        json!({
            "id": 1,
            "question": "Question 0 about a Title",
            "answer": "Answer 0",
            "category": 1,
            "difficulty": 1
        })
    );
}

#[tokio::test]
async fn test_create_question_increments_total() {
    let repos = seeded_repos().await;

    let (status, body) = post(
        &repos,
        "/questions",
        json!({"question": "Who?", "answer": "Me", "difficulty": 2, "category": "1"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "created": 13}));

    let (_, list) = get(&repos, "/questions").await;
    assert_eq!(list["total_questions"], 13);
}

#[tokio::test]
async fn test_create_question_missing_field_is_unprocessable() {
    let repos = seeded_repos().await;
    let (status, body) = post(
        &repos,
        "/questions",
        json!({"question": "Who?", "difficulty": 2, "category": 1}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({"success": false, "error": 422, "message": "Not processable"})
    );
}

#[tokio::test]
async fn test_malformed_json_is_unprocessable() {
    let repos = seeded_repos().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/questions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app(&repos).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_delete_question() {
    let repos = seeded_repos().await;

    let (status, body) = delete(&repos, "/questions/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "deleted": 4}));

    let (_, list) = get(&repos, "/questions").await;
    assert_eq!(list["total_questions"], 11);
    assert!(!question_ids(&list).contains(&4));

    // second delete of the same id fails
    let (status, _) = delete(&repos, "/questions/4/delete").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_delete_missing_question_is_unprocessable() {
    let repos = seeded_repos().await;
    let (status, body) = delete(&repos, "/questions/999999").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 422);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let repos = seeded_repos().await;
    let (status, body) = post(&repos, "/questions/search", json!({"searchTerm": "title"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 12);
    // search results are not paginated
    assert_eq!(question_ids(&body).len(), 12);
    assert_eq!(body["current_category"], Value::Null);

    let (_, narrow) = post(&repos, "/questions/search", json!({"searchTerm": "QUESTION 1"})).await;
    // "Question 1", "Question 10", "Question 11"
    assert_eq!(question_ids(&narrow), vec![2, 11, 12]);
}

#[tokio::test]
async fn test_search_without_term_returns_everything() {
    let repos = seeded_repos().await;
    let (status, body) = post(&repos, "/questions/search", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 12);
}

// ============================================================================
// Quizzes
// ============================================================================

#[tokio::test]
async fn test_quiz_exhausted_returns_null() {
    let repos = seeded_repos().await;
    let all: Vec<i64> = (1..=12).collect();
    let (status, body) = post(
        &repos,
        "/quizzes",
        json!({"quiz_category": {"id": 1, "type": "click"}, "previous_questions": all}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "question": null}));
}

#[tokio::test]
async fn test_quiz_stays_in_category_and_skips_played() {
    let repos = seeded_repos().await;
    let (status, body) = post(
        &repos,
        "/quizzes",
        json!({"quiz_category": {"id": "1", "type": "Science"}, "previous_questions": [1, 2]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], 3);
    assert_eq!(body["question"]["category"], 1);
}

#[tokio::test]
async fn test_quiz_round_never_repeats() {
    let repos = seeded_repos().await;
    let mut played: Vec<i64> = Vec::new();

    for _ in 0..12 {
        let (_, body) = post(
            &repos,
            "/quizzes",
            json!({"quiz_category": null, "previous_questions": played}),
        )
        .await;
        let id = body["question"]["id"].as_i64().unwrap();
        assert!(!played.contains(&id));
        played.push(id);
    }

    let (_, body) = post(&repos, "/quizzes", json!({"previous_questions": played})).await;
    assert_eq!(body["question"], Value::Null);
}

#[tokio::test]
async fn test_quiz_bad_body_is_unprocessable() {
    let repos = seeded_repos().await;

    let (status, _) = post(&repos, "/quizzes", json!({"quiz_category": {"type": "Art"}})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = post(&repos, "/quizzes", json!({"previous_questions": "all"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ============================================================================
// System
// ============================================================================

#[tokio::test]
async fn test_ping() {
    let repos = Repositories::in_memory();
    let (status, body) = get(&repos, "/ping").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route_envelope() {
    let repos = Repositories::in_memory();
    let (status, body) = get(&repos, "/nowhere").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"success": false, "error": 404, "message": "Resource not found"})
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let repos = Repositories::in_memory();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/questions")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app(&repos).oneshot(request).await.unwrap();
    let headers = response.headers();

    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
    let methods = headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("DELETE"));
    assert!(methods.contains("PATCH"));

    let allowed_headers = headers
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(allowed_headers.contains("content-type"));
    assert!(allowed_headers.contains("authorization"));
}

#[tokio::test]
async fn test_cors_header_on_simple_request() {
    let repos = Repositories::in_memory();
    let request = Request::builder()
        .uri("/categories")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app(&repos).oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_allow_lists_on_plain_responses() {
    let repos = Repositories::in_memory();

    for (method, uri) in [
        (Method::GET, "/categories"),
        (Method::DELETE, "/questions/999999"),
        (Method::GET, "/nowhere"),
    ] {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();

        let response = app(&repos).oneshot(request).await.unwrap();
        let headers = response.headers();

        let allowed_headers = headers
            .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(allowed_headers, "Content-Type,Authorization", "{}", uri);

        let methods = headers
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(methods, "GET,PATCH,POST,DELETE,OPTIONS", "{}", uri);
    }
}

#[tokio::test]
async fn test_wrong_method_envelope() {
    let repos = Repositories::in_memory();
    let (status, body) = get(&repos, "/quizzes").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body,
        json!({"success": false, "error": 405, "message": "Method not allowed"})
    );

    let (status, body) = send(app(&repos), Method::PUT, "/questions", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_sqlite_backed_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        backend: StoreBackend::Sqlite,
        path: dir.path().join("trivia.db").display().to_string(),
        ..DatabaseConfig::default()
    };
    let repos = Repositories::open(&config).await.unwrap();

    let (_, categories) = get(&repos, "/categories").await;
    assert_eq!(categories["categories"]["1"], "Science");

    let (status, created) = post(
        &repos,
        "/questions",
        json!({"question": "What is H2O?", "answer": "Water", "difficulty": 1, "category": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["created"].as_i64().unwrap();

    let (_, found) = post(&repos, "/questions/search", json!({"searchTerm": "h2o"})).await;
    assert_eq!(question_ids(&found), vec![id]);

    let (_, in_category) = get(&repos, "/categories/1/questions").await;
    assert_eq!(in_category["total_questions"], 1);

    let (status, _) = delete(&repos, &format!("/questions/{}", id)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = get(&repos, "/questions").await;
    assert_eq!(list["total_questions"], 0);
}
