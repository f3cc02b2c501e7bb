use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_server::{app, Todo};
use tower::{Service, ServiceExt};

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

/// Send one request through a long-lived router so state carries over.
async fn send(app: &mut Router, request: Request<String>) -> axum::response::Response {
    ServiceExt::<Request<String>>::ready(app)
        .await
        .unwrap()
        .call(request)
        .await
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let resp = app().oneshot(empty_request("GET", "/api/todo")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_200_with_first_id() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todo", r#"{"title":"Buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.id, 1);
    assert_eq!(todo.title.as_deref(), Some("Buy milk"));
    assert!(!todo.completed);
}

#[tokio::test]
async fn create_todo_forces_completed_false() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/todo",
            r#"{"title":"Already done","completed":true,"order":3}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todo: Todo = body_json(resp).await;
    assert!(!todo.completed);
    assert_eq!(todo.order, Some(3));
}

#[tokio::test]
async fn create_todo_malformed_json_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todo", "not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- get ---

#[tokio::test]
async fn get_todo_not_found() {
    let resp = app().oneshot(empty_request("GET", "/api/todo/42")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_todo_non_numeric_id_returns_400() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/todo/not-a-number"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- patch ---

#[tokio::test]
async fn patch_todo_not_found() {
    let resp = app()
        .oneshot(json_request("PATCH", "/api/todo/42", r#"{"title":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_todo_not_found() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/api/todo/42"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_all_on_empty_collection_returns_204() {
    let resp = app().oneshot(empty_request("DELETE", "/api/todo")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
}

// --- full lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    let mut app = app();

    // create two
    let resp = send(&mut app, json_request("POST", "/api/todo", r#"{"title":"Walk dog"}"#)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let first: Todo = body_json(resp).await;
    let resp = send(&mut app, json_request("POST", "/api/todo", r#"{"title":"Feed cat"}"#)).await;
    let second: Todo = body_json(resp).await;
    assert_eq!((first.id, second.id), (1, 2));

    // list is ordered by id
    let resp = send(&mut app, empty_request("GET", "/api/todo")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos, vec![first.clone(), second.clone()]);

    // patch only completed
    let resp = send(
        &mut app,
        json_request("PATCH", &format!("/api/todo/{}", first.id), r#"{"completed":true}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let patched: Todo = body_json(resp).await;
    assert_eq!(patched.title.as_deref(), Some("Walk dog")); // unchanged
    assert!(patched.completed);

    // get reflects the patch
    let resp = send(&mut app, empty_request("GET", &format!("/api/todo/{}", first.id))).await;
    let fetched: Todo = body_json(resp).await;
    assert_eq!(fetched, patched);

    // delete one
    let resp = send(&mut app, empty_request("DELETE", &format!("/api/todo/{}", first.id))).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    let resp = send(&mut app, empty_request("GET", &format!("/api/todo/{}", first.id))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // delete all
    let resp = send(&mut app, empty_request("DELETE", "/api/todo")).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(&mut app, empty_request("GET", "/api/todo")).await;
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());

    // ids keep counting after a clear
    let resp = send(&mut app, json_request("POST", "/api/todo", r#"{"title":"Again"}"#)).await;
    let third: Todo = body_json(resp).await;
    assert_eq!(third.id, 3);
}
