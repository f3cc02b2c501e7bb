use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// Path the todo collection is mounted under.
pub const RESOURCE_PATH: &str = "/api/todo";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: Option<String>,
    pub completed: bool,
    pub order: Option<i64>,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
    pub order: Option<i64>,
}

#[derive(Deserialize)]
pub struct PatchTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub order: Option<i64>,
}

/// In-memory collection. Ids come from a counter that is never reset, so an
/// id is not reused after `DELETE /api/todo`.
#[derive(Debug, Default)]
pub struct Todos {
    items: BTreeMap<i64, Todo>,
    counter: i64,
}

pub type Db = Arc<RwLock<Todos>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Todos::default()));
    Router::new()
        .route(
            RESOURCE_PATH,
            get(list_todos).post(create_todo).delete(delete_all),
        )
        .route(
            &format!("{RESOURCE_PATH}/{{id}}"),
            get(get_todo).patch(patch_todo).delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.items.values().cloned().collect())
}

async fn create_todo(State(db): State<Db>, Json(input): Json<CreateTodo>) -> Json<Todo> {
    let mut todos = db.write().await;
    todos.counter += 1;
    let todo = Todo {
        id: todos.counter,
        title: input.title,
        completed: false,
        order: input.order,
    };
    todos.items.insert(todo.id, todo.clone());
    tracing::debug!(id = todo.id, "created todo");
    Json(todo)
}

async fn delete_all(State(db): State<Db>) -> StatusCode {
    db.write().await.items.clear();
    StatusCode::NO_CONTENT
}

async fn get_todo(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Todo>, StatusCode> {
    let todos = db.read().await;
    todos.items.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn patch_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(patch): Json<PatchTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.write().await;
    let todo = todos.items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = patch.title {
        todo.title = Some(title);
    }
    if let Some(completed) = patch.completed {
        todo.completed = completed;
    }
    if let Some(order) = patch.order {
        todo.order = Some(order);
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut todos = db.write().await;
    match todos.items.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}
