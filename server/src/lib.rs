//! HTTP surface for the todo service.
//!
//! Routes:
//! - `GET /todos` lists every todo
//! - `POST /todos` creates one (201)
//! - `GET /todos/{id}` fetches one
//! - `PUT /todos/{id}` updates one

pub mod config;
pub mod error;
pub mod extract;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use todo_core::{MemoryStore, Todo, TodoService};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::extract::TodoBody;

pub type SharedService = Arc<TodoService<MemoryStore>>;

/// Router over a fresh, empty in-memory store.
pub fn app() -> Router {
    app_with(Arc::new(TodoService::new(MemoryStore::new())))
}

/// Router over an existing service, so callers can seed or inspect its store.
pub fn app_with(service: SharedService) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(service): State<SharedService>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(service.list()?))
}

async fn create_todo(
    State(service): State<SharedService>,
    TodoBody(input): TodoBody,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = service.create(input)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(service): State<SharedService>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(service.get(&id)?))
}

async fn update_todo(
    State(service): State<SharedService>,
    Path(id): Path<String>,
    TodoBody(input): TodoBody,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(service.update(&id, input)?))
}
