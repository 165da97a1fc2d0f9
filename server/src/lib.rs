//! HTTP front end for the todo service.
//!
//! # Design
//! Handlers decode the request, make one call into the shared
//! `TodoRepository`, and encode the result. All state lives in the
//! repository, which is built once and handed to the router as axum state.
//! Every route is mounted both at the root and under `/api`.

pub mod config;
pub mod error;
pub mod telemetry;

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use todo_core::{CreateTodo, Todo, TodoId, TodoRepository, UpdateTodo};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::ApiError;

pub type SharedRepository = Arc<TodoRepository>;

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    todos: usize,
}

/// Router over a fresh, empty repository.
pub fn app() -> Router {
    router(Arc::new(TodoRepository::new()))
}

pub fn router(repository: SharedRepository) -> Router {
    let todos: Router<SharedRepository> = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo));

    let routes = Router::new()
        .route("/health", get(health))
        .merge(todos.clone())
        .nest("/api", todos)
        .with_state(repository);
    with_middleware(routes)
}

/// Request tracing plus panic recovery: a panicking handler becomes a 500
/// with the usual error body instead of a dropped connection.
pub fn with_middleware(routes: Router) -> Router {
    routes
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
}

/// Serve until `shutdown` resolves.
pub async fn run<F>(
    listener: TcpListener,
    repository: SharedRepository,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(repository))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn health(State(repo): State<SharedRepository>) -> Json<Health> {
    Json(Health {
        status: "ok",
        todos: repo.len(),
    })
}

async fn list_todos(State(repo): State<SharedRepository>) -> Json<Vec<Todo>> {
    Json(repo.list_all())
}

async fn create_todo(
    State(repo): State<SharedRepository>,
    body: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = body?;
    let todo = repo.create(input)?;
    info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(repo): State<SharedRepository>,
    path: Result<Path<TodoId>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = path?;
    Ok(Json(repo.get_by_id(id)?))
}

async fn update_todo(
    State(repo): State<SharedRepository>,
    path: Result<Path<TodoId>, PathRejection>,
    body: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = path?;
    let Json(patch) = body?;
    let todo = repo.update(id, patch)?;
    info!(id, completed = todo.completed, "updated todo");
    Ok(Json(todo))
}

async fn delete_todo(
    State(repo): State<SharedRepository>,
    path: Result<Path<TodoId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    repo.delete(id)?;
    info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
