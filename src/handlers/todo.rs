use super::error::AppError;
use super::extract::AppJson;
use super::types::*;
use crate::{handlers::Service, storage::TodoId, utils::RootSpan};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};
use tracing::info;

fn parse_id(root_span: &RootSpan, raw: &str) -> Result<TodoId, AppError> {
    root_span.record().raw_todo_id(raw);

    let id: TodoId = raw.parse()?;
    root_span.record().todo_id(&id);

    Ok(id)
}

#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "List all todos", body = TodosResponse),
        (status = 400, description = "Storage error"),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::get_all", skip_all)]
pub(crate) async fn get_all(State(service): State<Service>) -> Result<impl IntoResponse, AppError> {
    let todos = service.todo().get_all().await?;

    info!("Get {} ToDos", todos.len());

    Ok(Json(TodosResponse { todos }))
}

#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(
        ("id" = String, Path, description = "ToDo ID, 32 hex digits")
    ),
    responses(
        (status = 200, description = "Get ToDo by ID", body = TodoResponse),
        (status = 400, description = "Storage error"),
        (status = 404, description = "ToDo not found or malformed ID"),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::get", skip_all)]
pub(crate) async fn get(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&root_span, &id)?;

    let todo = service.todo().get(id).await?;

    info!(todo = ?todo, "Get ToDo");

    Ok(Json(TodoResponse { todo }))
}

#[utoipa::path(
    post,
    path = "/todos",
    request_body(
        content = CreateTodo,
        description = "New ToDo item",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "ToDo created", body = TodoResponse),
        (status = 400, description = "Missing or empty text, or storage error"),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::post", skip_all)]
pub(crate) async fn add(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    AppJson(input): AppJson<CreateTodo>,
) -> Result<impl IntoResponse, AppError> {
    match service.todo().add(input.text.as_deref()).await {
        Ok(todo) => {
            root_span.record().todo_id(&todo.id);
            Ok(Json(TodoResponse { todo }))
        }
        Err(e) => {
            tracing::error!(err = ?e, "failed to add new ToDo");
            Err(e)
        }
    }
}

#[utoipa::path(
    patch,
    path = "/todos/{id}",
    params(
        ("id" = String, Path, description = "ToDo ID, 32 hex digits")
    ),
    request_body(
        content = UpdateTodo,
        description = "Partial ToDo update; only `completed: true` marks it done",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "ToDo updated", body = TodoResponse),
        (status = 400, description = "Malformed body or storage error"),
        (status = 404, description = "ToDo not found or malformed ID"),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::update", skip_all)]
pub(crate) async fn update(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    Path(id): Path<String>,
    input: Result<AppJson<UpdateTodo>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&root_span, &id)?;
    let AppJson(input) = input?;

    let todo = service.todo().update(id, &input).await?;

    Ok(Json(TodoResponse { todo }))
}

#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(
        ("id" = String, Path, description = "ToDo ID, 32 hex digits")
    ),
    responses(
        (status = 200, description = "ToDo deleted", body = TodoResponse),
        (status = 400, description = "Storage error"),
        (status = 404, description = "ToDo not found or malformed ID"),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::delete", skip_all)]
pub(crate) async fn delete(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&root_span, &id)?;

    let todo = service.todo().delete(id).await?;

    Ok(Json(TodoResponse { todo }))
}
