//! Resource handlers: one per verb/path pair, each issuing one store call.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request, State},
    http::{request::Parts, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;
use todo_core::{CreateTodo, Todo, UpdateTodo};

use crate::error::ApiError;
use crate::store::SharedStore;
use crate::update::TodoChanges;

/// JSON request body parsed regardless of `Content-Type`. Anything that is
/// not valid JSON for `T` is a 400.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::validation("Invalid JSON"))?;
        serde_json::from_slice(&bytes).map(JsonBody).map_err(|err| {
            tracing::debug!(error = %err, "rejected request body");
            ApiError::validation("Invalid JSON")
        })
    }
}

/// Todo identifier taken from the `{id}` path segment.
pub struct TodoId(pub i64);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::validation("Invalid ID"))?;
        raw.parse()
            .map(TodoId)
            .map_err(|_| ApiError::validation("Invalid ID"))
    }
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn list_todos(State(store): State<SharedStore>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = store
        .list()
        .await
        .map_err(ApiError::storage("Internal Server Error"))?;
    Ok(Json(todos))
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    JsonBody(input): JsonBody<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    if input.title.is_empty() {
        return Err(ApiError::validation("Invalid input"));
    }

    let todo = store
        .create(&input.title)
        .await
        .map_err(ApiError::storage("Failed to create a todo"))?;
    tracing::info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn get_todo(
    State(store): State<SharedStore>,
    TodoId(id): TodoId,
) -> Result<Json<Todo>, ApiError> {
    store
        .get(id)
        .await
        .map_err(ApiError::storage("Failed to query todo"))?
        .map(Json)
        .ok_or(ApiError::NotFound("Not Found"))
}

pub async fn update_todo(
    State(store): State<SharedStore>,
    TodoId(id): TodoId,
    JsonBody(input): JsonBody<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    let changes = TodoChanges::try_from(input)?;
    store
        .update(id, &changes)
        .await
        .map_err(ApiError::storage("Failed to update todo"))?
        .map(Json)
        .ok_or(ApiError::NotFound("Todo not found"))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    TodoId(id): TodoId,
) -> Result<StatusCode, ApiError> {
    let affected = store
        .delete(id)
        .await
        .map_err(ApiError::storage("Failed to delete todo"))?;
    if affected == 0 {
        return Err(ApiError::NotFound("Not Found"));
    }
    tracing::info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

/// Paths under `/todos/` whose remainder is not a single segment, such as
/// `/todos/` or `/todos/1/extra`, cannot name an id.
pub async fn invalid_id() -> ApiError {
    ApiError::validation("Invalid ID")
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found")
}
