//! Minimal-style surface under `/todoitems`.
//!
//! The item id is taken from the path only; any `id` in a request body is
//! ignored. Responses carry `TodoItemView`, never the stored entity.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use todo_store::{TodoItemInput, TodoItemView, TodoStore};

use crate::error::ApiError;

pub const BASE_PATH: &str = "/todoitems";

pub fn router() -> Router<TodoStore> {
    Router::new()
        .route(BASE_PATH, get(list_items).post(create_item))
        .route("/todoitems/complete", get(list_complete))
        .route(
            "/todoitems/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

async fn list_items(State(store): State<TodoStore>) -> Json<Vec<TodoItemView>> {
    Json(store.list().await.into_iter().map(TodoItemView::from).collect())
}

async fn list_complete(State(store): State<TodoStore>) -> Json<Vec<TodoItemView>> {
    Json(
        store
            .list_complete()
            .await
            .into_iter()
            .map(TodoItemView::from)
            .collect(),
    )
}

async fn get_item(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItemView>, ApiError> {
    let item = store.get(id).await?;
    Ok(Json(item.into()))
}

async fn create_item(
    State(store): State<TodoStore>,
    payload: Result<Json<TodoItemInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload?;
    let item = store.create(input).await;
    let location = format!("{BASE_PATH}/{}", item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TodoItemView::from(item)),
    ))
}

async fn update_item(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
    payload: Result<Json<TodoItemInput>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(input) = payload?;
    store.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_item(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
