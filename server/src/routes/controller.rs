//! Controller-style surface under `/api/todoitems`.
//!
//! Differs from [`super::todo_items`] in two ways: there is no completed-items
//! listing, and `PUT` requires the body's `id` to equal the path id.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use todo_store::{TodoItemInput, TodoItemView, TodoStore};

use crate::error::ApiError;

pub const BASE_PATH: &str = "/api/todoitems";

pub fn router() -> Router<TodoStore> {
    Router::new()
        .route(BASE_PATH, get(list_items).post(create_item))
        .route(
            "/api/todoitems/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

async fn list_items(State(store): State<TodoStore>) -> Json<Vec<TodoItemView>> {
    Json(store.list().await.iter().map(TodoItemView::from).collect())
}

async fn get_item(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItemView>, ApiError> {
    Ok(Json(TodoItemView::from(store.get(id).await?)))
}

async fn create_item(
    State(store): State<TodoStore>,
    payload: Result<Json<TodoItemInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload?;
    let view = TodoItemView::from(store.create(input).await);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("{BASE_PATH}/{}", view.id))],
        Json(view),
    ))
}

async fn update_item(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
    payload: Result<Json<TodoItemInput>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(input) = payload?;
    store.update_matching(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_item(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
