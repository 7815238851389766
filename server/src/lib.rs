//! HTTP server for the todo item store.
//!
//! # Design
//! A single [`TodoStore`] is created by the caller and handed to [`app`],
//! which installs it as router state. Two route groups share that store:
//! the minimal surface under `/todoitems` and the controller surface under
//! `/api/todoitems`.

pub mod config;
pub mod error;
pub mod routes;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use todo_store::TodoStore;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;

pub fn app(store: TodoStore) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::todo_items::router())
        .merge(routes::controller::router())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: TodoStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}
