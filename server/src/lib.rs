//! HTTP transport for the todo service.
//!
//! # Design
//! Handlers do no work of their own: each extracts its parameters, makes one
//! call into the shared `TodoService` and serializes the envelope it gets
//! back. Every envelope, not-found included, goes out as `200 OK`; clients
//! branch on `success`. Malformed ids and bodies are rejected by the
//! extractors before a handler runs.

pub mod config;
pub mod error;
pub mod logging;

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use todo_core::{
    ApiResponse, CreateTodo, ReplaceTodo, SearchQuery, TodoItem, TodoService, UpdateStatus,
};

pub use config::{ConfigError, ServerConfig};
pub use error::ServerError;

pub type SharedService = Arc<TodoService>;

/// Build the router. `/todos/search` is registered ahead of `/todos/{id}`;
/// axum also ranks the static segment above the capture, so `search` is
/// never read as an id.
pub fn app(service: SharedService, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/search", get(search_todos))
        .route(
            "/todos/{id}",
            get(get_todo).put(replace_todo).delete(delete_todo),
        )
        .route("/todos/{id}/status", patch(update_status))
        .with_state(service)
        .layer(TraceLayer::new_for_http());

    if config.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Serve until Ctrl+C or SIGTERM.
pub async fn run(
    listener: TcpListener,
    service: SharedService,
    config: &ServerConfig,
) -> Result<(), std::io::Error> {
    serve(listener, service, config, shutdown_signal()).await
}

/// Serve until `shutdown` resolves.
pub async fn serve<S>(
    listener: TcpListener,
    service: SharedService,
    config: &ServerConfig,
    shutdown: S,
) -> Result<(), std::io::Error>
where
    S: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(service, config))
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

async fn health(State(service): State<SharedService>) -> Json<ApiResponse<()>> {
    Json(service.health())
}

async fn list_todos(State(service): State<SharedService>) -> Json<ApiResponse<Vec<TodoItem>>> {
    Json(service.list())
}

async fn create_todo(
    State(service): State<SharedService>,
    Json(input): Json<CreateTodo>,
) -> Json<ApiResponse<Vec<TodoItem>>> {
    Json(service.create(input))
}

async fn search_todos(
    State(service): State<SharedService>,
    Query(query): Query<SearchQuery>,
) -> Json<ApiResponse<Vec<TodoItem>>> {
    Json(service.search(&query))
}

async fn get_todo(
    State(service): State<SharedService>,
    Path(id): Path<u64>,
) -> Json<ApiResponse<TodoItem>> {
    Json(service.get(id))
}

async fn delete_todo(
    State(service): State<SharedService>,
    Path(id): Path<u64>,
) -> Json<ApiResponse<()>> {
    Json(service.delete(id))
}

async fn update_status(
    State(service): State<SharedService>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateStatus>,
) -> Json<ApiResponse<TodoItem>> {
    Json(service.update_status(id, input))
}

async fn replace_todo(
    State(service): State<SharedService>,
    Path(id): Path<u64>,
    Json(input): Json<ReplaceTodo>,
) -> Json<ApiResponse<TodoItem>> {
    Json(service.replace(id, input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_body_is_a_full_replace() {
        let input: ReplaceTodo = serde_json::from_str(r#"{"todo":"Only text"}"#).unwrap();
        assert_eq!(input.todo, "Only text");
        assert_eq!(input.priority, "");
        assert!(!input.is_done);
    }

    #[test]
    fn search_query_parses_from_url_encoding() {
        let uri: axum::http::Uri = "/todos/search?todo=morning%20coffee&priority=LOW"
            .parse()
            .unwrap();
        let Query(query) = Query::<SearchQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.todo.as_deref(), Some("morning coffee"));
        assert_eq!(query.priority.as_deref(), Some("LOW"));
    }
}
