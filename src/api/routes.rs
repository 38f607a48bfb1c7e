//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::config::Config;
use crate::service::{TaskPatch, TaskService};
use crate::store::TaskStore;
use crate::task::MAX_DESCRIPTION_CHARS;

use super::error::ApiError;
use super::types::{
    CreateTaskRequest, HealthResponse, ListTasksQuery, TaskDto, UpdateTaskRequest,
};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub service: TaskService,
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let store = Arc::new(TaskStore::new());
    let service = TaskService::new(store);

    let state = Arc::new(AppState {
        config: config.clone(),
        service,
    });

    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Build the application router.
///
/// `/api/tasks/clear` is a static segment beside `/api/tasks/:id`; the
/// router gives it precedence. Anything outside `/api` falls through to the
/// static single-page client.
fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/clear", post(clear_tasks))
        .route(
            "/api/tasks/:id",
            get(get_task).put(update_task).delete(delete_task),
        )
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the CORS layer from the configured frontend origins.
fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allowed_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List tasks, optionally filtered by completion status.
async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListTasksQuery>,
) -> Json<Vec<TaskDto>> {
    let tasks = state.service.list_tasks(query.status.as_deref()).await;
    Json(tasks.into_iter().map(TaskDto::from).collect())
}

/// Get a single task.
async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskDto>, ApiError> {
    state
        .service
        .get_task(id)
        .await
        .map(|task| Json(TaskDto::from(task)))
        .ok_or(ApiError::TaskNotFound(id))
}

/// Create a new task.
async fn create_task(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(body_rejection)?;
    validate_description(&req.description)?;

    let task = state.service.create_task(&req.description).await;
    let location = format!("/api/tasks/{}", task.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TaskDto::from(task)),
    ))
}

/// Partially update a task.
///
/// Checks run in order: malformed body, empty patch, invalid description,
/// unknown id.
async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<TaskDto>, ApiError> {
    let Json(req) = payload.map_err(body_rejection)?;

    if req.description.is_none() && req.is_completed.is_none() {
        return Err(ApiError::validation(
            "body",
            "at least one field must be provided",
        ));
    }
    if let Some(description) = &req.description {
        validate_description(description)?;
    }

    let patch = TaskPatch {
        description: req.description,
        is_completed: req.is_completed,
    };
    state
        .service
        .update_task(id, patch)
        .await
        .map(|task| Json(TaskDto::from(task)))
        .ok_or(ApiError::TaskNotFound(id))
}

/// Delete a task.
async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.service.delete_task(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::TaskNotFound(id))
    }
}

/// Remove all tasks (test/reset utility).
///
/// Answers 404 when disabled by configuration, leaking nothing about the
/// endpoint's existence.
async fn clear_tasks(State(state): State<Arc<AppState>>) -> StatusCode {
    if !state.config.enable_clear_endpoint {
        return StatusCode::NOT_FOUND;
    }
    state.service.clear_all().await;
    StatusCode::NO_CONTENT
}

/// Check a supplied description against the boundary rules: non-empty and
/// within the length limit after trimming.
fn validate_description(raw: &str) -> Result<(), ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(
            "description",
            "must not be empty or whitespace-only",
        ));
    }
    if trimmed.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(ApiError::validation(
            "description",
            format!("must be at most {} characters", MAX_DESCRIPTION_CHARS),
        ));
    }
    Ok(())
}

fn body_rejection(rejection: JsonRejection) -> ApiError {
    ApiError::validation("body", rejection.body_text())
}
