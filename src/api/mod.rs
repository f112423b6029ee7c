pub mod dto;
pub mod errors;
pub mod handlers;

use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::command_state::CommandState;
use handlers::ApiDoc;

/// Shared handler state, cloned per request by axum.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub command: CommandState,
}

pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .route("/", get(handlers::ingest_reading))
        .route("/data", get(handlers::get_readings))
        .route(
            "/control",
            get(handlers::get_command).post(handlers::set_command),
        )
        .with_state(state)
        .split_for_parts();

    router
        .route("/health", get(handlers::health))
        .route(
            "/api-docs/openapi.json",
            get(move || async move { axum::Json(api) }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
