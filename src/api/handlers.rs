use std::str::FromStr;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::OpenApi;

use super::{
    dto::{
        CommandResponse, IngestResponse, SensorReadingDto, SetCommandRequest, SetCommandResponse,
    },
    errors::AppError,
    AppState,
};
use crate::{command_state::BlindCommand, db::models::SensorReading};

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Raw ingest parameters. Kept as strings so type coercion happens in
/// the handler, where a failure maps to the error payload rather than
/// an extractor-level rejection.
#[derive(Debug, Deserialize)]
pub struct IngestParams {
    pub temp: Option<String>,
    pub hum: Option<String>,
    pub light: Option<String>,
    pub angle: Option<String>,
    pub opening: Option<String>,
}

fn coerce<T: FromStr>(name: &str, raw: Option<&str>) -> Result<T, AppError> {
    let raw = raw
        .ok_or_else(|| AppError::InvalidReading(format!("missing query parameter: {name}")))?;
    raw.trim()
        .parse()
        .map_err(|_| AppError::InvalidReading(format!("invalid value for {name}: {raw:?}")))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Ingest one reading from the blinds controller and echo the current
/// command so the device can act on it without a second request.
#[utoipa::path(
    get,
    path = "/",
    params(
        ("temp" = String, Query, description = "Temperature in degrees Celsius"),
        ("hum" = String, Query, description = "Relative humidity percentage"),
        ("light" = String, Query, description = "Raw light sensor level (integer)"),
        ("angle" = String, Query, description = "Servo angle in degrees (integer)"),
        ("opening" = String, Query, description = "Blind opening fraction"),
    ),
    responses(
        (status = 200, description = "Reading stored", body = IngestResponse),
        (status = 500, description = "Missing/malformed parameter or storage error"),
    ),
    tag = "readings"
)]
pub async fn ingest_reading(
    State(state): State<AppState>,
    Query(params): Query<IngestParams>,
) -> Result<Json<IngestResponse>, AppError> {
    let temperature: f64 = coerce("temp", params.temp.as_deref())?;
    let humidity: f64 = coerce("hum", params.hum.as_deref())?;
    let light: i64 = coerce("light", params.light.as_deref())?;
    let angle: i64 = coerce("angle", params.angle.as_deref())?;
    let opening: f64 = coerce("opening", params.opening.as_deref())?;

    sqlx::query(
        r#"
        INSERT INTO sensor_readings (temperature, humidity, light, angle, opening, timestamp)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(temperature)
    .bind(humidity)
    .bind(light)
    .bind(angle)
    .bind(opening)
    .bind(Utc::now())
    .execute(&state.pool)
    .await?;

    Ok(Json(IngestResponse {
        status: "success".to_owned(),
        message: format!("Data received: temp={temperature}, humidity={humidity}"),
        command: state.command.get().await,
    }))
}

/// Fetch the 50 most recent readings, newest first.
#[utoipa::path(
    get,
    path = "/data",
    responses(
        (status = 200, description = "Recent readings, newest first", body = Vec<SensorReadingDto>),
        (status = 500, description = "Internal server error"),
    ),
    tag = "readings"
)]
pub async fn get_readings(
    State(state): State<AppState>,
) -> Result<Json<Vec<SensorReadingDto>>, AppError> {
    let rows = sqlx::query_as::<_, SensorReading>(
        r#"
        SELECT id, temperature, humidity, light, angle, opening, timestamp
        FROM sensor_readings
        ORDER BY timestamp DESC
        LIMIT 50
        "#,
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Current desired blind command. Polled by the actuator.
#[utoipa::path(
    get,
    path = "/control",
    responses(
        (status = 200, description = "Current command", body = CommandResponse),
    ),
    tag = "control"
)]
pub async fn get_command(State(state): State<AppState>) -> Json<CommandResponse> {
    Json(CommandResponse {
        command: state.command.get().await,
    })
}

/// Overwrite the desired blind command. Last write wins; the value is
/// held in memory only and resets to `none` on restart.
#[utoipa::path(
    post,
    path = "/control",
    request_body = SetCommandRequest,
    responses(
        (status = 200, description = "Command updated", body = SetCommandResponse),
        (status = 400, description = "Missing or invalid command value"),
        (status = 500, description = "Unreadable request body"),
    ),
    tag = "control"
)]
pub async fn set_command(
    State(state): State<AppState>,
    body: Result<Json<SetCommandRequest>, JsonRejection>,
) -> Result<Json<SetCommandResponse>, AppError> {
    let Json(req) = body.map_err(|e| AppError::BadRequestBody(e.to_string()))?;

    let command = req
        .command
        .as_deref()
        .and_then(|raw| raw.parse::<BlindCommand>().ok())
        .ok_or(AppError::InvalidCommand)?;

    state.command.set(command).await;
    tracing::info!(command = %command, "Blind command updated");

    Ok(Json(SetCommandResponse {
        command,
        status: "success".to_owned(),
    }))
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Returns `200 OK` with `{"status":"ok"}` when the server is running.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "system"
)]
pub async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// OpenAPI spec
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    paths(ingest_reading, get_readings, get_command, set_command, health),
    components(schemas(
        SensorReadingDto,
        IngestResponse,
        CommandResponse,
        SetCommandRequest,
        SetCommandResponse,
        BlindCommand,
    )),
    tags(
        (name = "readings", description = "Sensor reading endpoints"),
        (name = "control",  description = "Blind command endpoints"),
        (name = "system",   description = "System endpoints"),
    ),
    info(
        title = "Smart Blinds Service API",
        version = "0.1.0",
        description = "REST API for the smart blinds controller and dashboard"
    )
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
