use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::command_state::BlindCommand;

/// Projection served by `GET /data`. `angle` and `opening` are stored
/// but intentionally not exposed here; the dashboard only charts
/// climate and light.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SensorReadingDto {
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: f64,
    pub light: i64,
    pub timestamp: DateTime<Utc>,
}

impl From<crate::db::models::SensorReading> for SensorReadingDto {
    fn from(r: crate::db::models::SensorReading) -> Self {
        Self {
            temperature: r.temperature,
            humidity: r.humidity,
            light: r.light,
            timestamp: r.timestamp,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IngestResponse {
    pub status: String,
    pub message: String,
    /// Current desired blind command, echoed so the controller can
    /// act on it without a second request.
    pub command: BlindCommand,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommandResponse {
    pub command: BlindCommand,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetCommandRequest {
    pub command: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetCommandResponse {
    pub command: BlindCommand,
    pub status: String,
}
