use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One persisted sample from the blinds controller.
///
/// Rows are append-only: there is no update or delete path, and `id`
/// is assigned monotonically by SQLite.
#[derive(Debug, Clone, FromRow)]
pub struct SensorReading {
    pub id: i64,
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: f64,
    /// Raw light sensor level
    pub light: i64,
    /// Servo angle in degrees
    pub angle: i64,
    /// Blind opening fraction, 0.0 closed to 1.0 open
    pub opening: f64,
    pub timestamp: DateTime<Utc>,
}
