use std::{fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use utoipa::ToSchema;

/// Desired blind actuation state, polled by the actuator over HTTP.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum BlindCommand {
    Open,
    Close,
    #[default]
    None,
}

impl FromStr for BlindCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "open" => Ok(Self::Open),
            "close" => Ok(Self::Close),
            "none" => Ok(Self::None),
            other => Err(anyhow::anyhow!("unknown command: {other:?}")),
        }
    }
}

impl fmt::Display for BlindCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BlindCommand::Open => "open",
            BlindCommand::Close => "close",
            BlindCommand::None => "none",
        };
        f.write_str(s)
    }
}

/// Process-wide holder of the current [`BlindCommand`].
///
/// Not persisted: resets to `none` on restart. Wrapped in `Arc` so it
/// can be cheaply cloned into the router state and shared across
/// worker threads; the `RwLock` serializes the last-write-wins
/// overwrite against concurrent polls.
#[derive(Clone, Default)]
pub struct CommandState {
    inner: Arc<RwLock<BlindCommand>>,
}

impl CommandState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current command.
    pub async fn get(&self) -> BlindCommand {
        *self.inner.read().await
    }

    /// Overwrite the current command. Last write wins.
    pub async fn set(&self, command: BlindCommand) {
        *self.inner.write().await = command;
    }
}
