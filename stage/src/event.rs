use serde::{Deserialize, Serialize};
use std::fmt;

/// Something that happened during a show.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data")]
pub enum StageEvent {
    Start { timestamp: u64 },
    End { duration_ms: u64 },
    Error { message: String },
}

impl StageEvent {
    /// One line summary for the console.
    pub fn describe(&self) -> String {
        match self {
            StageEvent::Start { timestamp } => format!("Started at: {timestamp}"),
            StageEvent::End { duration_ms } => format!("Duration: {duration_ms}ms"),
            StageEvent::Error { message } => format!("Error: {message}"),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StageEvent::Error { .. })
    }
}

impl fmt::Display for StageEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
