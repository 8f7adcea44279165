use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::LOADING_MESSAGE;

/// Operational phase of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPhase {
    #[default]
    Idle,
    Loading,
    Error,
}

impl StatusPhase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Error => "error",
        }
    }
}

impl Display for StatusPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase plus the banner message rendered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WidgetStatus {
    pub phase: StatusPhase,
    pub message: String,
}

impl WidgetStatus {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading() -> Self {
        Self {
            phase: StatusPhase::Loading,
            message: String::from(LOADING_MESSAGE),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            phase: StatusPhase::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.phase == StatusPhase::Error
    }
}
