use std::sync::{Mutex, MutexGuard};

use serde::Serialize;

use crate::{ChangeColor, WidgetStatus};

/// UI bindings the fetcher writes into.
pub trait DisplaySink: Send + Sync {
    fn set_price_text(&self, text: &str);
    fn set_change_text(&self, text: &str);
    fn set_change_color(&self, color: ChangeColor);
    fn set_status(&self, status: WidgetStatus);
}

/// Snapshot of every display field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DisplaySnapshot {
    pub price_text: String,
    pub change_text: String,
    pub change_color: Option<ChangeColor>,
    pub status: WidgetStatus,
    /// Every status assigned, oldest first.
    #[serde(skip)]
    pub status_history: Vec<WidgetStatus>,
}

/// In-memory display, used by the CLI and tests.
#[derive(Debug, Default)]
pub struct DisplayState {
    inner: Mutex<DisplaySnapshot>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, DisplaySnapshot> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DisplaySink for DisplayState {
    fn set_price_text(&self, text: &str) {
        self.lock().price_text = text.to_owned();
    }

    fn set_change_text(&self, text: &str) {
        self.lock().change_text = text.to_owned();
    }

    fn set_change_color(&self, color: ChangeColor) {
        self.lock().change_color = Some(color);
    }

    fn set_status(&self, status: WidgetStatus) {
        let mut guard = self.lock();
        guard.status_history.push(status.clone());
        guard.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StatusPhase;

    #[test]
    fn records_status_transitions_in_order() {
        let display = DisplayState::new();
        display.set_status(WidgetStatus::loading());
        display.set_status(WidgetStatus::idle());

        let snapshot = display.snapshot();
        assert_eq!(snapshot.status.phase, StatusPhase::Idle);
        let phases: Vec<_> = snapshot.status_history.iter().map(|s| s.phase).collect();
        assert_eq!(phases, vec![StatusPhase::Loading, StatusPhase::Idle]);
    }

    #[test]
    fn snapshot_serializes_without_history() {
        let display = DisplayState::new();
        display.set_price_text("$1.00");
        display.set_change_color(ChangeColor::Negative);

        let value = serde_json::to_value(display.snapshot()).expect("serializable");
        assert_eq!(value["price_text"], "$1.00");
        assert_eq!(value["change_color"], "#ff0000");
        assert!(value.get("status_history").is_none());
    }
}
