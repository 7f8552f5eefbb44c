use std::fmt;

use tracing::Level;

use super::MetaReducer;
use crate::dispatch::Action;

/// Meta-reducer that traces every transition.
///
/// Each dispatch opens a `store` span and records three events inside it:
/// `Previous state`, `Action` and `Next state`.
#[derive(Debug, Clone)]
pub struct Logger {
    label: String,
    level: Level,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            label: "Store".to_string(),
            level: Level::DEBUG,
        }
    }

    /// Name shown on the span grouping each dispatch.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Level of the three records. Defaults to `DEBUG`.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for [`Logger::new`].
pub fn logger() -> Logger {
    Logger::new()
}

impl<S: fmt::Debug> MetaReducer<S> for Logger {
    fn on_dispatch(&self, previous: &S, action: &Action<'_>, next: &S) {
        let span = tracing::info_span!("store", label = %self.label, action = action.kind());
        let _guard = span.enter();
        record(self.level, "Previous state", previous);
        record(self.level, "Action", action);
        record(self.level, "Next state", next);
    }
}

// Event levels are part of each callsite, so pick the callsite by level.
fn record(level: Level, label: &'static str, value: &dyn fmt::Debug) {
    if level == Level::ERROR {
        tracing::error!(value = ?value, "{label}");
    } else if level == Level::WARN {
        tracing::warn!(value = ?value, "{label}");
    } else if level == Level::INFO {
        tracing::info!(value = ?value, "{label}");
    } else if level == Level::DEBUG {
        tracing::debug!(value = ?value, "{label}");
    } else {
        tracing::trace!(value = ?value, "{label}");
    }
}
