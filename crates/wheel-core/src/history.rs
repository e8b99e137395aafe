//! Session-scoped spin history. Never persisted.

use serde::Serialize;
use std::collections::VecDeque;

/// One finished spin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpinResult {
    pub winner: String,
    pub timestamp: String,
}

impl SpinResult {
    pub fn new(winner: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            winner: winner.into(),
            timestamp: timestamp.into(),
        }
    }

    /// `"<timestamp>: <winner>"`, as shown in the history list.
    pub fn display_line(&self) -> String {
        format!("{}: {}", self.timestamp, self.winner)
    }
}

/// Results, most recent first.
#[derive(Debug, Default, Clone)]
pub struct History {
    results: VecDeque<SpinResult>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: SpinResult) {
        self.results.push_front(result);
    }

    pub fn latest(&self) -> Option<&SpinResult> {
        self.results.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpinResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        self.results.iter().map(SpinResult::display_line).collect()
    }
}
