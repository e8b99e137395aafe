//! Error taxonomy for the wheel.
//!
//! Only [`WheelError::TooFewEntries`] is meant to reach the user verbatim.
//! Storage errors are logged and swallowed by [`crate::EntryStore`]; every
//! other variant is collapsed into a generic message by the controller.

use thiserror::Error;

/// Message shown in the error region when a spin is refused for lack of entries.
pub const TOO_FEW_ENTRIES_MESSAGE: &str =
    "Please enter at least two entries (comma or newline separated).";

/// Message shown in the error region for any unexpected spin failure.
pub const UNEXPECTED_SPIN_MESSAGE: &str = "Unexpected error while spinning.";

#[derive(Debug, Error)]
pub enum WheelError {
    #[error("need at least {required} entries to spin, found {found}")]
    TooFewEntries { found: usize, required: usize },

    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("frame timestamp is not finite: {0}")]
    InvalidClock(f64),

    #[error("landed on slice {index} of a {count}-slice wheel")]
    LandedOutOfRange { index: usize, count: usize },

    #[error("invalid wheel config: {0}")]
    InvalidConfig(String),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("render failed: {0}")]
    Render(String),
}

impl WheelError {
    /// `true` for errors the user can fix by editing the entries.
    pub fn is_validation(&self) -> bool {
        matches!(self, WheelError::TooFewEntries { .. })
    }

    /// Text for the visible error region.
    pub fn user_message(&self) -> &'static str {
        if self.is_validation() {
            TOO_FEW_ENTRIES_MESSAGE
        } else {
            UNEXPECTED_SPIN_MESSAGE
        }
    }
}
