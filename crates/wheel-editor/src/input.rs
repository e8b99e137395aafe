//! Input abstraction layer.
//!
//! Normalizes button clicks, textarea edits, and display-frame callbacks
//! into one `WheelInput` enum consumed by the controller, and the
//! controller's requests back to the host into `WheelEffect`.

use wheel_core::SpinResult;

/// A normalized UI event.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelInput {
    /// Spin button pressed. `text` is the textarea content at click time.
    SpinPressed { text: String, now_ms: f64 },

    /// Reset button pressed.
    ResetPressed { text: String },

    /// Textarea content changed.
    TextEdited { text: String },

    /// Display frame callback (`requestAnimationFrame` timestamp).
    Frame { now_ms: f64 },
}

/// Something the host must do after an input is handled.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelEffect {
    /// Show (`Some`) or hide (`None`) the error region.
    ErrorChanged(Option<String>),

    /// Schedule another `Frame` input on the next display refresh.
    RequestFrame,

    /// A spin finished: prepend to the history list, show the winner
    /// popup, and start the confetti.
    Landed(SpinResult),
}

impl WheelInput {
    pub fn spin(text: impl Into<String>, now_ms: f64) -> Self {
        Self::SpinPressed {
            text: text.into(),
            now_ms,
        }
    }

    pub fn reset(text: impl Into<String>) -> Self {
        Self::ResetPressed { text: text.into() }
    }

    pub fn edit(text: impl Into<String>) -> Self {
        Self::TextEdited { text: text.into() }
    }

    pub fn frame(now_ms: f64) -> Self {
        Self::Frame { now_ms }
    }
}
