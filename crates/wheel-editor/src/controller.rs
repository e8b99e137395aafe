//! Wheel session controller.
//!
//! One `WheelController` per widget. It owns the spin state, the labels on
//! screen, the rotation baseline, the history, and the entry store, and it
//! is the outermost error boundary: whatever goes wrong while spinning ends
//! with the spin cleared and a message in the error region. All drawing
//! goes through the `DrawSurface` handed to [`WheelController::handle`].

use crate::clock::Clock;
use crate::input::{WheelEffect, WheelInput};
use rand::Rng;
use wheel_core::error::UNEXPECTED_SPIN_MESSAGE;
use wheel_core::{
    EntryStore, History, KeyValueStore, SpinAnimation, SpinPlan, SpinResult, WheelConfig,
    WheelError, parse_entries, shuffle_entries,
};
use wheel_render::{Confetti, DrawSurface, WheelTheme, draw_wheel};

pub struct WheelController<S, R> {
    config: WheelConfig,
    theme: WheelTheme,
    store: EntryStore<S>,
    rng: R,
    clock: Box<dyn Clock>,
    /// Labels currently on the wheel, in slice order.
    entries: Vec<String>,
    animation: SpinAnimation,
    rotation: f64,
    last_entry_count: usize,
    history: History,
    error: Option<String>,
}

impl<S: KeyValueStore, R: Rng> WheelController<S, R> {
    pub fn new(config: WheelConfig, store: S, rng: R, clock: Box<dyn Clock>) -> Self {
        let theme = WheelTheme::default().with_max_label_chars(config.max_label_chars);
        let store = EntryStore::new(store, config.storage_key.clone());
        let animation = SpinAnimation::new(config.spin_duration_ms);
        Self {
            config,
            theme,
            store,
            rng,
            clock,
            entries: Vec::new(),
            animation,
            rotation: 0.0,
            last_entry_count: 0,
            history: History::new(),
            error: None,
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn is_spinning(&self) -> bool {
        self.animation.is_active()
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn last_entry_count(&self) -> usize {
        self.last_entry_count
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn store(&self) -> &EntryStore<S> {
        &self.store
    }

    // ─── Lifecycle ───────────────────────────────────────────────────────

    /// Restore the previous session's entries and draw the idle wheel.
    ///
    /// Returns the text to place in the entry field, if anything was saved.
    pub fn startup(
        &mut self,
        initial_text: &str,
        surface: &mut dyn DrawSurface,
    ) -> Option<String> {
        let saved = self.store.load();
        let restored = (!saved.is_empty()).then(|| saved.join(", "));
        let text = restored.as_deref().unwrap_or(initial_text);
        self.entries = parse_entries(text);
        self.last_entry_count = self.entries.len();
        self.rotation = 0.0;
        if let Err(e) = self.redraw(surface) {
            log::error!("Initial draw failed: {e}");
        }
        restored
    }

    /// Apply one UI event and report what the host should do next.
    pub fn handle(&mut self, input: WheelInput, surface: &mut dyn DrawSurface) -> Vec<WheelEffect> {
        match input {
            WheelInput::SpinPressed { text, now_ms } => match self.spin(&text, now_ms, surface) {
                Ok(true) => vec![WheelEffect::ErrorChanged(None), WheelEffect::RequestFrame],
                Ok(false) => Vec::new(),
                Err(e) if e.is_validation() => {
                    log::debug!("Spin refused: {e}");
                    self.error = Some(e.user_message().to_string());
                    vec![WheelEffect::ErrorChanged(self.error.clone())]
                }
                Err(e) => self.abort_spin(e, surface),
            },
            WheelInput::Frame { now_ms } => match self.advance(now_ms, surface) {
                Ok(Some(result)) => vec![WheelEffect::Landed(result)],
                Ok(None) if self.is_spinning() => vec![WheelEffect::RequestFrame],
                Ok(None) => Vec::new(),
                Err(e) => self.abort_spin(e, surface),
            },
            WheelInput::ResetPressed { text } => {
                if let Err(e) = self.reset(&text, surface) {
                    log::error!("Reset failed: {e}");
                }
                Vec::new()
            }
            WheelInput::TextEdited { text } => {
                if let Err(e) = self.edit(&text, surface) {
                    log::error!("Redraw after edit failed: {e}");
                }
                Vec::new()
            }
        }
    }

    /// Build a confetti burst sized to the host viewport.
    pub fn confetti(&mut self, width: f64, height: f64) -> Confetti {
        Confetti::new(
            self.config.confetti_particles,
            self.config.confetti_frames,
            width,
            height,
            &mut self.rng,
        )
    }

    // ─── Operations ──────────────────────────────────────────────────────

    /// Start a spin. `Ok(false)` when one is already running.
    pub fn spin(
        &mut self,
        text: &str,
        now_ms: f64,
        surface: &mut dyn DrawSurface,
    ) -> Result<bool, WheelError> {
        if self.is_spinning() {
            log::debug!("Spin ignored: already spinning");
            return Ok(false);
        }
        if !now_ms.is_finite() {
            return Err(WheelError::InvalidClock(now_ms));
        }

        let mut entries = parse_entries(text);
        if entries.len() < self.config.min_entries {
            return Err(WheelError::TooFewEntries {
                found: entries.len(),
                required: self.config.min_entries,
            });
        }
        shuffle_entries(&mut entries, &mut self.rng);
        self.store.save(&entries);

        self.error = None;
        self.rotation = 0.0;
        self.last_entry_count = entries.len();

        let plan = SpinPlan::random(entries.len(), &self.config, &mut self.rng);
        log::debug!(
            "Spinning {} entries toward slice {} ({} turns)",
            entries.len(),
            plan.target_index,
            plan.extra_spins
        );
        self.animation.start(now_ms, plan, entries.len());
        self.entries = entries;
        self.redraw(surface)?;
        Ok(true)
    }

    /// Step an active spin to `now_ms`. Returns the result on the landing frame.
    pub fn advance(
        &mut self,
        now_ms: f64,
        surface: &mut dyn DrawSurface,
    ) -> Result<Option<SpinResult>, WheelError> {
        if !self.is_spinning() {
            return Ok(None);
        }
        let frame = self.animation.advance(now_ms)?;
        self.rotation = frame.rotation;

        let Some(index) = frame.landed_index else {
            self.redraw(surface)?;
            return Ok(None);
        };
        let winner = self
            .entries
            .get(index)
            .cloned()
            .ok_or(WheelError::LandedOutOfRange {
                index,
                count: self.entries.len(),
            })?;

        // The result is kept even if the landing draws fail.
        let result = SpinResult::new(winner, self.clock.timestamp());
        log::info!("Spin result {}", result.display_line());
        self.history.record(result.clone());

        self.redraw(surface)?;
        self.animation.finish();
        self.rotation = 0.0;
        self.redraw(surface)?;
        Ok(Some(result))
    }

    /// Zero the rotation and redraw from `text`, without shuffling.
    /// Ignored while a spin is running.
    pub fn reset(&mut self, text: &str, surface: &mut dyn DrawSurface) -> Result<(), WheelError> {
        if self.is_spinning() {
            log::debug!("Reset ignored: spin in progress");
            return Ok(());
        }
        self.rotation = 0.0;
        self.entries = parse_entries(text);
        self.last_entry_count = self.entries.len();
        self.redraw(surface)
    }

    /// Live edit of the entry text. While idle the wheel follows the text,
    /// dropping back to rotation 0 whenever the slice count changes. While
    /// spinning the edit is left for the next idle redraw.
    pub fn edit(&mut self, text: &str, surface: &mut dyn DrawSurface) -> Result<(), WheelError> {
        if self.is_spinning() {
            return Ok(());
        }
        let parsed = parse_entries(text);
        if parsed.len() != self.last_entry_count {
            self.rotation = 0.0;
            self.last_entry_count = parsed.len();
        }
        self.entries = parsed;
        self.redraw(surface)
    }

    /// Draw the current labels at the current rotation.
    pub fn redraw(&self, surface: &mut dyn DrawSurface) -> Result<(), WheelError> {
        draw_wheel(surface, &self.entries, self.rotation, &self.theme)
    }

    fn abort_spin(&mut self, err: WheelError, surface: &mut dyn DrawSurface) -> Vec<WheelEffect> {
        log::error!("Spin failed: {err}");
        self.animation.finish();
        self.rotation = 0.0;
        self.error = Some(UNEXPECTED_SPIN_MESSAGE.to_string());
        if let Err(e) = self.redraw(surface) {
            log::warn!("Idle redraw after failed spin also failed: {e}");
        }
        vec![WheelEffect::ErrorChanged(self.error.clone())]
    }
}
