//! Spin geometry and animation.
//!
//! Angles are in radians, measured clockwise from 3 o'clock in the wheel's
//! own frame. Slice `i` covers `[i·slice, (i+1)·slice)` at rotation 0. The
//! pointer sits at 12 o'clock, i.e. [`POINTER_ANGLE`] in that frame.
//!
//! A spin is planned up front ([`SpinPlan`]) and then played back by
//! [`SpinAnimation`], which is advanced with explicit timestamps so tests
//! can drive it without a real frame loop. The landing slice is always
//! recomputed from the final rotation (see [`index_under_pointer`]), never
//! taken from the plan.

use crate::config::WheelConfig;
use crate::error::WheelError;
use rand::Rng;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Fixed pointer position in the unrotated wheel frame.
pub const POINTER_ANGLE: f64 = -FRAC_PI_2;

// ─── Geometry ─────────────────────────────────────────────────────────────

/// Angular width of one slice. Zero entries are treated as one.
pub fn slice_angle(count: usize) -> f64 {
    TAU / count.max(1) as f64
}

/// Point inside slice `index` where the pointer should come to rest.
pub fn target_angle(index: usize, slice: f64, offset: f64) -> f64 {
    slice * index as f64 + slice / 2.0 + offset
}

/// Total rotation that brings `target` under the pointer after `extra_spins` turns.
pub fn final_rotation(extra_spins: u32, target: f64) -> f64 {
    extra_spins as f64 * TAU + (POINTER_ANGLE - target)
}

/// Slice index under the pointer when the wheel is drawn at `rotation`.
pub fn index_under_pointer(rotation: f64, count: usize) -> usize {
    let count = count.max(1);
    let on_wheel = (POINTER_ANGLE - rotation).rem_euclid(TAU);
    (on_wheel / slice_angle(count)).floor() as usize % count
}

/// Cubic ease-out: fast start, gentle stop. `t` is clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

// ─── Plan ─────────────────────────────────────────────────────────────────

/// Everything decided before the wheel starts moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub target_index: usize,
    pub extra_spins: u32,
    /// Offset from the slice centre, in radians.
    pub offset: f64,
    pub final_rotation: f64,
}

impl SpinPlan {
    pub fn new(count: usize, target_index: usize, extra_spins: u32, offset: f64) -> Self {
        let slice = slice_angle(count);
        let target = target_angle(target_index, slice, offset);
        Self {
            target_index,
            extra_spins,
            offset,
            final_rotation: final_rotation(extra_spins, target),
        }
    }

    /// Uniform target, uniform turn count, and a landing offset within
    /// `±landing_spread` of the slice centre.
    pub fn random<R: Rng + ?Sized>(count: usize, config: &WheelConfig, rng: &mut R) -> Self {
        let slice = slice_angle(count);
        let target_index = rng.gen_range(0..count.max(1));
        let (lo, hi) = (config.min_extra_spins, config.max_extra_spins);
        let extra_spins = rng.gen_range(lo.min(hi)..=hi.max(lo));
        let spread = config.landing_spread * slice;
        let offset = if spread > 0.0 {
            rng.gen_range(-spread..=spread)
        } else {
            0.0
        };
        Self::new(count, target_index, extra_spins, offset)
    }
}

// ─── Animation ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum SpinPhase {
    Idle,
    Spinning {
        start_ms: f64,
        plan: SpinPlan,
        count: usize,
    },
    /// Final frame reached; waiting for the owner to collect the result.
    Done {
        rotation: f64,
        landed_index: usize,
    },
}

/// Output of one animation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinFrame {
    pub rotation: f64,
    /// Set on the step that completes the spin.
    pub landed_index: Option<usize>,
}

/// Time-driven playback of a [`SpinPlan`].
#[derive(Debug, Clone)]
pub struct SpinAnimation {
    phase: SpinPhase,
    duration_ms: f64,
}

impl SpinAnimation {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            phase: SpinPhase::Idle,
            duration_ms: duration_ms.max(1) as f64,
        }
    }

    pub fn phase(&self) -> &SpinPhase {
        &self.phase
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning { .. })
    }

    /// Begin playing `plan` over `count` slices. Ignored unless idle.
    pub fn start(&mut self, start_ms: f64, plan: SpinPlan, count: usize) -> bool {
        if !matches!(self.phase, SpinPhase::Idle) {
            return false;
        }
        self.phase = SpinPhase::Spinning {
            start_ms,
            plan,
            count,
        };
        true
    }

    /// Step the animation to `now_ms`.
    ///
    /// While spinning, returns the eased rotation; the step where elapsed
    /// time reaches the duration lands exactly on the plan's final rotation
    /// and reports the slice under the pointer. Idle and done phases keep
    /// reporting their rotation without changing.
    pub fn advance(&mut self, now_ms: f64) -> Result<SpinFrame, WheelError> {
        if !now_ms.is_finite() {
            return Err(WheelError::InvalidClock(now_ms));
        }
        match self.phase {
            SpinPhase::Idle => Ok(SpinFrame {
                rotation: 0.0,
                landed_index: None,
            }),
            SpinPhase::Done { rotation, .. } => Ok(SpinFrame {
                rotation,
                landed_index: None,
            }),
            SpinPhase::Spinning {
                start_ms,
                plan,
                count,
            } => {
                let t = ((now_ms - start_ms) / self.duration_ms).clamp(0.0, 1.0);
                if t < 1.0 {
                    let rotation = ease_out_cubic(t) * plan.final_rotation;
                    log::trace!("spin frame t={t:.3} rotation={rotation:.4}");
                    return Ok(SpinFrame {
                        rotation,
                        landed_index: None,
                    });
                }
                let rotation = plan.final_rotation;
                let landed_index = index_under_pointer(rotation, count);
                if landed_index != plan.target_index {
                    log::warn!(
                        "landed on slice {landed_index}, planned {}",
                        plan.target_index
                    );
                }
                self.phase = SpinPhase::Done {
                    rotation,
                    landed_index,
                };
                Ok(SpinFrame {
                    rotation,
                    landed_index: Some(landed_index),
                })
            }
        }
    }

    /// Return to idle. Safe from any phase.
    pub fn finish(&mut self) {
        self.phase = SpinPhase::Idle;
    }
}
