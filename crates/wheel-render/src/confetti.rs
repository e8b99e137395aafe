//! Confetti burst shown after a spin.
//!
//! A fixed number of dots fall from above the viewport with a sinusoidal
//! sideways drift. The burst lives for a fixed number of frames; the host
//! removes its overlay once [`Confetti::tick`] returns `false`.

use crate::palette::{HUES, pastel};
use crate::surface::DrawSurface;
use rand::Rng;
use std::f64::consts::TAU;
use wheel_core::WheelError;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Pixels fallen per frame.
    pub speed: f64,
    pub color: String,
}

#[derive(Debug, Clone)]
pub struct Confetti {
    particles: Vec<Particle>,
    frame: u32,
    max_frames: u32,
}

impl Confetti {
    /// Scatter `count` particles above a `width × height` viewport.
    pub fn new<R: Rng + ?Sized>(
        count: usize,
        max_frames: u32,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.r#gen::<f64>() * width,
                y: -20.0 - rng.r#gen::<f64>() * height,
                radius: 3.0 + rng.r#gen::<f64>() * 4.0,
                speed: 2.0 + rng.r#gen::<f64>() * 3.0,
                color: pastel(rng.gen_range(0..HUES.len())),
            })
            .collect();
        Self {
            particles,
            frame: 0,
            max_frames,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_finished(&self) -> bool {
        self.frame >= self.max_frames
    }

    /// Move every particle one frame and draw it. Returns whether another
    /// frame should be scheduled.
    pub fn tick(&mut self, surface: &mut dyn DrawSurface) -> Result<bool, WheelError> {
        if self.is_finished() {
            return Ok(false);
        }
        self.frame += 1;
        surface.clear();
        let t = self.frame as f64;
        for p in &mut self.particles {
            p.y += p.speed;
            p.x += ((p.y + t) / 20.0).sin();
            surface.set_fill_style(&p.color);
            surface.begin_path();
            surface.arc(p.x, p.y, p.radius, 0.0, TAU)?;
            surface.fill();
        }
        Ok(!self.is_finished())
    }
}
