//! Wheel painter.
//!
//! Draws one pie slice per label plus the centre hub. The whole wheel is
//! rotated as a unit, so slice `i` spans `rotation + [i·slice, (i+1)·slice]`
//! on screen. Output depends only on the labels, the rotation, the theme,
//! and the surface size.

use crate::palette::pastel;
use crate::surface::DrawSurface;
use std::f64::consts::TAU;
use wheel_core::WheelError;
use wheel_core::spin::slice_angle;

const ELLIPSIS: char = '\u{2026}';

/// Fixed colors and metrics for the wheel.
pub struct WheelTheme {
    pub slice_border: &'static str,
    pub slice_border_width: f64,
    pub label_color: &'static str,
    pub label_font: &'static str,
    /// Gap between the label's right edge and the rim.
    pub label_inset: f64,
    /// Vertical nudge so the label sits centred on the slice's mid-line.
    pub label_baseline: f64,
    pub hub_fill: &'static str,
    pub hub_border: &'static str,
    pub hub_border_width: f64,
    pub hub_radius: f64,
    /// Space left between the rim and the canvas edge.
    pub rim_margin: f64,
    pub max_label_chars: usize,
}

impl Default for WheelTheme {
    /// Bakery pastel theme.
    fn default() -> Self {
        Self {
            slice_border: "#ffffff",
            slice_border_width: 4.0,
            label_color: "#4a2a10",
            label_font: "700 16px Fredoka, system-ui",
            label_inset: 10.0,
            label_baseline: 6.0,
            hub_fill: "#ff86b0",
            hub_border: "#ffffff",
            hub_border_width: 6.0,
            hub_radius: 32.0,
            rim_margin: 16.0,
            max_label_chars: 22,
        }
    }
}

impl WheelTheme {
    pub fn with_max_label_chars(mut self, max: usize) -> Self {
        self.max_label_chars = max;
        self
    }
}

/// Cut `label` to `max_chars` characters, the last one being an ellipsis.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let mut cut: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push(ELLIPSIS);
    cut
}

/// Draw the wheel at `rotation` radians.
pub fn draw_wheel(
    surface: &mut dyn DrawSurface,
    labels: &[String],
    rotation: f64,
    theme: &WheelTheme,
) -> Result<(), WheelError> {
    let (width, height) = (surface.width(), surface.height());
    surface.clear();

    let radius = (width.min(height) / 2.0 - theme.rim_margin).max(0.0);
    let slice = slice_angle(labels.len());

    surface.save();
    let result = draw_rotated(surface, labels, rotation, radius, slice, theme);
    surface.restore();
    result
}

fn draw_rotated(
    surface: &mut dyn DrawSurface,
    labels: &[String],
    rotation: f64,
    radius: f64,
    slice: f64,
    theme: &WheelTheme,
) -> Result<(), WheelError> {
    surface.translate(surface.width() / 2.0, surface.height() / 2.0)?;
    surface.rotate(rotation)?;

    for (i, label) in labels.iter().enumerate() {
        let start = i as f64 * slice;
        draw_slice(surface, i, start, slice, radius, theme)?;

        surface.save();
        let text = draw_label(surface, label, start + slice / 2.0, radius, theme);
        surface.restore();
        text?;
    }

    draw_hub(surface, theme)
}

fn draw_slice(
    surface: &mut dyn DrawSurface,
    index: usize,
    start: f64,
    slice: f64,
    radius: f64,
    theme: &WheelTheme,
) -> Result<(), WheelError> {
    surface.begin_path();
    surface.move_to(0.0, 0.0);
    surface.arc(0.0, 0.0, radius, start, start + slice)?;
    surface.close_path();
    surface.set_fill_style(&pastel(index));
    surface.fill();
    surface.set_stroke_style(theme.slice_border);
    surface.set_line_width(theme.slice_border_width);
    surface.stroke();
    Ok(())
}

/// Right-aligned label near the rim, along the slice's mid-angle.
fn draw_label(
    surface: &mut dyn DrawSurface,
    label: &str,
    mid_angle: f64,
    radius: f64,
    theme: &WheelTheme,
) -> Result<(), WheelError> {
    surface.rotate(mid_angle)?;
    surface.set_text_align("right");
    surface.set_fill_style(theme.label_color);
    surface.set_font(theme.label_font);
    surface.translate(radius - theme.label_inset, theme.label_baseline)?;
    surface.fill_text(&truncate_label(label, theme.max_label_chars), 0.0, 0.0)
}

fn draw_hub(surface: &mut dyn DrawSurface, theme: &WheelTheme) -> Result<(), WheelError> {
    surface.begin_path();
    surface.arc(0.0, 0.0, theme.hub_radius, 0.0, TAU)?;
    surface.set_fill_style(theme.hub_fill);
    surface.fill();
    surface.set_line_width(theme.hub_border_width);
    surface.set_stroke_style(theme.hub_border);
    surface.stroke();
    Ok(())
}
