//! In-memory [`DrawSurface`] that records every call.
//!
//! Used as the fake canvas in tests across the workspace.

use crate::surface::DrawSurface;
use wheel_core::WheelError;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    ClearRect { w: f64, h: f64 },
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Rotate(f64),
    BeginPath,
    MoveTo { x: f64, y: f64 },
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64 },
    ClosePath,
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f64),
    Fill,
    Stroke,
    Font(String),
    TextAlign(String),
    FillText { text: String, x: f64, y: f64 },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    pub ops: Vec<DrawOp>,
    /// Make `fill_text` fail, standing in for a lost canvas context.
    pub fail_text: bool,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            fail_text: false,
        }
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Labels drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn arcs(&self) -> Vec<(f64, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Arc {
                    radius, start, end, ..
                } => Some((*radius, *start, *end)),
                _ => None,
            })
            .collect()
    }

    pub fn rotations(&self) -> Vec<f64> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rotate(a) => Some(*a),
                _ => None,
            })
            .collect()
    }

    pub fn fill_styles(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillStyle(c) => Some(c.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &DrawOp) -> usize {
        self.ops.iter().filter(|op| *op == wanted).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&mut self, _x: f64, _y: f64, w: f64, h: f64) {
        self.ops.push(DrawOp::ClearRect { w, h });
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), WheelError> {
        self.ops.push(DrawOp::Translate { x, y });
        Ok(())
    }

    fn rotate(&mut self, angle: f64) -> Result<(), WheelError> {
        self.ops.push(DrawOp::Rotate(angle));
        Ok(())
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo { x, y });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), WheelError> {
        if radius < 0.0 {
            return Err(WheelError::Render(format!("negative radius {radius}")));
        }
        self.ops.push(DrawOp::Arc {
            x,
            y,
            radius,
            start,
            end,
        });
        Ok(())
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ops.push(DrawOp::FillStyle(color.to_string()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ops.push(DrawOp::StrokeStyle(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::LineWidth(width));
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(DrawOp::Font(font.to_string()));
    }

    fn set_text_align(&mut self, align: &str) {
        self.ops.push(DrawOp::TextAlign(align.to_string()));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), WheelError> {
        if self.fail_text {
            return Err(WheelError::Render("text rendering unavailable".to_string()));
        }
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
        });
        Ok(())
    }
}
