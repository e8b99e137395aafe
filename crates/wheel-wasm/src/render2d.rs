//! Canvas2D drawing surface.
//!
//! Thin `DrawSurface` adapter over an HTML `<canvas>` 2D context. Pixel
//! dimensions are read from the backing canvas on every call, so a resized
//! canvas is picked up on the next frame.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wheel_core::WheelError;
use wheel_render::DrawSurface;

pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
    canvas: HtmlCanvasElement,
}

impl Canvas2d {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, WheelError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| WheelError::Render("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| WheelError::Render("not a 2d context".to_string()))?;
        Ok(Self {
            ctx,
            canvas: canvas.clone(),
        })
    }

    pub fn from_context(ctx: &CanvasRenderingContext2d) -> Result<Self, WheelError> {
        let canvas = ctx
            .canvas()
            .ok_or_else(|| WheelError::Render("context has no canvas".to_string()))?;
        Ok(Self {
            ctx: ctx.clone(),
            canvas,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

pub(crate) fn js_err(e: JsValue) -> WheelError {
    WheelError::Render(format!("{e:?}"))
}

impl DrawSurface for Canvas2d {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), WheelError> {
        self.ctx.translate(x, y).map_err(js_err)
    }

    fn rotate(&mut self, angle: f64) -> Result<(), WheelError> {
        self.ctx.rotate(angle).map_err(js_err)
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), WheelError> {
        self.ctx.arc(x, y, radius, start, end).map_err(js_err)
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_align(&mut self, align: &str) {
        self.ctx.set_text_align(align);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), WheelError> {
        self.ctx.fill_text(text, x, y).map_err(js_err)
    }
}
