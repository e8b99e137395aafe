//! Drawing-surface seam.
//!
//! The subset of `CanvasRenderingContext2d` the wheel and confetti need.
//! Calls that can throw in the browser return `Result`.

use wheel_core::WheelError;

pub trait DrawSurface {
    /// Pixel width of the backing canvas.
    fn width(&self) -> f64;
    /// Pixel height of the backing canvas.
    fn height(&self) -> f64;

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64) -> Result<(), WheelError>;
    fn rotate(&mut self, angle: f64) -> Result<(), WheelError>;

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), WheelError>;
    fn close_path(&mut self);

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: &str);
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), WheelError>;

    /// Clear the whole surface.
    fn clear(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.clear_rect(0.0, 0.0, w, h);
    }
}
