pub mod confetti;
pub mod palette;
pub mod recording;
pub mod surface;
pub mod wheel;

pub use confetti::Confetti;
pub use surface::DrawSurface;
pub use wheel::{WheelTheme, draw_wheel, truncate_label};
