pub mod clock;
pub mod controller;
pub mod input;

pub use clock::Clock;
pub use controller::WheelController;
pub use input::{WheelEffect, WheelInput};
