pub mod config;
pub mod constants;
pub mod error;
pub mod frame;
pub mod glow;
pub mod palette;
pub mod platform;
pub mod progress;
pub mod reveal;
pub mod scroll;
pub mod signal;
pub mod sink;
pub mod tilt;

pub use config::*;
pub use error::*;
pub use frame::*;
pub use glow::*;
pub use palette::*;
pub use platform::*;
pub use progress::*;
pub use reveal::*;
pub use scroll::*;
pub use signal::*;
pub use sink::*;
pub use tilt::*;
