pub use texture::{frame_to_rgb24, BYTES_PER_PIXEL};

#[cfg(feature = "sdl")]
pub use display::Display;

#[cfg(feature = "sdl")]
mod display;
mod texture;
