//! The pixel grid every operation reads from and writes to

mod pixel_buffer;
mod touched;

pub use pixel_buffer::{PixelBuffer, BYTES_PER_PIXEL};
pub use touched::TouchedMask;
