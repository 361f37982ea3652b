//! Rasterizers for lines, circles and polygons
//!
//! Each one is an inherent method on [`PixelBuffer`](crate::canvas::PixelBuffer)
//! that commits pixels through `set_color`, so clipping and the touched mask
//! come for free.

mod circle;
mod line;
mod polygon;

pub use circle::{circle_points, for_each_circle_point};
pub use line::bresenham;
