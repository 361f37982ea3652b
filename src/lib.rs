//! pixedit: an in-memory RGBA raster editor
//!
//! A [`PixelBuffer`] owns the pixels and a touched mask. Drawing, filling and
//! transforms are inherent methods on it, spread over the modules below:
//!
//! - [`shapes`]: Bresenham lines, midpoint circles, scanline polygons
//! - [`fill`]: breadth-first region fills
//! - [`transform`]: resize, copy/paste, crop, rotation and reflection
//! - [`adjust`]: whole-canvas color operations
//! - [`codec`]: image file I/O
//! - [`script`]: JSON edit scripts
//!
//! Coordinates outside the canvas never fail. Reads return transparent black
//! and writes are dropped.

pub mod adjust;
pub mod canvas;
pub mod codec;
pub mod color;
pub mod error;
pub mod fill;
pub mod geometry;
pub mod script;
pub mod shapes;
pub mod transform;

pub use canvas::{PixelBuffer, TouchedMask};
pub use color::{Channel, Color};
pub use error::{Error, Result};
pub use geometry::{point_in_polygon, Coord};
pub use script::{Operation, Script};
pub use transform::{Reflection, Rotation};
