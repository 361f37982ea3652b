//! Whole-buffer geometry: resize, copy/paste, crop, rotation and reflection

use crate::canvas::{PixelBuffer, BYTES_PER_PIXEL};
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Quarter-turn rotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    /// 180 degrees
    Half,
    /// 90 degrees clockwise
    Clockwise,
    /// 90 degrees counter-clockwise
    CounterClockwise,
}

/// Mirror axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reflection {
    /// Left and right swap: x maps to `width - 1 - x`
    Horizontal,
    /// Top and bottom swap: y maps to `height - 1 - y`
    Vertical,
}

/// Sort two values into (low, high)
#[inline]
fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Convert a rectangle size computed in `i64` to the `i32` pair `with_size` takes
fn rect_size(width: i64, height: i64) -> Result<(i32, i32)> {
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(Error::InvalidDimensions { width, height }),
    }
}

impl PixelBuffer {
    /// Build a new grid of `new_width` x `new_height` where each source pixel
    /// (x, y) lands at `map(x, y)`
    fn remapped(
        &self,
        new_width: u32,
        new_height: u32,
        map: impl Fn(u32, u32) -> (u32, u32),
    ) -> Vec<u8> {
        let src = self.as_bytes();
        let mut out = vec![0; src.len()];
        let (w, h) = (self.width(), self.height());

        for y in 0..h {
            for x in 0..w {
                let (nx, ny) = map(x, y);
                debug_assert!(nx < new_width && ny < new_height);
                let src_idx = (y as usize * w as usize + x as usize) * BYTES_PER_PIXEL;
                let dst_idx = (ny as usize * new_width as usize + nx as usize) * BYTES_PER_PIXEL;
                out[dst_idx..dst_idx + BYTES_PER_PIXEL]
                    .copy_from_slice(&src[src_idx..src_idx + BYTES_PER_PIXEL]);
            }
        }
        out
    }

    /// Rotate the whole canvas; quarter turns swap width and height
    ///
    /// The touched mask is recreated for the new shape with every flag false.
    pub fn rotate(&mut self, rotation: Rotation) {
        let (w, h) = (self.width(), self.height());
        let (new_w, new_h, pixels) = match rotation {
            Rotation::Half => (w, h, self.remapped(w, h, |x, y| (w - 1 - x, h - 1 - y))),
            Rotation::Clockwise => (h, w, self.remapped(h, w, |x, y| (h - 1 - y, x))),
            Rotation::CounterClockwise => (h, w, self.remapped(h, w, |x, y| (y, w - 1 - x))),
        };
        self.replace_grid(new_w, new_h, pixels);
        debug!("rotated {rotation:?} to {new_w}x{new_h}");
    }

    /// Mirror the whole canvas in place; the touched mask is recreated
    pub fn reflect(&mut self, axis: Reflection) {
        let (w, h) = (self.width(), self.height());
        let pixels = match axis {
            Reflection::Horizontal => self.remapped(w, h, |x, y| (w - 1 - x, y)),
            Reflection::Vertical => self.remapped(w, h, |x, y| (x, h - 1 - y)),
        };
        self.replace_grid(w, h, pixels);
        debug!("reflected {axis:?}");
    }

    /// Independent copy of the rectangle between two corners, inclusive
    ///
    /// The corners may come in any order. Parts of the rectangle outside the
    /// canvas read as transparent black.
    pub fn copy(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<PixelBuffer> {
        let (left, right) = ordered(x0, x1);
        let (top, bottom) = ordered(y0, y1);
        let (w, h) = rect_size(
            i64::from(right) - i64::from(left) + 1,
            i64::from(bottom) - i64::from(top) + 1,
        )?;

        let mut out = PixelBuffer::with_size(w, h)?;
        for y in 0..h {
            for x in 0..w {
                out.set_color(x, y, self.get_color(left + x, top + y));
            }
        }
        out.clear_touched();
        Ok(out)
    }

    /// Write every pixel of `src` with its top-left corner at (x0, y0)
    ///
    /// Destinations outside the canvas are dropped. Pasted pixels are
    /// committed and marked touched. To move a region within one buffer,
    /// `copy` it first.
    pub fn paste(&mut self, src: &PixelBuffer, x0: i32, y0: i32) {
        let (dst_w, dst_h) = (i64::from(self.width()), i64::from(self.height()));
        let (x0, y0) = (i64::from(x0), i64::from(y0));

        // Clip the source rectangle to the destination up front
        let sx_start = (-x0).max(0);
        let sx_end = i64::from(src.width()).min(dst_w - x0);
        let sy_start = (-y0).max(0);
        let sy_end = i64::from(src.height()).min(dst_h - y0);

        for sy in sy_start..sy_end {
            for sx in sx_start..sx_end {
                let color = src.get_color(sx as i32, sy as i32);
                self.set_color((x0 + sx) as i32, (y0 + sy) as i32, color);
            }
        }
    }

    /// Replace the canvas with a new one of the given size, keeping the old
    /// image with its top-left corner at (x0, y0)
    ///
    /// Pixels landing outside the new canvas are dropped and uncovered area is
    /// transparent. The touched mask starts over. On error nothing changes.
    pub fn resize(&mut self, x0: i32, y0: i32, width: i32, height: i32) -> Result<()> {
        let mut resized = PixelBuffer::with_size(width, height)?;
        resized.paste(self, x0, y0);
        resized.clear_touched();
        debug!(
            "resized {}x{} to {width}x{height} at offset ({x0}, {y0})",
            self.width(),
            self.height()
        );
        *self = resized;
        Ok(())
    }

    /// Shrink (or grow) the canvas to the rectangle between two corners
    pub fn crop(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<()> {
        *self = self.copy(x0, y0, x1, y1)?;
        Ok(())
    }
}
