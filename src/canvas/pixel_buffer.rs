use super::TouchedMask;
use crate::color::Color;
use crate::error::{Error, Result};
use std::fmt;

/// Bytes per RGBA pixel
pub const BYTES_PER_PIXEL: usize = 4;

// ============================================================================
// Utility Functions
// ============================================================================

/// Validate requested dimensions and return them as unsigned plus the byte size
///
/// Both sides must be non-negative, fit in `i32` so every pixel has an `i32`
/// coordinate, and the RGBA byte count must fit in `usize`.
fn checked_dimensions(width: i64, height: i64) -> Result<(u32, u32, usize)> {
    let invalid = || Error::InvalidDimensions { width, height };
    if width < 0 || height < 0 || width > i64::from(i32::MAX) || height > i64::from(i32::MAX) {
        return Err(invalid());
    }
    let bytes = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or_else(invalid)?;
    Ok((width as u32, height as u32, bytes))
}

#[inline]
fn write_pixel(dest: &mut [u8], c: Color) {
    dest[0] = c.r;
    dest[1] = c.g;
    dest[2] = c.b;
    dest[3] = c.a;
}

#[inline]
fn read_pixel(src: &[u8]) -> Color {
    Color::new(src[0], src[1], src[2], src[3])
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// RGBA8 pixel grid, row-major, plus the touched mask used by flood fills
///
/// Reads outside the grid return transparent black and writes outside it are
/// dropped, so rasterizers never have to clip their own output.
#[derive(Clone)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    touched: TouchedMask,
}

impl PixelBuffer {
    /// Create an empty 0x0 buffer
    pub fn new() -> Self {
        Self {
            pixels: Vec::new(),
            width: 0,
            height: 0,
            touched: TouchedMask::default(),
        }
    }

    /// Create a transparent buffer of the given size
    pub fn with_size(width: i32, height: i32) -> Result<Self> {
        let mut buffer = Self::new();
        buffer.set_size(width, height)?;
        Ok(buffer)
    }

    /// Wrap raw RGBA8 data (as produced by a decoder)
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let (width, height, len) = checked_dimensions(i64::from(width), i64::from(height))?;
        if data.len() != len {
            return Err(Error::DataLength {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            pixels: data,
            width,
            height,
            touched: TouchedMask::new(width, height),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True for a 0-width or 0-height buffer
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Calculate byte offset for pixel at (x, y); caller checks bounds
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    /// Reallocate to a new size; every pixel becomes transparent black and
    /// every touched flag is lowered
    ///
    /// On error the buffer is left as it was.
    pub fn set_size(&mut self, width: i32, height: i32) -> Result<()> {
        let (width, height, len) = checked_dimensions(i64::from(width), i64::from(height))?;
        self.pixels = vec![0; len];
        self.width = width;
        self.height = height;
        self.touched = TouchedMask::new(width, height);
        Ok(())
    }

    /// Swap in a whole new grid produced from this one, with a fresh mask
    ///
    /// Callers derive `width` and `height` from the current dimensions, so
    /// they are already known to be valid.
    pub(crate) fn replace_grid(&mut self, width: u32, height: u32, pixels: Vec<u8>) {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * BYTES_PER_PIXEL
        );
        self.pixels = pixels;
        self.width = width;
        self.height = height;
        self.touched = TouchedMask::new(width, height);
    }

    /// Reset every pixel to transparent black and every flag to false
    pub fn clear(&mut self) {
        self.pixels.fill(0);
        self.touched.clear();
    }

    /// Paint the whole canvas one color
    ///
    /// Like `clear`, this starts over: every touched flag is lowered, so a
    /// following flood fill sees no walls.
    pub fn clear_to(&mut self, color: Color) {
        for chunk in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            write_pixel(chunk, color);
        }
        self.touched.clear();
    }

    /// Color at (x, y), or transparent black outside the canvas
    #[inline]
    pub fn get_color(&self, x: i32, y: i32) -> Color {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            read_pixel(&self.pixels[idx..idx + BYTES_PER_PIXEL])
        } else {
            Color::TRANSPARENT
        }
    }

    /// Commit a pixel and mark it touched; silently ignored outside the canvas
    #[inline]
    pub fn set_color(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            write_pixel(&mut self.pixels[idx..idx + BYTES_PER_PIXEL], color);
            self.touched.mark(x, y);
        }
    }

    // ========================================================================
    // Touched Mask
    // ========================================================================

    /// Whether (x, y) was committed since the mask was last cleared
    #[inline]
    pub fn is_touched(&self, x: i32, y: i32) -> bool {
        self.touched.get(x, y)
    }

    /// Lower every touched flag, leaving pixels as they are
    pub fn clear_touched(&mut self) {
        self.touched.clear();
    }

    pub fn touched(&self) -> &TouchedMask {
        &self.touched
    }

    // ========================================================================
    // Spans and bulk access
    // ========================================================================

    /// Draw a horizontal span from x1 to x2 inclusive (either order), clipped
    pub fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Color) {
        if y < 0 || y as u32 >= self.height || self.width == 0 {
            return;
        }
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let start = x1.max(0);
        let end = x2.min(self.width as i32 - 1);
        for x in start..=end {
            self.set_color(x, y, color);
        }
    }

    /// Replace every pixel with `f(pixel)`, committing each one
    pub fn map_colors(&mut self, f: impl FnMut(Color) -> Color) {
        self.rewrite_colors(f);
        self.touched.mark_all();
    }

    /// Replace every pixel with `f(pixel)` in place; touched flags are left
    /// as they are
    pub fn rewrite_colors(&mut self, mut f: impl FnMut(Color) -> Color) {
        for chunk in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            let mapped = f(read_pixel(chunk));
            write_pixel(chunk, mapped);
        }
    }

    /// Raw RGBA8 bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the buffer, returning its raw RGBA8 bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    /// Iterate over every pixel as (x, y, color), row by row
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, Color)> + '_ {
        let w = self.width as usize;
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .enumerate()
            .map(move |(i, px)| ((i % w) as i32, (i / w) as i32, read_pixel(px)))
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Two buffers are equal when their dimensions and pixels match; the touched
/// mask is bookkeeping and does not take part.
impl PartialEq for PixelBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.pixels == other.pixels
    }
}

impl Eq for PixelBuffer {}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("touched", &self.touched.count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn test_new_is_empty() {
        let buf = PixelBuffer::new();
        assert!(buf.is_empty());
        assert_eq!((buf.width(), buf.height()), (0, 0));
        assert_eq!(buf.get_color(0, 0), Color::TRANSPARENT);
    }

    #[test]
    fn test_set_then_get_in_bounds() {
        let mut buf = PixelBuffer::with_size(4, 3).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                let c = Color::new(x as u8, y as u8, 7, 200);
                buf.set_color(x, y, c);
                assert_eq!(buf.get_color(x, y), c);
                assert!(buf.is_touched(x, y));
            }
        }
    }

    #[test]
    fn test_out_of_bounds_reads_and_writes() {
        let mut buf = PixelBuffer::with_size(3, 3).unwrap();
        buf.clear_to(Color::WHITE);
        let before = buf.clone();

        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MIN, i32::MAX)] {
            assert_eq!(buf.get_color(x, y), Color::TRANSPARENT);
            buf.set_color(x, y, RED);
        }
        assert_eq!(buf, before);
    }

    #[test]
    fn test_set_size_resets_content() {
        let mut buf = PixelBuffer::with_size(2, 2).unwrap();
        buf.set_color(1, 1, RED);
        buf.set_size(5, 1).unwrap();
        assert_eq!((buf.width(), buf.height()), (5, 1));
        assert!(buf.pixels().all(|(_, _, c)| c == Color::TRANSPARENT));
        assert_eq!(buf.touched().count(), 0);
        assert_eq!(buf.touched().width(), 5);
    }

    #[test]
    fn test_negative_size_is_rejected() {
        let mut buf = PixelBuffer::with_size(2, 2).unwrap();
        buf.set_color(0, 0, RED);

        let err = buf.set_size(-1, 4).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDimensions {
                width: -1,
                height: 4
            }
        ));
        // Untouched on failure
        assert_eq!((buf.width(), buf.height()), (2, 2));
        assert_eq!(buf.get_color(0, 0), RED);

        assert!(PixelBuffer::with_size(3, -2).is_err());
    }

    #[test]
    fn test_clear_keeps_size() {
        let mut buf = PixelBuffer::with_size(3, 2).unwrap();
        buf.set_color(2, 1, RED);
        buf.clear();
        assert_eq!((buf.width(), buf.height()), (3, 2));
        assert_eq!(buf.get_color(2, 1), Color::TRANSPARENT);
        assert!(!buf.is_touched(2, 1));
    }

    #[test]
    fn test_clear_to_lowers_touched_flags() {
        let mut buf = PixelBuffer::with_size(3, 3).unwrap();
        buf.set_color(1, 1, RED);
        buf.clear_to(Color::WHITE);
        assert!(buf.pixels().all(|(_, _, c)| c == Color::WHITE));
        assert_eq!(buf.touched().count(), 0);
    }

    #[test]
    fn test_map_colors_marks_but_rewrite_does_not() {
        let mut buf = PixelBuffer::with_size(2, 2).unwrap();
        buf.rewrite_colors(|_| RED);
        assert_eq!(buf.get_color(1, 1), RED);
        assert_eq!(buf.touched().count(), 0);

        buf.map_colors(|_| Color::WHITE);
        assert_eq!(buf.get_color(1, 1), Color::WHITE);
        assert_eq!(buf.touched().count(), 4);
    }

    #[test]
    fn test_hline_clips_and_orders() {
        let mut buf = PixelBuffer::with_size(5, 2).unwrap();
        buf.hline(7, -3, 1, RED);
        for x in 0..5 {
            assert_eq!(buf.get_color(x, 1), RED);
            assert_eq!(buf.get_color(x, 0), Color::TRANSPARENT);
        }
        // Off-canvas rows are ignored
        buf.hline(0, 4, 2, Color::WHITE);
        buf.hline(0, 4, -1, Color::WHITE);
        assert_eq!(buf.touched().count(), 5);
    }

    #[test]
    fn test_from_rgba_checks_length() {
        let buf = PixelBuffer::from_rgba(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(buf.get_color(1, 0), Color::new(5, 6, 7, 8));
        assert_eq!(buf.touched().count(), 0);

        let err = PixelBuffer::from_rgba(2, 2, vec![0; 8]).unwrap_err();
        assert!(matches!(err, Error::DataLength { len: 8, .. }));
    }

    #[test]
    fn test_pixels_iterates_row_major() {
        let mut buf = PixelBuffer::with_size(2, 2).unwrap();
        buf.set_color(1, 0, RED);
        let coords: Vec<_> = buf.pixels().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(buf.pixels().nth(1).map(|p| p.2), Some(RED));
    }
}
