//! Whole-canvas color operations

use crate::canvas::PixelBuffer;
use crate::color::{Channel, Color};
use log::debug;

impl PixelBuffer {
    /// Replace every pixel that exactly equals `old` with `new`
    ///
    /// Only replaced pixels are committed. Returns how many there were.
    pub fn replace_color(&mut self, old: Color, new: Color) -> usize {
        let matches: Vec<(i32, i32)> = self
            .pixels()
            .filter(|&(_, _, c)| c == old)
            .map(|(x, y, _)| (x, y))
            .collect();
        for &(x, y) in &matches {
            self.set_color(x, y, new);
        }
        debug!("replaced {old} with {new} on {} pixels", matches.len());
        matches.len()
    }

    /// Force one channel of every pixel to `value`
    ///
    /// The channel bytes are rewritten in place without marking anything
    /// touched, so later flood fills are unaffected.
    pub fn channel_filter(&mut self, channel: Channel, value: u8) {
        self.rewrite_colors(|c| c.with_channel(channel, value));
    }

    /// Invert red, green and blue of every pixel; alpha is kept
    pub fn invert_colors(&mut self) {
        self.map_colors(Color::inverted);
    }

    /// Convert every pixel to its luma gray; alpha is kept
    pub fn gray_colors(&mut self) {
        self.map_colors(Color::grayscale);
    }
}
