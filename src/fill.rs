//! Breadth-first region fills over the touched mask

use crate::canvas::PixelBuffer;
use crate::color::Color;
use crate::geometry::Coord;
use log::debug;
use std::collections::VecDeque;

impl PixelBuffer {
    /// Paint the 4-connected region of untouched pixels reachable from (x, y)
    ///
    /// Every untouched pixel qualifies regardless of its color, so anything
    /// already drawn since the mask was last cleared acts as a wall. The mask
    /// is not reset beforehand. Returns the number of pixels painted.
    pub fn flood_fill(&mut self, x: i32, y: i32, color: Color) -> usize {
        let painted = self.grow_region(Coord::new(x, y), color, |_| true);
        debug!("flood_fill from ({x}, {y}) painted {painted} pixels");
        painted
    }

    /// Paint the 4-connected region sharing the seed pixel's color
    ///
    /// The touched mask is cleared first, even for a seed outside the canvas,
    /// and the color at (x, y) becomes the target. Filling with the region's
    /// current color still visits and counts every pixel but changes nothing.
    /// Returns the number of pixels painted.
    pub fn fill(&mut self, x: i32, y: i32, color: Color) -> usize {
        self.clear_touched();
        if !self.in_bounds(x, y) {
            return 0;
        }
        let target = self.get_color(x, y);
        let painted = self.grow_region(Coord::new(x, y), color, |c| c == target);
        debug!("fill from ({x}, {y}) replaced {target} with {color} on {painted} pixels");
        painted
    }

    /// Queue-driven fill shared by both variants
    ///
    /// Coordinates may be queued more than once; the touched check on pop
    /// discards repeats.
    fn grow_region(&mut self, seed: Coord, color: Color, matches: impl Fn(Color) -> bool) -> usize {
        let mut queue = VecDeque::from([seed]);
        let mut painted = 0;

        while let Some(p) = queue.pop_front() {
            if !self.in_bounds(p.x, p.y) || self.is_touched(p.x, p.y) {
                continue;
            }
            if !matches(self.get_color(p.x, p.y)) {
                continue;
            }
            self.set_color(p.x, p.y, color);
            painted += 1;
            queue.extend(p.neighbors4());
        }
        painted
    }
}
