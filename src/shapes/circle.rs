use crate::canvas::PixelBuffer;
use crate::color::Color;
use crate::geometry::Coord;

/// Walk a 1px midpoint circle outline, handing each pixel to `plot` once
///
/// One octant is traced from (r, 0) up to the diagonal and every step is
/// mirrored into the symmetric positions around the center. Steps on an axis
/// or on the diagonal have only four distinct mirrors. Nothing is buffered,
/// so memory stays constant whatever the radius. Pixels whose coordinates
/// overflow `i32` are skipped. Radius 0 or less yields no points.
pub fn for_each_circle_point(cx: i32, cy: i32, radius: i32, mut plot: impl FnMut(i32, i32)) {
    if radius <= 0 {
        return;
    }

    let (cx, cy) = (i64::from(cx), i64::from(cy));
    let mut emit = |dx: i64, dy: i64| {
        if let (Ok(x), Ok(y)) = (i32::try_from(cx + dx), i32::try_from(cy + dy)) {
            plot(x, y);
        }
    };

    let mut x = i64::from(radius);
    let mut y = 0i64;
    let mut err = 1 - x;

    while x >= y {
        if y == 0 {
            for (dx, dy) in [(x, 0), (0, x), (-x, 0), (0, -x)] {
                emit(dx, dy);
            }
        } else if x == y {
            for (dx, dy) in [(x, x), (-x, x), (-x, -x), (x, -x)] {
                emit(dx, dy);
            }
        } else {
            for (dx, dy) in [
                (x, y),
                (y, x),
                (-y, x),
                (-x, y),
                (-x, -y),
                (-y, -x),
                (y, -x),
                (x, -y),
            ] {
                emit(dx, dy);
            }
        }

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Pixels of a 1px circle outline in sorted order, each listed once
pub fn circle_points(cx: i32, cy: i32, radius: i32) -> Vec<Coord> {
    let mut points = Vec::new();
    for_each_circle_point(cx, cy, radius, |x, y| points.push(Coord::new(x, y)));
    points.sort_unstable();
    points
}

impl PixelBuffer {
    /// Draw a filled disk: every pixel whose squared distance to the center is
    /// at most `radius²`
    ///
    /// Radius 0 paints the center pixel, a negative radius paints nothing.
    /// The bounding box is clipped to the canvas before the distance test.
    pub fn fill_disk(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        if radius < 0 || self.is_empty() {
            return;
        }

        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
        let r2 = r * r;
        let x_min = (cx - r).max(0);
        let x_max = (cx + r).min(i64::from(self.width()) - 1);
        let y_min = (cy - r).max(0);
        let y_max = (cy + r).min(i64::from(self.height()) - 1);

        for y in y_min..=y_max {
            let dy = y - cy;
            for x in x_min..=x_max {
                let dx = x - cx;
                if dx * dx + dy * dy <= r2 {
                    self.set_color(x as i32, y as i32, color);
                }
            }
        }
    }

    /// Whether an outline of `radius`, widened by `reach` pixels on each side,
    /// cannot land on the canvas
    ///
    /// True when the widened bounding box is off the canvas, or when every
    /// canvas corner sits inside the ring's hole.
    fn outline_misses_canvas(&self, cx: i32, cy: i32, radius: i32, reach: i32) -> bool {
        if self.is_empty() {
            return true;
        }
        let (cx, cy) = (i128::from(cx), i128::from(cy));
        let (r, reach) = (i128::from(radius), i128::from(reach.max(0)));
        let (w, h) = (i128::from(self.width()), i128::from(self.height()));

        let outer = r + reach + 1;
        if cx + outer < 0 || cy + outer < 0 || cx - outer >= w || cy - outer >= h {
            return true;
        }

        let inner = r - reach - 2;
        if inner <= 0 {
            return false;
        }
        let far_x = cx.abs().max((cx - (w - 1)).abs());
        let far_y = cy.abs().max((cy - (h - 1)).abs());
        far_x * far_x + far_y * far_y < inner * inner
    }

    /// Draw a 1px circle outline using the midpoint algorithm
    pub fn draw_thin_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        if self.outline_misses_canvas(cx, cy, radius, 0) {
            return;
        }
        for_each_circle_point(cx, cy, radius, |x, y| self.set_color(x, y, color));
    }

    /// Draw a circle with optional fill and variable outline thickness
    ///
    /// The fill goes down first so the outline is never painted over. Outlines
    /// thicker than 1 stamp disks of radius `thickness / 2` on every point of
    /// the thin outline. A radius of 0 or less draws nothing.
    pub fn draw_circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        thickness: i32,
        color: Color,
        fill: Option<Color>,
    ) {
        if radius <= 0 {
            return;
        }

        if let Some(fill_color) = fill {
            self.fill_disk(cx, cy, radius, fill_color);
        }

        if thickness > 1 {
            let stamp = thickness / 2;
            if self.outline_misses_canvas(cx, cy, radius, stamp) {
                return;
            }
            for_each_circle_point(cx, cy, radius, |x, y| self.fill_disk(x, y, stamp, color));
        } else {
            self.draw_thin_circle(cx, cy, radius, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const INK: Color = Color::rgb(0, 0, 200);
    const PAINT: Color = Color::rgb(250, 250, 0);

    fn painted(buf: &PixelBuffer, color: Color) -> HashSet<(i32, i32)> {
        buf.pixels()
            .filter(|&(_, _, c)| c == color)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    /// All eight reflections of `p` about (cx, cy)
    fn reflections(cx: i32, cy: i32, (x, y): (i32, i32)) -> [(i32, i32); 8] {
        let (dx, dy) = (x - cx, y - cy);
        [
            (cx + dx, cy + dy),
            (cx - dx, cy + dy),
            (cx + dx, cy - dy),
            (cx - dx, cy - dy),
            (cx + dy, cy + dx),
            (cx - dy, cy + dx),
            (cx + dy, cy - dx),
            (cx - dy, cy - dx),
        ]
    }

    #[test]
    fn test_radius_three_octant() {
        let mut first_octant = Vec::new();
        for_each_circle_point(0, 0, 3, |x, y| {
            if x >= y && y >= 0 {
                first_octant.push((x, y));
            }
        });
        first_octant.sort_unstable();
        assert_eq!(first_octant, vec![(2, 2), (3, 0), (3, 1)]);
        assert_eq!(circle_points(5, 5, 3).len(), 16);
    }

    #[test]
    fn test_streamed_points_are_unique() {
        for radius in [1, 2, 3, 7, 12, 50] {
            let mut seen = HashSet::new();
            let mut count = 0;
            for_each_circle_point(0, 0, radius, |x, y| {
                seen.insert((x, y));
                count += 1;
            });
            assert_eq!(seen.len(), count, "radius {radius}");
        }
    }

    #[test]
    fn test_huge_radius_around_small_canvas() {
        let mut buf = PixelBuffer::with_size(10, 10).unwrap();
        buf.draw_thin_circle(5, 5, 1_000_000_000, INK);
        buf.draw_circle(5, 5, i32::MAX, 9, INK, None);
        assert_eq!(buf.touched().count(), 0);

        // Far away in the other direction as well
        buf.draw_thin_circle(i32::MIN, i32::MIN, 1_000_000_000, INK);
        assert_eq!(buf.touched().count(), 0);
    }

    #[test]
    fn test_large_circle_crossing_canvas_still_draws() {
        let mut buf = PixelBuffer::with_size(10, 10).unwrap();
        // Rightmost point of the outline is (5, 5)
        buf.draw_thin_circle(-995, 5, 1000, INK);
        assert_eq!(buf.get_color(5, 5), INK);

        let mut thick = PixelBuffer::with_size(10, 10).unwrap();
        thick.draw_circle(-995, 5, 1000, 5, INK, None);
        assert_eq!(thick.get_color(7, 5), INK);
        assert_eq!(thick.get_color(3, 5), INK);
    }

    #[test]
    fn test_thin_circle_is_eightfold_symmetric() {
        let mut buf = PixelBuffer::with_size(11, 11).unwrap();
        buf.draw_thin_circle(5, 5, 3, INK);
        let set = painted(&buf, INK);
        assert_eq!(set.len(), 16);
        assert!(set.contains(&(8, 5)));
        assert!(set.contains(&(5, 2)));
        assert!(set.contains(&(7, 7)));
        for &p in &set {
            for q in reflections(5, 5, p) {
                assert!(set.contains(&q), "{p:?} mirrored to {q:?} is missing");
            }
        }
    }

    #[test]
    fn test_larger_circles_stay_symmetric() {
        for radius in [1, 2, 7, 12] {
            let points: HashSet<_> = circle_points(20, 20, radius)
                .into_iter()
                .map(|c| (c.x, c.y))
                .collect();
            for &p in &points {
                for q in reflections(20, 20, p) {
                    assert!(points.contains(&q), "radius {radius}: {q:?} missing");
                }
            }
        }
    }

    #[test]
    fn test_zero_radius_draws_nothing() {
        let mut buf = PixelBuffer::with_size(5, 5).unwrap();
        buf.draw_thin_circle(2, 2, 0, INK);
        buf.draw_circle(2, 2, 0, 3, INK, Some(PAINT));
        buf.draw_circle(2, 2, -4, 1, INK, None);
        assert_eq!(buf.touched().count(), 0);
    }

    #[test]
    fn test_fill_disk_counts() {
        let mut buf = PixelBuffer::with_size(9, 9).unwrap();
        buf.fill_disk(4, 4, 0, INK);
        assert_eq!(painted(&buf, INK).len(), 1);

        buf.fill_disk(4, 4, 2, INK);
        // (0,0), four at distance 1, four at sqrt(2), four at distance 2
        assert_eq!(painted(&buf, INK).len(), 13);

        buf.clear();
        buf.fill_disk(4, 4, -1, INK);
        assert_eq!(buf.touched().count(), 0);
    }

    #[test]
    fn test_fill_disk_near_edge_is_clipped() {
        let mut buf = PixelBuffer::with_size(4, 4).unwrap();
        buf.fill_disk(0, 0, 2, INK);
        // Quarter of the 13-pixel disk plus the shared axes
        assert_eq!(
            painted(&buf, INK),
            HashSet::from([(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (0, 2)])
        );
    }

    #[test]
    fn test_filled_circle_keeps_outline_on_top() {
        let mut buf = PixelBuffer::with_size(21, 21).unwrap();
        buf.draw_circle(10, 10, 6, 1, INK, Some(PAINT));

        assert_eq!(buf.get_color(10, 10), PAINT);
        for p in circle_points(10, 10, 6) {
            assert_eq!(buf.get_color(p.x, p.y), INK);
        }
        // Nothing outside the radius
        assert_eq!(buf.get_color(10, 3), Color::TRANSPARENT);
        assert_eq!(buf.get_color(17, 10), Color::TRANSPARENT);
    }

    #[test]
    fn test_thick_circle_covers_thin_outline() {
        let mut buf = PixelBuffer::with_size(31, 31).unwrap();
        buf.draw_circle(15, 15, 8, 5, INK, None);
        for p in circle_points(15, 15, 8) {
            for (x, y) in [(p.x, p.y), (p.x + 2, p.y), (p.x, p.y - 2)] {
                assert_eq!(buf.get_color(x, y), INK);
            }
        }
        // The center stays empty without a fill
        assert_eq!(buf.get_color(15, 15), Color::TRANSPARENT);
    }
}
