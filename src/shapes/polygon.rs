use crate::canvas::PixelBuffer;
use crate::color::Color;
use crate::geometry::{crosses_row, crossing_x, edges, Coord};

impl PixelBuffer {
    /// Fill a polygon using the scanline algorithm (even-odd rule)
    ///
    /// Works for convex, concave and self-intersecting polygons. Each row
    /// collects the crossings of every edge under the half-open rule and fills
    /// between consecutive pairs. The boundary is then traced with thin lines
    /// in the fill color so the bottom and right edges are covered too.
    pub fn fill_polygon(&mut self, vertices: &[Coord], color: Color) {
        if vertices.len() < 3 || self.is_empty() {
            return;
        }

        // Find vertical bounds, clamped to the canvas
        let (mut min_y, mut max_y) = (i32::MAX, i32::MIN);
        for v in vertices {
            min_y = min_y.min(v.y);
            max_y = max_y.max(v.y);
        }
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height() as i32 - 1);

        let mut xs: Vec<f64> = Vec::with_capacity(vertices.len());
        for y in min_y..=max_y {
            let row = f64::from(y);
            xs.clear();
            for (a, b) in edges(vertices) {
                if crosses_row(a, b, row) {
                    xs.push(crossing_x(a, b, row));
                }
            }
            xs.sort_unstable_by(f64::total_cmp);

            // Fill between pairs of crossings
            for pair in xs.chunks_exact(2) {
                let start = pair[0].ceil();
                let end = pair[1].floor();
                if start <= end {
                    // hline clips, the casts saturate for far-off vertices
                    self.hline(start as i32, end as i32, y, color);
                }
            }
        }

        for (a, b) in edges(vertices) {
            self.draw_thin_line(a.x, a.y, b.x, b.y, color);
        }
    }

    /// Draw a closed polygon outline with optional fill
    ///
    /// The fill goes down first and the outline (last vertex joined back to
    /// the first) is drawn over it with `draw_line`. Two vertices draw a single
    /// segment, fewer draw nothing.
    pub fn draw_polygon(
        &mut self,
        vertices: &[Coord],
        thickness: i32,
        color: Color,
        fill: Option<Color>,
    ) {
        match vertices {
            [] | [_] => {}
            [a, b] => self.draw_line(a.x, a.y, b.x, b.y, thickness, color),
            _ => {
                if let Some(fill_color) = fill {
                    self.fill_polygon(vertices, fill_color);
                }
                for (a, b) in edges(vertices) {
                    self.draw_line(a.x, a.y, b.x, b.y, thickness, color);
                }
            }
        }
    }
}
