//! Integer pixel coordinates and the even-odd polygon test

use serde::{Deserialize, Serialize};

/// A pixel coordinate: x is the column, y is the row, (0, 0) is top-left
///
/// Any value is representable; whether it lands on the canvas is decided by
/// the buffer.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four edge-adjacent neighbors (right, left, down, up)
    #[inline]
    pub fn neighbors4(self) -> [Self; 4] {
        [
            Self::new(self.x + 1, self.y),
            Self::new(self.x - 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x, self.y - 1),
        ]
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

/// Edges of a closed polygon, including the one from the last vertex back to
/// the first
pub fn edges(vertices: &[Coord]) -> impl Iterator<Item = (Coord, Coord)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

/// Whether edge `(a, b)` crosses row `y` under the half-open rule
///
/// Exactly one endpoint must have a row strictly greater than `y`, so a
/// vertex sitting on the row is counted once for a pass-through and zero or
/// two times for a local extremum. Horizontal edges never cross.
#[inline]
pub fn crosses_row(a: Coord, b: Coord, y: f64) -> bool {
    (f64::from(a.y) > y) != (f64::from(b.y) > y)
}

/// X coordinate where edge `(a, b)` meets row `y`
///
/// Only meaningful when `crosses_row(a, b, y)` holds, which rules out
/// horizontal edges.
#[inline]
pub fn crossing_x(a: Coord, b: Coord, y: f64) -> f64 {
    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    let (bx, by) = (f64::from(b.x), f64::from(b.y));
    ax + (y - ay) * (bx - ax) / (by - ay)
}

/// Check if a point is inside a polygon using the even-odd ray casting rule
///
/// A ray is cast from the point toward +x; the point is inside when it
/// crosses an odd number of edges. With the half-open row rule and the strict
/// `crossing > x` test, points on top and left edges of an axis-aligned
/// rectangle are inside and points on bottom and right edges are outside.
pub fn point_in_polygon(x: i32, y: i32, vertices: &[Coord]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let (px, py) = (f64::from(x), f64::from(y));
    let mut inside = false;
    for (a, b) in edges(vertices) {
        if crosses_row(a, b, py) && crossing_x(a, b, py) > px {
            inside = !inside;
        }
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Coord> {
        vec![
            Coord::new(0, 0),
            Coord::new(4, 0),
            Coord::new(4, 4),
            Coord::new(0, 4),
        ]
    }

    #[test]
    fn test_square_interior_and_exterior() {
        let sq = square();
        assert!(point_in_polygon(2, 2, &sq));
        assert!(!point_in_polygon(5, 5, &sq));
        assert!(!point_in_polygon(-1, 2, &sq));
    }

    #[test]
    fn test_square_edge_convention() {
        let sq = square();
        // Top and left edges count as inside
        assert!(point_in_polygon(0, 2, &sq));
        assert!(point_in_polygon(2, 0, &sq));
        assert!(point_in_polygon(0, 0, &sq));
        // Bottom and right edges count as outside
        assert!(!point_in_polygon(4, 2, &sq));
        assert!(!point_in_polygon(2, 4, &sq));
        assert!(!point_in_polygon(4, 4, &sq));
    }

    #[test]
    fn test_concave_notch() {
        // U shape with a notch cut down from the top between x=3 and x=6
        let u = vec![
            Coord::new(0, 0),
            Coord::new(3, 0),
            Coord::new(3, 6),
            Coord::new(6, 6),
            Coord::new(6, 0),
            Coord::new(9, 0),
            Coord::new(9, 9),
            Coord::new(0, 9),
        ];
        assert!(point_in_polygon(1, 3, &u));
        assert!(!point_in_polygon(4, 3, &u));
        assert!(point_in_polygon(7, 3, &u));
        assert!(point_in_polygon(4, 7, &u));
    }

    #[test]
    fn test_self_intersecting_bowtie() {
        let bowtie = vec![
            Coord::new(0, 0),
            Coord::new(8, 8),
            Coord::new(8, 0),
            Coord::new(0, 8),
        ];
        assert!(point_in_polygon(1, 4, &bowtie));
        assert!(point_in_polygon(6, 4, &bowtie));
        assert!(!point_in_polygon(4, 1, &bowtie));
        assert!(!point_in_polygon(4, 7, &bowtie));
    }

    #[test]
    fn test_degenerate_polygons() {
        assert!(!point_in_polygon(0, 0, &[]));
        assert!(!point_in_polygon(0, 0, &[Coord::new(0, 0)]));
        assert!(!point_in_polygon(1, 0, &[Coord::new(0, 0), Coord::new(2, 0)]));
    }

    #[test]
    fn test_coord_serde_as_pair() {
        let c: Coord = serde_json::from_str("[3, -4]").unwrap();
        assert_eq!(c, Coord::new(3, -4));
        assert_eq!(serde_json::to_string(&c).unwrap(), "[3,-4]");
    }
}
