use crate::canvas::PixelBuffer;
use crate::color::Color;

/// Walk the Bresenham path from (x0, y0) to (x1, y1), calling `plot` once per
/// stepped pixel
///
/// Lines with |dx| >= |dy| step along x, the rest along y. The major axis is
/// always walked in increasing order, so swapping the endpoints yields the
/// same pixels. A zero-length line plots its single point.
pub fn bresenham(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: impl FnMut(i32, i32)) {
    let dx = (i64::from(x1) - i64::from(x0)).abs();
    let dy = (i64::from(y1) - i64::from(y0)).abs();
    if dx >= dy {
        if x0 > x1 {
            step_low(x1, y1, x0, y0, &mut plot);
        } else {
            step_low(x0, y0, x1, y1, &mut plot);
        }
    } else if y0 > y1 {
        step_high(x1, y1, x0, y0, &mut plot);
    } else {
        step_high(x0, y0, x1, y1, &mut plot);
    }
}

/// Low-slope walk: x advances every step, y when the error turns positive
fn step_low(x0: i32, y0: i32, x1: i32, y1: i32, plot: &mut impl FnMut(i32, i32)) {
    let dx = i64::from(x1) - i64::from(x0);
    let mut dy = i64::from(y1) - i64::from(y0);
    let mut yi = 1;
    if dy < 0 {
        yi = -1;
        dy = -dy;
    }
    let mut err = 2 * dy - dx;
    let mut y = y0;

    for x in x0..=x1 {
        plot(x, y);
        if err > 0 {
            y += yi;
            err += 2 * (dy - dx);
        } else {
            err += 2 * dy;
        }
    }
}

/// High-slope walk: y advances every step, x when the error turns positive
fn step_high(x0: i32, y0: i32, x1: i32, y1: i32, plot: &mut impl FnMut(i32, i32)) {
    let mut dx = i64::from(x1) - i64::from(x0);
    let dy = i64::from(y1) - i64::from(y0);
    let mut xi = 1;
    if dx < 0 {
        xi = -1;
        dx = -dx;
    }
    let mut err = 2 * dx - dy;
    let mut x = x0;

    for y in y0..=y1 {
        plot(x, y);
        if err > 0 {
            x += xi;
            err += 2 * (dx - dy);
        } else {
            err += 2 * dx;
        }
    }
}

impl PixelBuffer {
    /// Draw a 1px line using Bresenham's algorithm
    pub fn draw_thin_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        bresenham(x0, y0, x1, y1, |x, y| self.set_color(x, y, color));
    }

    /// Draw a line with variable thickness
    ///
    /// Stamps a filled disk of radius `thickness / 2` on every Bresenham step.
    /// Consecutive steps are at most one diagonal apart, so the disks always
    /// overlap and the stroke has no gaps. Thickness of 1 or less draws a
    /// thin line.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, thickness: i32, color: Color) {
        if thickness <= 1 {
            self.draw_thin_line(x0, y0, x1, y1, color);
            return;
        }

        let radius = thickness / 2;
        bresenham(x0, y0, x1, y1, |x, y| self.fill_disk(x, y, radius, color));
    }
}
