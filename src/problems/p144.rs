//! Laser beam reflections inside the white cell 4x² + y² = 100.
//!
//! The beam enters at (0, 10.1) and first hits (1.4, −9.6). At each hit the
//! direction is mirrored about the ellipse normal ∇(4x² + y²) = (8x, 2y);
//! the next hit is the other root of the line/ellipse quadratic. The beam
//! leaves through the gap −0.01 ≤ x ≤ 0.01 at the top.

use crate::answer::Answer;

/// Number of reflections before the beam exits, starting from `from` and
/// first hitting `hit`.
pub fn count_reflections(from: (f64, f64), hit: (f64, f64)) -> u64 {
    let (mut x0, mut y0) = from;
    let (mut x1, mut y1) = hit;
    let mut reflections = 0;
    while !(x1.abs() <= 0.01 && y1 > 0.0) {
        reflections += 1;
        let (dx, dy) = (x1 - x0, y1 - y0);
        let (nx, ny) = (4.0 * x1, y1);
        let d = (dx * nx + dy * ny) / (nx * nx + ny * ny);
        let (rx, ry) = (dx - 2.0 * d * nx, dy - 2.0 * d * ny);
        // 4(x1 + t·rx)² + (y1 + t·ry)² = 100 has roots t = 0 and:
        let t = -(8.0 * x1 * rx + 2.0 * y1 * ry) / (4.0 * rx * rx + ry * ry);
        (x0, y0) = (x1, y1);
        (x1, y1) = (x1 + t * rx, y1 + t * ry);
    }
    reflections
}

pub fn solve() -> Answer {
    Answer::from(count_reflections((0.0, 10.1), (1.4, -9.6)))
}
