//! .
//!
//! The origin of coordinate system is in top-left corner. All coordinates are
//! discrete pixels: `x` is the column, `y` is the row.

use euclid::{Point2D, Size2D};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type Point = Point2D<u32, PixelSpace>;
pub type Size = Size2D<u32, PixelSpace>;

/// Squared euclidean distance between two pixels.
///
/// Distances are only ever compared against each other, and squaring is a
/// monotonic transform on non-negative reals, so the square root is never
/// taken. Exact for coordinates below 2³¹, far beyond any allocatable canvas.
pub fn distance_squared(p: Point, q: Point) -> u64 {
  let dx = p.x as i64 - q.x as i64;
  let dy = p.y as i64 - q.y as i64;
  (dx * dx + dy * dy) as u64
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn distance_is_symmetric() {
    let p = Point::new(3, 7);
    let q = Point::new(10, 2);
    assert_eq!(distance_squared(p, q), distance_squared(q, p));
    assert_eq!(distance_squared(p, q), 49 + 25);
  }

  #[test] fn distance_to_self_is_zero() {
    let p = Point::new(1200, 1200);
    assert_eq!(distance_squared(p, p), 0);
  }

  #[test] fn distance_does_not_overflow_on_extremes() {
    let max = (1u32 << 31) - 1;
    let p = Point::new(0, 0);
    let q = Point::new(max, max);
    assert_eq!(distance_squared(p, q), 2 * (max as u64).pow(2));
  }
}
