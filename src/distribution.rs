//! Random placement of centroids.
//!
//! Everything here draws from an explicitly passed RNG handle; there is no
//! process-wide generator. Given the same seed and call order the output is
//! fully deterministic, which the reproducibility tests rely on.

use {
  crate::{
    canvas::Color,
    cluster::{Centroid, CentroidSet},
    error::{Error, Result},
    geometry::{Point, Size}
  },
  rand::Rng
};

/// Uniform over `[0, width) × [0, height)`.
pub fn random_point(rng: &mut impl Rng, size: Size) -> Point {
  Point::new(
    rng.gen_range(0..size.width),
    rng.gen_range(0..size.height)
  )
}

/// Each channel uniform over `[0, 255]`.
pub fn random_color(rng: &mut impl Rng) -> Color {
  Color::from_rgba(rng.gen(), rng.gen(), rng.gen(), rng.gen())
}

/// Exactly `n` independent draws; positions may repeat.
pub fn random_points(rng: &mut impl Rng, size: Size, n: usize) -> Vec<Point> {
  (0..n).map(|_| random_point(rng, size)).collect()
}

/// Exactly `n` independent draws; colors may repeat.
pub fn random_colors(rng: &mut impl Rng, n: usize) -> Vec<Color> {
  (0..n).map(|_| random_color(rng)).collect()
}

/// Draw `count` points, then `count` colors, and zip them pairwise by index.
///
/// The draw order (all points first) is part of the contract: it pins the
/// mapping from seed to output.
pub fn centroid_set(rng: &mut impl Rng, size: Size, count: usize) -> Result<CentroidSet> {
  if count == 0 {
    return Err(Error::Config("centroid count must be at least 1".into()));
  }
  let points = random_points(rng, size, count);
  let colors = random_colors(rng, count);
  CentroidSet::new(
    points.into_iter()
      .zip(colors)
      .map(|(point, color)| Centroid { point, color })
      .collect()
  )
}
