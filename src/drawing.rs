//! Marker drawing, decoupled from clustering.
//!
//! A [`Shape`] stamps a filled marker of a given color and size onto the
//! canvas. The generation pipeline only ever talks to the trait, so
//! alternative shapes can be substituted without touching it.

use {
  crate::{
    canvas::{Canvas, Color},
    cluster::CentroidSet,
    distribution,
    geometry::{Point, distance_squared}
  },
  itertools::iproduct,
  rand::Rng
};

pub trait Shape {
  /// Stamp a filled marker centered at `center`. `size` is the full width of
  /// the marker's bounding box in pixels.
  fn draw(&self, canvas: &mut Canvas, center: Point, color: Color, size: u32);
}

/// Axis-aligned filled square.
#[derive(Debug, Copy, Clone)]
pub struct Square;

/// Filled disc inscribed in the square of the same size.
#[derive(Debug, Copy, Clone)]
pub struct Disc;

// Bounding box of a marker, clipped to the canvas. Markers overlapping an
// edge are cut off there rather than wrapped to the opposite side.
fn clipped_bounds(canvas: &Canvas, center: Point, size: u32) -> Option<(Point, Point)> {
  if canvas.width() == 0 || canvas.height() == 0 {
    return None;
  }
  let radius = size / 2;
  let min = Point::new(
    center.x.saturating_sub(radius),
    center.y.saturating_sub(radius)
  );
  let max = Point::new(
    (center.x.saturating_add(radius)).min(canvas.width() - 1),
    (center.y.saturating_add(radius)).min(canvas.height() - 1)
  );
  (min.x <= max.x && min.y <= max.y).then_some((min, max))
}

impl Shape for Square {
  fn draw(&self, canvas: &mut Canvas, center: Point, color: Color, size: u32) {
    let Some((min, max)) = clipped_bounds(canvas, center, size) else { return };
    iproduct!(min.y..=max.y, min.x..=max.x)
      .for_each(|(y, x)| {
        *canvas.pixel_mut(Point::new(x, y)) = color;
      });
  }
}

impl Shape for Disc {
  fn draw(&self, canvas: &mut Canvas, center: Point, color: Color, size: u32) {
    let Some((min, max)) = clipped_bounds(canvas, center, size) else { return };
    let radius_sq = (size as u64 / 2).pow(2);
    iproduct!(min.y..=max.y, min.x..=max.x)
      .filter(|&(y, x)| distance_squared(Point::new(x, y), center) <= radius_sq)
      .for_each(|(y, x)| {
        *canvas.pixel_mut(Point::new(x, y)) = color;
      });
  }
}

/// Mark every centroid with its own color.
pub fn stamp_centroids(
  canvas: &mut Canvas,
  centroids: &CentroidSet,
  shape: &dyn Shape,
  size: u32
) {
  for centroid in centroids.iter() {
    shape.draw(canvas, centroid.point, centroid.color, size);
  }
}

/// Scatter `count` markers of a single color at random points.
pub fn stamp_random(
  canvas: &mut Canvas,
  rng: &mut impl Rng,
  shape: &dyn Shape,
  count: usize,
  size: u32,
  color: Color
) {
  for point in distribution::random_points(rng, canvas.size(), count) {
    shape.draw(canvas, point, color, size);
  }
}
