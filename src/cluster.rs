//! Nearest-centroid clustering, the core of the crate.
//!
//! A [`CentroidSet`] partitions the plane into Voronoi cells; [`rasterize`]
//! colors every pixel of a [`Canvas`] after the nearest centroid.

use {
  crate::{
    canvas::{Canvas, Color},
    error::{Error, Result},
    geometry::{Point, distance_squared}
  },
  rayon::prelude::*
};


/// A Voronoi generator point: pixel position paired with the color of its
/// attraction basin. Read-only once created.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Centroid {
  pub point: Point,
  pub color: Color
}

/// Non-empty ordered sequence of centroids.
///
/// Never mutated after construction, so it can be shared read-only across
/// rasterizer workers.
#[derive(Debug, Clone)]
pub struct CentroidSet(Vec<Centroid>);

impl CentroidSet {
  /// An empty set would leave the distance search without candidates,
  /// and is rejected up front.
  pub fn new(centroids: Vec<Centroid>) -> Result<Self> {
    if centroids.is_empty() {
      return Err(Error::Config("centroid set must not be empty".into()));
    }
    Ok(Self(centroids))
  }

  pub fn len(&self) -> usize { self.0.len() }
  /// Always `false`; emptiness is ruled out at construction.
  pub fn is_empty(&self) -> bool { false }

  pub fn iter(&self) -> impl Iterator<Item = &Centroid> {
    self.0.iter()
  }

  /// The centroid closest to `query` by euclidean distance.
  ///
  /// Linear scan, O(k). Comparison uses squared distances — the ordering is
  /// identical and no square root is ever needed. The strict `<` never
  /// replaces an established minimum on a tie, so equidistant centroids
  /// always resolve to the lowest index.
  pub fn nearest(&self, query: Point) -> &Centroid {
    let mut best = &self.0[0];
    let mut best_distance = distance_squared(best.point, query);
    for centroid in &self.0[1..] {
      let distance = distance_squared(centroid.point, query);
      if distance < best_distance {
        best = centroid;
        best_distance = distance;
      }
    }
    best
  }
}

/// Color every pixel of `canvas` after its nearest centroid.
///
/// This is the dominant cost of a run: O(height × width × k) distance
/// evaluations — ~28.8M for a 1200×1200 grid with k = 20. Each pixel is
/// classified independently, so rows are processed as disjoint parallel
/// bands; rayon joins them before this function returns.
pub fn rasterize(canvas: &mut Canvas, centroids: &CentroidSet) {
  canvas.par_rows_mut()
    .for_each(|(y, row)| {
      for (x, pixel) in row.iter_mut().enumerate() {
        let query = Point::new(x as u32, y as u32);
        *pixel = centroids.nearest(query).color;
      }
    });
}
