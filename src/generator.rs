//! End-to-end generation pipeline: configuration, centroid placement,
//! rasterization.

use {
  crate::{
    canvas::{Canvas, Color},
    cluster, distribution,
    error::{Error, Result},
    geometry::Size
  },
  rand::Rng
};

pub const DEFAULT_CENTROIDS: usize = 20;

#[derive(Debug, Copy, Clone)]
pub struct Config {
  pub size: Size,
  /// Number of Voronoi generator points.
  pub centroids: usize,
  /// Flat pre-fill before rasterization. Purely cosmetic: full-grid
  /// clustering overwrites every pixel, so it only shows through in
  /// reduced-coverage pipelines. `None` draws a random color.
  pub background: Option<Color>
}

impl Config {
  pub fn new(size: Size) -> Self {
    Self {
      size,
      centroids: DEFAULT_CENTROIDS,
      background: None
    }
  }

  /// Fail fast, before any RNG draw or allocation.
  pub fn validate(&self) -> Result<()> {
    if self.centroids == 0 {
      return Err(Error::Config("centroid count must be at least 1".into()));
    }
    if self.size.width == 0 || self.size.height == 0 {
      return Err(Error::Config(format!(
        "canvas dimensions must be non-zero, got {}x{}",
        self.size.width, self.size.height
      )));
    }
    Ok(())
  }
}

/// Run one full generation: allocate, fill the background, place centroids,
/// rasterize. All-or-nothing; the canvas is returned only fully colored.
pub fn generate(config: &Config, rng: &mut impl Rng) -> Result<Canvas> {
  config.validate()?;

  let background = config.background
    .unwrap_or_else(|| distribution::random_color(rng));
  let mut canvas = Canvas::filled(config.size, background)?;

  let centroids = distribution::centroid_set(rng, config.size, config.centroids)?;
  log::debug!("placed {} centroids on {:?}", centroids.len(), canvas);

  cluster::rasterize(&mut canvas, &centroids);
  Ok(canvas)
}
