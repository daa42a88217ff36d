/// Skip full rasterization and only mark the centroids themselves: each one
/// as a square in its own color on a flat background, plus a few scattered
/// black discs. Shapes are substituted through the `Shape` trait without
/// touching the rest of the pipeline; with reduced coverage like this, the
/// background pre-fill stays visible.

use {
  voronoi_cluster::{
    canvas::{Canvas, Color},
    distribution,
    drawing::{self, Disc, Square},
    geometry::Size,
    ppm
  },
  anyhow::Result,
  rand::SeedableRng
};

fn main() -> Result<()> {
  let path = "markers.ppm";
  let mut rng = rand_pcg::Pcg64::seed_from_u64(1001);
  let size = Size::new(800, 600);

  let centroids = distribution::centroid_set(&mut rng, size, 20)?;
  let mut canvas = Canvas::filled(size, Color::PASTEL)?;

  drawing::stamp_centroids(&mut canvas, &centroids, &Square, 15);
  drawing::stamp_random(&mut canvas, &mut rng, &Disc, 10, 9, Color::BLACK);

  ppm::save(&canvas, path)?;
  println!("saved {path}");
  Ok(())
}
