/// Generate a Voronoi clustering of 20 random centroids and save it as a
/// binary pixmap. Fixed seed, so the output is always the same picture.

use {
  voronoi_cluster::{
    generator::{self, Config},
    geometry::Size,
    ppm
  },
  anyhow::Result,
  rand::SeedableRng
};

fn main() -> Result<()> {
  let path = "cluster.ppm";
  let mut rng = rand_pcg::Pcg64::seed_from_u64(1001);

  let config = Config::new(Size::new(800, 600));
  let canvas = generator::generate(&config, &mut rng)?;

  ppm::save(&canvas, path)?;
  println!("saved {path}: {canvas:?}");
  Ok(())
}
