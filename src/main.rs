use {
  voronoi_cluster::{
    generator::{self, Config},
    geometry::Size,
    ppm,
    profile
  },
  anyhow::Result,
  rand::{RngCore, SeedableRng}
};

fn main() -> Result<()> {
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("info")
  ).init();

  let seed = rand::rngs::OsRng.next_u64();
  let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);
  log::info!("seed: {seed}");

  let config = Config::new(Size::new(800, 600));
  let path = format!("cluster-{seed}.ppm");

  profile!("generate", {
    let canvas = generator::generate(&config, &mut rng)?;
    ppm::save(&canvas, &path)?;
  });
  log::info!("saved {path}");
  Ok(())
}
