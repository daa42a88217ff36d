//! Procedural raster generation by nearest-centroid clustering.
//!
//! A small set of randomly placed, randomly colored centroids partitions the
//! grid into Voronoi cells: every pixel takes the color of the centroid
//! nearest to it by euclidean distance. The finished buffer is serialized as
//! a binary pixmap (P6 PPM).
//!
//! The crate is split into [`cluster`] for the classifier and rasterizer,
//! [`distribution`] for seeded random placement, [`drawing`] for optional
//! marker stamping, and [`ppm`] for serialization.
//!
//! # Basic usage
//! ```no_run
//! use {
//!   voronoi_cluster::{
//!     error::Result,
//!     generator::{self, Config},
//!     geometry::Size,
//!     ppm
//!   },
//!   rand::SeedableRng
//! };
//!
//! fn main() -> Result<()> {
//!   // An explicitly seeded RNG is threaded through generation, so the same
//!   // seed always reproduces the same image.
//!   let mut rng = rand_pcg::Pcg64::seed_from_u64(1001);
//!
//!   let config = Config::new(Size::new(800, 600));
//!   let canvas = generator::generate(&config, &mut rng)?;
//!
//!   ppm::save(&canvas, "out.ppm")?;
//!   Ok(())
//! }
//! ```
//!
//! Rasterization is the dominant cost — O(height × width × k) distance
//! evaluations — and each pixel is classified independently, so the
//! rasterizer splits the buffer into disjoint row bands and processes them on
//! rayon workers. The [`CentroidSet`](cluster::CentroidSet) is read-only
//! shared state during that sweep.

pub mod error;
pub mod geometry;
pub mod canvas;
pub mod cluster;
pub mod distribution;
pub mod drawing;
pub mod generator;
pub mod ppm;
mod util;
