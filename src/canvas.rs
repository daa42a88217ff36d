//! Owned pixel storage.
//!
//! [`Canvas`] is a contiguous row-major buffer with a `(row, col) → offset`
//! accessor, replacing raw 2D arrays: indexing is bounds-checked, and the
//! allocation is released when the value goes out of scope.

use {
  crate::{
    error::{Error, Result},
    geometry::{Point, Size}
  },
  rayon::prelude::*,
  std::fmt::{self, Debug, Formatter}
};

/// Packed 32-bit color, little-endian channel order:
/// byte 0 = red, byte 1 = green, byte 2 = blue, byte 3 = alpha.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
  pub const RED: Color = Color(0xFF0000FF);
  pub const GREEN: Color = Color(0xFF00FF00);
  pub const BLUE: Color = Color(0xFFFF0000);
  pub const BLACK: Color = Color(0xFF000000);
  pub const PASTEL: Color = Color(0xFFF2DDF3);

  pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
    Color(
      r as u32
        | (g as u32) << 8
        | (b as u32) << 16
        | (a as u32) << 24
    )}

  pub fn r(self) -> u8 { self.0 as u8 }
  pub fn g(self) -> u8 { (self.0 >> 8) as u8 }
  pub fn b(self) -> u8 { (self.0 >> 16) as u8 }
  pub fn a(self) -> u8 { (self.0 >> 24) as u8 }

  /// The three low-order channel bytes, as serialized (alpha dropped).
  pub fn rgb_bytes(self) -> [u8; 3] {
    [self.r(), self.g(), self.b()]
  }
}

impl Debug for Color {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "Color({:#010x})", self.0)
  }
}

/// Row-major pixel buffer of fixed dimensions.
///
/// Lifecycle: allocate → fill → serialize → drop. Exclusively owned by one
/// generation run; handed to the serializer read-only.
pub struct Canvas {
  data: Vec<Color>,
  size: Size
}

impl Canvas {
  /// Allocate a canvas pre-filled with `color`.
  ///
  /// Allocation failure surfaces as [`Error::Alloc`](crate::error::Error)
  /// instead of aborting; at 1200×1200 and beyond the pixel buffer is the one
  /// allocation that can plausibly fail.
  pub fn filled(size: Size, color: Color) -> Result<Self> {
    let len = (size.width as usize)
      .checked_mul(size.height as usize)
      .ok_or_else(|| Error::Config(format!(
        "canvas area {}x{} overflows the address space",
        size.width, size.height
      )))?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)?;
    data.resize(len, color);
    Ok(Self { data, size })
  }

  pub fn new(size: Size) -> Result<Self> {
    Self::filled(size, Color::BLACK)
  }

  pub fn size(&self) -> Size { self.size }
  pub fn width(&self) -> u32 { self.size.width }
  pub fn height(&self) -> u32 { self.size.height }

  fn offset(&self, point: Point) -> usize {
    assert!(
      point.x < self.size.width && point.y < self.size.height,
      "pixel {:?} outside of {:?}", point, self.size
    );
    point.y as usize * self.size.width as usize + point.x as usize
  }

  pub fn pixel(&self, point: Point) -> Color {
    self.data[self.offset(point)]
  }

  pub fn pixel_mut(&mut self, point: Point) -> &mut Color {
    let offset = self.offset(point);
    &mut self.data[offset]
  }

  pub fn fill(&mut self, color: Color) {
    self.data.fill(color);
  }

  /// Rows in top-to-bottom order, each `width` pixels long.
  pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
    self.data.chunks_exact(self.size.width as usize)
  }

  /// Disjoint mutable row bands, for parallel rasterization.
  /// Each worker writes only to its own rows; no locking is required.
  pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = (usize, &mut [Color])> {
    self.data
      .par_chunks_exact_mut(self.size.width as usize)
      .enumerate()
  }

  /// All pixels in row-major order, with their coordinates.
  pub fn pixels(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
    let width = self.size.width as usize;
    self.data.iter().enumerate()
      .map(move |(i, color)| (
        Point::new((i % width) as u32, (i / width) as u32),
        *color
      ))
  }
}

impl Debug for Canvas {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    use humansize::{FileSize, file_size_opts as options};

    f.debug_struct("Canvas")
      .field("width", &self.size.width)
      .field("height", &self.size.height)
      .field("size", &(self.data.capacity() * std::mem::size_of::<Color>())
        .file_size(options::BINARY).unwrap())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn filled_sets_every_pixel() {
    let canvas = Canvas::filled(Size::new(4, 3), Color::PASTEL).unwrap();
    assert_eq!(canvas.pixels().count(), 12);
    assert!(canvas.pixels().all(|(_, color)| color == Color::PASTEL));
  }

  #[test] fn offset_is_row_major() {
    let mut canvas = Canvas::new(Size::new(3, 2)).unwrap();
    *canvas.pixel_mut(Point::new(2, 1)) = Color::RED;
    let last_row = canvas.rows().last().unwrap();
    assert_eq!(last_row[2], Color::RED);
    assert_eq!(canvas.pixel(Point::new(2, 1)), Color::RED);
  }

  #[test] #[should_panic] fn out_of_bounds_access_panics() {
    let canvas = Canvas::new(Size::new(2, 2)).unwrap();
    canvas.pixel(Point::new(2, 0));
  }

  #[test] fn channel_extraction() {
    let color = Color::from_rgba(0x12, 0x34, 0x56, 0x78);
    assert_eq!(color.0, 0x78563412);
    assert_eq!(color.rgb_bytes(), [0x12, 0x34, 0x56]);
    assert_eq!(color.a(), 0x78);
    assert_eq!(Color::RED.rgb_bytes(), [0xff, 0, 0]);
    assert_eq!(Color::BLUE.rgb_bytes(), [0, 0, 0xff]);
  }
}
