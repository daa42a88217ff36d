//! Binary pixmap (P6) serialization.
//!
//! The format is a text header `"P6\n<width> <height> 255\n"` followed by
//! raw RGB triples in row-major order, one byte per channel, alpha dropped.
//! Output goes through a temporary sibling path renamed into place on
//! success, so an IO failure never leaves a partial file behind.

use {
  crate::{
    canvas::Canvas,
    error::{Error, Result}
  },
  std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf}
  }
};

const MAX_CHANNEL: u32 = 255;

/// Write the full pixmap to `writer`.
pub fn encode(canvas: &Canvas, writer: &mut impl Write) -> Result<()> {
  write!(writer, "P6\n{} {} {}\n", canvas.width(), canvas.height(), MAX_CHANNEL)?;
  for row in canvas.rows() {
    for color in row {
      writer.write_all(&color.rgb_bytes())?;
    }
  }
  Ok(())
}

/// Serialize `canvas` to `path`, overwriting any existing file.
///
/// Generation work is never retried here; a failure aborts with the original
/// file (if any) intact.
pub fn save(canvas: &Canvas, path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  let staging = staging_path(path);
  {
    let file = fs::File::create(&staging)?;
    let mut writer = BufWriter::new(file);
    encode(canvas, &mut writer)?;
    writer.flush()?;
  }
  fs::rename(&staging, path)?;
  Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
  let mut staging = path.as_os_str().to_owned();
  staging.push(".tmp");
  PathBuf::from(staging)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Header {
  pub width: u32,
  pub height: u32,
  pub max_value: u32
}

/// Parse a P6 header, returning it together with the offset of the first
/// pixel byte.
pub fn parse_header(bytes: &[u8]) -> Result<(Header, usize)> {
  if bytes.len() < 2 || &bytes[..2] != b"P6" {
    return Err(Error::Format("missing P6 magic".into()));
  }
  let mut pos = 2;
  let mut fields = [0u32; 3];
  for field in fields.iter_mut() {
    while bytes.get(pos).map_or(false, |b| b.is_ascii_whitespace()) {
      pos += 1;
    }
    let start = pos;
    while bytes.get(pos).map_or(false, |b| b.is_ascii_digit()) {
      pos += 1;
    }
    *field = std::str::from_utf8(&bytes[start..pos]).ok()
      .and_then(|digits| digits.parse().ok())
      .ok_or_else(|| Error::Format("truncated or non-numeric header field".into()))?;
  }
  // exactly one whitespace byte separates the header from the pixel data
  if !bytes.get(pos).map_or(false, |b| b.is_ascii_whitespace()) {
    return Err(Error::Format("missing header terminator".into()));
  }
  pos += 1;
  let [width, height, max_value] = fields;
  Ok((Header { width, height, max_value }, pos))
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::{
      canvas::Color,
      geometry::{Point, Size}
    }
  };

  fn sample_canvas() -> Canvas {
    let mut canvas = Canvas::filled(Size::new(3, 2), Color::BLACK).unwrap();
    *canvas.pixel_mut(Point::new(0, 0)) = Color::RED;
    *canvas.pixel_mut(Point::new(2, 1)) = Color::from_rgba(1, 2, 3, 0xaa);
    canvas
  }

  #[test] fn header_round_trip() {
    let mut bytes = vec![];
    encode(&sample_canvas(), &mut bytes).unwrap();
    let (header, body) = parse_header(&bytes).unwrap();
    assert_eq!(header, Header { width: 3, height: 2, max_value: 255 });
    assert_eq!(bytes.len() - body, 3 * 2 * 3);
  }

  #[test] fn body_is_row_major_rgb_with_alpha_dropped() {
    let canvas = sample_canvas();
    let mut bytes = vec![];
    encode(&canvas, &mut bytes).unwrap();
    let (_, body) = parse_header(&bytes).unwrap();
    let expected: Vec<u8> = canvas.pixels()
      .flat_map(|(_, color)| color.rgb_bytes())
      .collect();
    assert_eq!(&bytes[body..], &expected[..]);
    // alpha 0xaa of the last pixel must not appear
    assert_eq!(&bytes[bytes.len() - 3..], &[1, 2, 3]);
  }

  #[test] fn rejects_foreign_magic() {
    assert!(matches!(parse_header(b"P3\n1 1 255\n"), Err(Error::Format(_))));
    assert!(matches!(parse_header(b"P6\n1 1 "), Err(Error::Format(_))));
  }

  #[test] fn save_overwrites_and_leaves_no_staging_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.ppm");
    fs::write(&path, b"stale").unwrap();

    save(&sample_canvas(), &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    let (header, _) = parse_header(&bytes).unwrap();
    assert_eq!((header.width, header.height), (3, 2));
    assert!(!path.with_extension("ppm.tmp").exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
  }
}
