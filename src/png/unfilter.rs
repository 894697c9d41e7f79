//! Scanline reconstruction.
//!
//! From the PNG spec:
//!
//! > Filters are applied to **bytes**, not to pixels, regardless of the bit
//! > depth or color type of the image.
//!
//! Each filter predicts a byte from `a` (the byte one pixel to the left), `b`
//! (the byte directly above), and `c` (the byte above and one pixel to the
//! left). Anything off the left edge or above the first line counts as 0.

use super::*;

use core::iter::repeat;

static ZERO_PIXEL: [u8; BYTES_PER_PIXEL] = [0; BYTES_PER_PIXEL];

/// The per-line filter types of PNG filter method 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum FilterType {
  /// The bytes are stored as-is.
  None = 0,
  /// Predicts `a`.
  Sub = 1,
  /// Predicts `b`.
  Up = 2,
  /// Predicts `floor((a + b) / 2)`.
  Average = 3,
  /// Predicts whichever of `a`, `b`, or `c` is closest to `a + b - c`.
  Paeth = 4,
}
impl FilterType {
  /// The value that was subtracted from the byte when the line was filtered.
  #[inline]
  #[must_use]
  pub const fn predict(self, a: u8, b: u8, c: u8) -> u8 {
    match self {
      Self::None => 0,
      Self::Sub => a,
      Self::Up => b,
      Self::Average => ((a as u16 + b as u16) / 2) as u8,
      Self::Paeth => paeth_predict(a, b, c),
    }
  }
}
impl TryFrom<u8> for FilterType {
  type Error = ();
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => Self::None,
      1 => Self::Sub,
      2 => Self::Up,
      3 => Self::Average,
      4 => Self::Paeth,
      _ => return Err(()),
    })
  }
}

/// The Paeth predictor.
#[inline]
#[must_use]
pub const fn paeth_predict(a: u8, b: u8, c: u8) -> u8 {
  let a_ = a as i32;
  let b_ = b as i32;
  let c_ = c as i32;
  let p: i32 = a_ + b_ - c_;
  let pa = (p - a_).abs();
  let pb = (p - b_).abs();
  let pc = (p - c_).abs();
  // Note: the order of these tests decides ties, and must not change.
  if pa <= pb && pa <= pc {
    a
  } else if pb <= pc {
    b
  } else {
    c
  }
}

fn unfilter_with<'p, I>(filter: FilterType, line: &mut [u8], above: I)
where
  I: Iterator<Item = &'p [u8]>,
{
  let mut a_bytes: &[u8] = &ZERO_PIXEL;
  let mut c_bytes: &[u8] = &ZERO_PIXEL;
  for (x_bytes, b_bytes) in line.chunks_exact_mut(BYTES_PER_PIXEL).zip(above) {
    for (((x, a), b), c) in x_bytes.iter_mut().zip(a_bytes).zip(b_bytes).zip(c_bytes) {
      *x = x.wrapping_add(filter.predict(*a, *b, *c));
    }
    a_bytes = x_bytes;
    c_bytes = b_bytes;
  }
}

/// Unfilters one line of RGB8 pixel data in place.
///
/// * `line` is the scanline without its filter byte.
/// * `previous` is the already unfiltered line above, or `None` for the first
///   line of the image.
///
/// Work goes strictly left to right, since `a` is a byte of the same line
/// that must already be unfiltered.
pub fn unfilter_line(filter: FilterType, line: &mut [u8], previous: Option<&[u8]>) {
  debug_assert_eq!(line.len() % BYTES_PER_PIXEL, 0);
  match (filter, previous) {
    (FilterType::None, _) => (),
    (_, Some(prev)) => {
      debug_assert_eq!(prev.len(), line.len());
      unfilter_with(filter, line, prev.chunks_exact(BYTES_PER_PIXEL))
    }
    (_, None) => unfilter_with(filter, line, repeat(&ZERO_PIXEL[..])),
  }
}

/// Turns decompressed image data into the final pixels.
///
/// The data is `height` lines of `1 + width * 3` bytes each: a filter type
/// byte and then the filtered RGB8 pixel bytes. Data past that is ignored.
///
/// ## Failure
/// * [`PngError::HeaderNotRead`] if the width or height is 0.
/// * [`PngError::DimensionsTooLarge`] if the data size can't be computed.
/// * [`PngError::TruncatedImageData`] if `decompressed` is too short.
/// * [`PngError::UnsupportedFilterType`] if a line's filter byte is over 4.
///
/// Either the whole image is reconstructed or nothing is.
pub fn reconstruct(decompressed: &[u8], ihdr: &IHDR) -> PngResult<PixelGrid> {
  if ihdr.width == 0 || ihdr.height == 0 {
    return Err(PngError::HeaderNotRead);
  }
  let bytes_per_scanline = ihdr.bytes_per_scanline().ok_or(PngError::DimensionsTooLarge)?;
  let expected =
    ihdr.get_zlib_decompression_requirement().ok_or(PngError::DimensionsTooLarge)?;
  if decompressed.len() < expected {
    return Err(PngError::TruncatedImageData { expected, actual: decompressed.len() });
  }
  if decompressed.len() > expected {
    warn!("ignoring {} surplus bytes of image data", decompressed.len() - expected);
  }

  let pixel_count = (ihdr.width as usize) * (ihdr.height as usize);
  let mut pixels: Vec<RGB8> = vec![ZERO_PIXEL; pixel_count];
  let lines = bytemuck::cast_slice_mut::<RGB8, u8>(&mut pixels).chunks_exact_mut(bytes_per_scanline);
  let filterlines = decompressed[..expected].chunks_exact(bytes_per_scanline + 1);

  let mut previous: Option<&[u8]> = None;
  for (y, (filterline, line)) in filterlines.zip(lines).enumerate() {
    let (f, filtered) = (filterline[0], &filterline[1..]);
    let filter = FilterType::try_from(f)
      .map_err(|_| PngError::UnsupportedFilterType { row: y as u32, filter: f })?;
    line.copy_from_slice(filtered);
    unfilter_line(filter, line, previous);
    let line: &[u8] = line;
    previous = Some(line);
  }

  Ok(PixelGrid { width: ihdr.width, height: ihdr.height, pixels })
}
