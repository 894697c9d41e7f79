use super::*;

/// Size of the `IHDR` payload in bytes.
pub const IHDR_DATA_LEN: usize = 13;

/// Color type value for 8-bit-per-channel RGB without alpha.
pub const COLOR_TYPE_RGB: u8 = 2;

/// Image Header
///
/// The fields are stored exactly as they appear in the `IHDR` chunk. Only the
/// dimensions are used while decoding: pixel data is always treated as 8-bit
/// RGB, whatever `bit_depth` and `color_type` say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IHDR {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// bits per channel
  pub bit_depth: u8,
  /// pixel color type
  pub color_type: u8,
  /// always 0 (zlib) in valid PNGs
  pub compression_method: u8,
  /// always 0 (adaptive filtering) in valid PNGs
  pub filter_method: u8,
  /// 0 is no interlace, 1 is Adam7
  pub interlace_method: u8,
}
impl IHDR {
  /// The header of an 8-bit, non-interlaced RGB image.
  #[inline]
  #[must_use]
  pub const fn rgb8(width: u32, height: u32) -> Self {
    Self {
      width,
      height,
      bit_depth: 8,
      color_type: COLOR_TYPE_RGB,
      compression_method: 0,
      filter_method: 0,
      interlace_method: 0,
    }
  }

  /// Serializes the fields back into an `IHDR` payload.
  #[inline]
  #[must_use]
  pub const fn to_bytes(&self) -> [u8; IHDR_DATA_LEN] {
    let [w0, w1, w2, w3] = self.width.to_be_bytes();
    let [h0, h1, h2, h3] = self.height.to_be_bytes();
    [
      w0,
      w1,
      w2,
      w3,
      h0,
      h1,
      h2,
      h3,
      self.bit_depth,
      self.color_type,
      self.compression_method,
      self.filter_method,
      self.interlace_method,
    ]
  }

  /// Bytes of pixel data in one scanline, not counting the filter byte.
  ///
  /// `None` on overflow.
  #[inline]
  #[must_use]
  pub const fn bytes_per_scanline(&self) -> Option<usize> {
    (self.width as usize).checked_mul(BYTES_PER_PIXEL)
  }

  /// Gets the number of decompressed bytes needed to unfilter the image.
  ///
  /// Each of the `height` lines is a filter byte plus a scanline. `None` on
  /// overflow.
  #[inline]
  #[must_use]
  pub fn get_zlib_decompression_requirement(&self) -> Option<usize> {
    self.bytes_per_scanline()?.checked_add(1)?.checked_mul(self.height as usize)
  }

  /// Checks that the dimensions are usable.
  ///
  /// ## Failure
  /// * [`PngError::HeaderNotRead`] if the width or height is 0.
  /// * [`PngError::DimensionsTooLarge`] if either is over the config limit.
  pub fn check_dimensions(&self, config: &DecodeConfig) -> PngResult<()> {
    if self.width == 0 || self.height == 0 {
      Err(PngError::HeaderNotRead)
    } else if self.width > config.max_dimension || self.height > config.max_dimension {
      Err(PngError::DimensionsTooLarge)
    } else {
      Ok(())
    }
  }
}
impl TryFrom<&[u8]> for IHDR {
  type Error = PngError;
  /// Parses an `IHDR` payload. Bytes past the first 13 are ignored.
  #[inline]
  fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
    match value {
      [w0, w1, w2, w3, h0, h1, h2, h3, bit_depth, color_type, compression_method, filter_method, interlace_method, ..] => {
        Ok(Self {
          width: u32::from_be_bytes([*w0, *w1, *w2, *w3]),
          height: u32::from_be_bytes([*h0, *h1, *h2, *h3]),
          bit_depth: *bit_depth,
          color_type: *color_type,
          compression_method: *compression_method,
          filter_method: *filter_method,
          interlace_method: *interlace_method,
        })
      }
      _ => Err(PngError::InvalidHeader),
    }
  }
}

/// Parses the header chunk into an [`IHDR`].
///
/// This only slices fields out of the payload, it doesn't validate them.
///
/// ## Failure
/// * [`PngError::InvalidHeader`] if the chunk isn't tagged `IHDR` or the
///   payload is shorter than 13 bytes.
pub fn extract_metadata(chunk: &PngRawChunk<'_>) -> PngResult<IHDR> {
  if chunk.type_ != PngRawChunkType::IHDR {
    return Err(PngError::InvalidHeader);
  }
  let ihdr = IHDR::try_from(chunk.data)?;
  debug!("{:?}", ihdr);
  Ok(ihdr)
}
