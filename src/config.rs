//! Runtime knobs for decoding and encoding.

/// Options for the decode pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeConfig {
  /// Check each chunk's declared CRC while scanning.
  ///
  /// Off by default: PNG decoders are expected to tolerate damage in chunks
  /// they don't care about, and a mismatch here rejects the whole file.
  pub verify_crc: bool,

  /// Largest accepted width or height.
  ///
  /// Checked as soon as the header is parsed, before any buffer for the pixel
  /// data gets allocated.
  pub max_dimension: u32,
}
impl DecodeConfig {
  /// The default dimension limit.
  pub const DEFAULT_MAX_DIMENSION: u32 = 17_000;

  /// Same as the default config, but with CRC checks turned on.
  #[inline]
  #[must_use]
  pub const fn strict() -> Self {
    Self { verify_crc: true, max_dimension: Self::DEFAULT_MAX_DIMENSION }
  }
}
impl Default for DecodeConfig {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self { verify_crc: false, max_dimension: Self::DEFAULT_MAX_DIMENSION }
  }
}

/// Options for the encode pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodeConfig {
  /// Zlib compression level, 0 (store) through 10 (slowest).
  pub compression_level: u8,
}
impl Default for EncodeConfig {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self { compression_level: 6 }
  }
}
