//! The zlib collaborator.
//!
//! PNG image data is a single zlib stream split across one or more `IDAT`
//! chunks. This crate doesn't implement deflate itself, it just hands whole
//! buffers to something implementing [`ZlibCodec`]. With the `miniz_oxide`
//! feature (on by default) you get [`MinizCodec`].

use alloc::vec::Vec;

use crate::{PngError, PngResult};

/// Whole-buffer zlib compression and decompression.
pub trait ZlibCodec {
  /// Decompresses a full zlib stream.
  ///
  /// ## Failure
  /// * Malformed or incomplete input gives [`PngError::DecompressionError`].
  fn decompress(&self, zlib_data: &[u8]) -> PngResult<Vec<u8>>;

  /// Compresses bytes into a full zlib stream.
  fn compress(&self, raw: &[u8]) -> Vec<u8>;
}

/// A [`ZlibCodec`] backed by `miniz_oxide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg(feature = "miniz_oxide")]
#[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
pub struct MinizCodec {
  level: u8,
}
#[cfg(feature = "miniz_oxide")]
impl MinizCodec {
  /// Makes a codec that compresses at the given level (clamped to `0..=10`).
  #[inline]
  #[must_use]
  pub const fn with_level(level: u8) -> Self {
    Self { level: if level > 10 { 10 } else { level } }
  }

  /// The compression level in use.
  #[inline]
  #[must_use]
  pub const fn level(&self) -> u8 {
    self.level
  }
}
#[cfg(feature = "miniz_oxide")]
impl Default for MinizCodec {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self::with_level(crate::EncodeConfig::default().compression_level)
  }
}
#[cfg(feature = "miniz_oxide")]
impl From<crate::EncodeConfig> for MinizCodec {
  #[inline]
  #[must_use]
  fn from(config: crate::EncodeConfig) -> Self {
    Self::with_level(config.compression_level)
  }
}
#[cfg(feature = "miniz_oxide")]
impl ZlibCodec for MinizCodec {
  fn decompress(&self, zlib_data: &[u8]) -> PngResult<Vec<u8>> {
    miniz_oxide::inflate::decompress_to_vec_zlib(zlib_data).map_err(|e| {
      log::debug!("zlib decompression failed: {:?}", e.status);
      PngError::DecompressionError
    })
  }

  fn compress(&self, raw: &[u8]) -> Vec<u8> {
    miniz_oxide::deflate::compress_to_vec_zlib(raw, self.level)
  }
}
