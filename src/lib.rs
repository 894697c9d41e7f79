#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
//#![warn(missing_docs)]

//! A crate for decoding 8-bit truecolor PNG data and re-encoding a single
//! color channel of it as a new PNG.
//!
//! The two whole-buffer entry points are [`load_from_bytes`] and
//! [`save_channel_to_bytes`]. The individual pipeline stages are in the
//! [`png`] module if you want to drive them yourself.
//!
//! Zlib compression is treated as an outside collaborator: the pipeline is
//! written against the [`ZlibCodec`] trait, and the `miniz_oxide` feature (on
//! by default) provides [`MinizCodec`].

extern crate alloc;
use alloc::vec::Vec;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

mod config;
pub use config::*;

mod codec;
pub use codec::*;

mod pixel_grid;
pub use pixel_grid::*;

mod parser_helpers;

pub mod png;
use png::IHDR;

/// Decodes PNG bytes into the header info and pixels, using the given codec.
///
/// ## Failure
/// Any [`PngError`] from the stages in the [`png`] module.
pub fn load_from_bytes_with<Z: ZlibCodec>(
  bytes: &[u8], codec: &Z, config: &DecodeConfig,
) -> PngResult<(IHDR, PixelGrid)> {
  let container = png::parse_container(bytes, config)?;
  let ihdr = png::extract_metadata(&container.header)?;
  ihdr.check_dimensions(config)?;
  let zlib_data = png::assemble_idat(&container.chunks);
  let decompressed = codec.decompress(&zlib_data)?;
  log::debug!("decompressed {} bytes into {}", zlib_data.len(), decompressed.len());
  let grid = png::reconstruct(&decompressed, &ihdr)?;
  Ok((ihdr, grid))
}

/// Encodes one channel of `grid` as a new PNG, using the given codec.
///
/// The output image is RGB with the other two channels zeroed. Its dimensions
/// come from `ihdr`, which must match the grid.
///
/// ## Failure
/// * [`PngError::DimensionMismatch`] if `ihdr` and `grid` disagree on size.
/// * [`PngError::EmptyImage`] if the grid has no pixels.
pub fn save_channel_to_bytes_with<Z: ZlibCodec>(
  ihdr: &IHDR, grid: &PixelGrid, channel: Channel, codec: &Z,
) -> PngResult<Vec<u8>> {
  if (ihdr.width, ihdr.height) != (grid.width(), grid.height()) {
    return Err(PngError::DimensionMismatch {
      header_width: ihdr.width,
      header_height: ihdr.height,
      width: grid.width(),
      height: grid.height(),
    });
  }
  let scanlines = png::extract_channel(grid, channel)?;
  let zlib_data = codec.compress(&scanlines);
  log::debug!("compressed {} bytes into {}", scanlines.len(), zlib_data.len());
  Ok(png::build_container(ihdr, &zlib_data))
}

/// Decodes PNG bytes with `miniz_oxide` and the default [`DecodeConfig`].
#[cfg(feature = "miniz_oxide")]
#[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
#[inline]
pub fn load_from_bytes(bytes: &[u8]) -> PngResult<(IHDR, PixelGrid)> {
  load_from_bytes_with(bytes, &MinizCodec::default(), &DecodeConfig::default())
}

/// Encodes one channel of `grid` as a new PNG with `miniz_oxide`.
#[cfg(feature = "miniz_oxide")]
#[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
#[inline]
pub fn save_channel_to_bytes(ihdr: &IHDR, grid: &PixelGrid, channel: Channel) -> PngResult<Vec<u8>> {
  save_channel_to_bytes_with(ihdr, grid, channel, &MinizCodec::default())
}
