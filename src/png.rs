#![forbid(unsafe_code)]

//! Module for working with PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! ## Library Design Assumptions
//!
//! * The entire PNG encoded data stream is a single byte slice, and each stage
//!   of decoding produces one complete output buffer. There's no streaming.
//! * Pixel data is 8-bit RGB (color type 2), non-interlaced. The header's
//!   `bit_depth`, `color_type`, and `interlace_method` are read and reported
//!   but the unfiltering always works with 3 bytes per pixel.
//!
//! ## Decoding Step By Step
//!
//! 1) [`parse_container`] checks the signature and splits the bytes into the
//!    header chunk and the chunks after it (up to `IEND`).
//! 2) [`extract_metadata`] turns the header chunk into an [`IHDR`].
//! 3) [`assemble_idat`] joins the data of all `IDAT` chunks into one zlib
//!    stream, skipping any other chunk types.
//! 4) Decompress that with any [`ZlibCodec`](crate::ZlibCodec).
//! 5) [`reconstruct`] undoes the per-line filters and gives a
//!    [`PixelGrid`](crate::PixelGrid).
//!
//! ## Encoding
//!
//! [`extract_channel`] keeps one color channel and lays out filter type 0
//! scanlines, you compress those, and [`build_container`] wraps the zlib data
//! into a full PNG.
//!
//! ## Parsing Errors
//!
//! Quoting [section 13.2 of the PNG
//! spec](https://www.w3.org/TR/2003/REC-PNG-20031110/#13Decoders.Errors):
//!
//! > Errors that have little or no effect on the processing of the image may be
//! > ignored, while those that affect critical data shall be dealt with in a
//! > manner appropriate to the application.
//!
//! So we ignore chunk types we don't use, and by default we don't check chunk
//! CRCs either. Set [`DecodeConfig::verify_crc`](crate::DecodeConfig) if you
//! want them checked. The Adler-32 of the zlib stream is up to the codec.

use core::fmt::{Debug, Write};

use alloc::{vec, vec::Vec};
use log::{debug, trace, warn};

use crate::{
  parser_helpers::*,
  pixel_grid::{Channel, PixelGrid, BYTES_PER_PIXEL, RGB8},
  DecodeConfig, PngError, PngResult,
};

mod channel;
pub use channel::*;

mod crc32;
pub use crc32::*;

mod idat;
pub use idat::*;

mod ihdr;
pub use ihdr::*;

mod raw_chunk;
pub use raw_chunk::*;

mod unfilter;
pub use unfilter::*;

mod writer;
pub use writer::*;


/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the PNG's initial 8 bytes are correct.
///
/// * If this is the case, the rest of the bytes are very likely PNG data.
/// * If this is *not* the case, the rest of the bytes are very likely *not* PNG
///   data.
#[inline]
#[must_use]
pub const fn is_png_header_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}
