use crate::png::PngRawChunkType;

/// An error from the `pngchan` crate.
///
/// Every error is terminal for the operation that produced it. Nothing in this
/// crate hands back a partially decoded image alongside an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PngError {
  /// The data is shorter than 8 bytes or doesn't start with the PNG signature.
  #[error("data does not start with the PNG signature")]
  InvalidSignature,

  /// A chunk declared more bytes than remain in the data.
  #[error("chunk starting at byte {offset} runs past the end of the data")]
  TruncatedRecord {
    /// Byte offset of the chunk's length field.
    offset: usize,
  },

  /// The first chunk isn't `IHDR`, or its payload is under 13 bytes.
  #[error("the first chunk is not a valid IHDR")]
  InvalidHeader,

  /// The header declares a width or height of 0.
  #[error("image width and height must both be non-zero")]
  HeaderNotRead,

  /// The header declares dimensions beyond the configured limit.
  #[error("image dimensions exceed the configured limit")]
  DimensionsTooLarge,

  /// The decompressed data is too short for the declared image size.
  #[error("decompressed image data is {actual} bytes, expected {expected}")]
  TruncatedImageData {
    /// Bytes required by the header dimensions.
    expected: usize,
    /// Bytes actually available.
    actual: usize,
  },

  /// A scanline's filter byte was not 0 through 4.
  #[error("row {row} uses unsupported filter type {filter}")]
  UnsupportedFilterType {
    /// Zero-based scanline index.
    row: u32,
    /// The filter byte found.
    filter: u8,
  },

  /// The zlib collaborator rejected the compressed stream.
  #[error("zlib decompression failed")]
  DecompressionError,

  /// The header's dimensions don't match the pixels being encoded.
  #[error("header is {header_width}x{header_height} but the image is {width}x{height}")]
  DimensionMismatch {
    /// Width from the header.
    header_width: u32,
    /// Height from the header.
    header_height: u32,
    /// Width of the pixel grid.
    width: u32,
    /// Height of the pixel grid.
    height: u32,
  },

  /// There were no pixels to encode.
  #[error("the image has no pixels")]
  EmptyImage,

  /// A channel selector other than red, green, or blue.
  #[error("channel selector must be red, green, or blue")]
  InvalidChannelSelector,

  /// Opt-in CRC verification found a mismatch.
  #[error("{chunk_type:?} chunk CRC is {declared:#010X}, computed {actual:#010X}")]
  CrcMismatch {
    /// The chunk's type tag.
    chunk_type: PngRawChunkType,
    /// CRC stored in the data.
    declared: u32,
    /// CRC computed over type and payload.
    actual: u32,
  },
}

/// Shorthand for results using [`PngError`].
pub type PngResult<T> = Result<T, PngError>;
