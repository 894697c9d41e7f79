use super::*;

/// The PNG spec limits chunk data to `2^31 - 1` bytes.
pub const MAX_CHUNK_DATA_LEN: usize = (1 << 31) - 1;

/// Appends one chunk to `out`: length, type, data, and the CRC of type + data.
///
/// ## Panics
/// * If `data` is longer than [`MAX_CHUNK_DATA_LEN`].
pub fn write_chunk(out: &mut Vec<u8>, chunk_type: PngRawChunkType, data: &[u8]) {
  assert!(data.len() <= MAX_CHUNK_DATA_LEN, "PNG chunk data is limited to 2^31 - 1 bytes");
  let len = data.len() as u32;
  out.reserve(12 + data.len());
  out.extend_from_slice(&len.to_be_bytes());
  out.extend_from_slice(&chunk_type.0);
  out.extend_from_slice(data);
  out.extend_from_slice(&chunk_crc(chunk_type.0, data).to_be_bytes());
}

/// Builds a complete PNG from a header and an already compressed zlib stream.
///
/// The output is the signature, an `IHDR`, the `zlib_data` in `IDAT` chunks
/// (just one unless it's over [`MAX_CHUNK_DATA_LEN`]), and an `IEND`.
///
/// Only the width and height of `ihdr` are used, the header always says 8-bit
/// RGB, no interlacing.
#[must_use]
pub fn build_container(ihdr: &IHDR, zlib_data: &[u8]) -> Vec<u8> {
  let header = IHDR::rgb8(ihdr.width, ihdr.height);
  let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + 3 * 12 + IHDR_DATA_LEN + zlib_data.len());
  out.extend_from_slice(&PNG_SIGNATURE);
  write_chunk(&mut out, PngRawChunkType::IHDR, &header.to_bytes());
  if zlib_data.is_empty() {
    write_chunk(&mut out, PngRawChunkType::IDAT, &[]);
  }
  for idat in zlib_data.chunks(MAX_CHUNK_DATA_LEN) {
    write_chunk(&mut out, PngRawChunkType::IDAT, idat);
  }
  write_chunk(&mut out, PngRawChunkType::IEND, &[]);
  debug!("built a {} byte PNG", out.len());
  out
}
