use super::*;

/// Concatenates the data of every `IDAT` chunk, in order.
///
/// * Images can have more than one IDAT chunk. All of them together form a
///   single zlib datastream.
/// * Chunks of any other type are skipped.
/// * No IDAT at all just gives an empty buffer, which will then fail to
///   decompress.
#[must_use]
pub fn assemble_idat(chunks: &[PngRawChunk<'_>]) -> Vec<u8> {
  let mut out = Vec::new();
  for chunk in chunks {
    if chunk.type_ == PngRawChunkType::IDAT {
      out.extend_from_slice(chunk.data);
    } else if chunk.type_.is_critical() {
      warn!("skipping unsupported critical chunk {:?}", chunk.type_);
    } else {
      trace!("skipping ancillary chunk {:?}", chunk.type_);
    }
  }
  debug!("assembled {} bytes of zlib data", out.len());
  out
}
