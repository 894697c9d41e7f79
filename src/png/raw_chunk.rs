use super::*;

/// The four byte type tag of a PNG chunk.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngRawChunkType(pub [u8; 4]);
#[allow(nonstandard_style)]
impl PngRawChunkType {
  /// Image Header
  pub const IHDR: Self = Self(*b"IHDR");
  /// Image Data
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image End
  pub const IEND: Self = Self(*b"IEND");

  /// Critical chunks have an uppercase first letter (bit 5 clear).
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    (self.0[0] & 0x20) == 0
  }
}
impl Debug for PngRawChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char(self.0[0] as char)?;
    f.write_char(self.0[1] as char)?;
    f.write_char(self.0[2] as char)?;
    f.write_char(self.0[3] as char)?;
    Ok(())
  }
}

/// An unparsed chunk from a PNG.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PngRawChunk<'b> {
  pub(crate) type_: PngRawChunkType,
  pub(crate) data: &'b [u8],
  pub(crate) declared_crc: u32,
}
impl Debug for PngRawChunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PngRawChunk")
      .field("type_", &self.type_)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}
impl<'b> PngRawChunk<'b> {
  /// Assembles a chunk view from its parts.
  #[inline]
  #[must_use]
  pub const fn new(type_: PngRawChunkType, data: &'b [u8], declared_crc: u32) -> Self {
    Self { type_, data, declared_crc }
  }
  #[inline]
  #[must_use]
  pub const fn chunk_type(&self) -> PngRawChunkType {
    self.type_
  }
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'b [u8] {
    self.data
  }
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }
  /// The CRC of this chunk's type and data, as it should have been written.
  #[inline]
  #[must_use]
  pub fn compute_actual_crc(&self) -> u32 {
    chunk_crc(self.type_.0, self.data)
  }
  /// Compares the declared CRC against the actual one.
  ///
  /// ## Failure
  /// * [`PngError::CrcMismatch`] if they differ.
  pub fn verify_crc(&self) -> PngResult<()> {
    let actual = self.compute_actual_crc();
    if actual == self.declared_crc {
      Ok(())
    } else {
      Err(PngError::CrcMismatch { chunk_type: self.type_, declared: self.declared_crc, actual })
    }
  }
}

/// An iterator that produces successive raw chunks from PNG bytes.
///
/// Each chunk is `length(4) + type(4) + data(length) + crc(4)`, all integers
/// big-endian. A chunk that claims more bytes than remain produces one
/// [`PngError::TruncatedRecord`] and then the iterator is finished.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PngRawChunkIter<'b> {
  bytes: &'b [u8],
  offset: usize,
}
impl<'b> PngRawChunkIter<'b> {
  /// Pass the full PNG bytes, it will skip the 8 byte signature automatically.
  ///
  /// The signature isn't checked here, use [`is_png_header_correct`] or
  /// [`parse_container`] for that.
  #[inline]
  #[must_use]
  pub const fn new(bytes: &'b [u8]) -> Self {
    Self::starting_at(bytes, PNG_SIGNATURE.len())
  }

  /// Starts iterating chunks at an arbitrary byte offset into `bytes`.
  #[inline]
  #[must_use]
  pub const fn starting_at(bytes: &'b [u8], offset: usize) -> Self {
    Self { bytes, offset }
  }
}
impl<'b> Iterator for PngRawChunkIter<'b> {
  type Item = PngResult<PngRawChunk<'b>>;
  fn next(&mut self) -> Option<Self::Item> {
    let start = self.offset;
    if start >= self.bytes.len() {
      return None;
    }
    // after any failure we park the offset at the end so the iterator is fused.
    let truncated = |it: &mut Self| {
      it.offset = it.bytes.len();
      Some(Err(PngError::TruncatedRecord { offset: start }))
    };
    let Some(chunk_len) = u32_be_at(self.bytes, start) else { return truncated(self) };
    let Some(type_bytes) = byte_array_at::<4>(self.bytes, start + 4) else {
      return truncated(self);
    };
    let data_start = start + 8;
    let Some(data_end) = data_start.checked_add(chunk_len as usize) else {
      return truncated(self);
    };
    let Some(data) = self.bytes.get(data_start..data_end) else { return truncated(self) };
    let Some(declared_crc) = u32_be_at(self.bytes, data_end) else { return truncated(self) };
    self.offset = data_end + 4;
    Some(Ok(PngRawChunk { type_: PngRawChunkType(type_bytes), data, declared_crc }))
  }
}

/// Byte offset of the header chunk, directly after the signature.
const IHDR_OFFSET: usize = PNG_SIGNATURE.len();

/// The header chunk always has a 13 byte payload, so it's 25 bytes total.
const IHDR_CHUNK_LEN: usize = 4 + 4 + IHDR_DATA_LEN + 4;

/// The chunks of a PNG split into its header and everything after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngContainer<'b> {
  /// The header chunk, read at its fixed position.
  pub header: PngRawChunk<'b>,
  /// All chunks after the header and before `IEND`, in file order.
  pub chunks: Vec<PngRawChunk<'b>>,
}

/// Splits PNG bytes into the header chunk and the chunks that follow it.
///
/// * The header is taken from its fixed position right after the signature,
///   with a fixed 13 byte payload. Its type tag is *not* checked here, see
///   [`extract_metadata`].
/// * The remaining chunks are scanned until an `IEND` chunk or the end of the
///   data, whichever comes first. The `IEND` chunk itself isn't included.
/// * CRCs are only checked when `config.verify_crc` is set.
///
/// ## Failure
/// * [`PngError::InvalidSignature`] if the signature is wrong or missing.
/// * [`PngError::TruncatedRecord`] if any chunk runs off the end of the data.
/// * [`PngError::CrcMismatch`] when verifying and a CRC is wrong.
pub fn parse_container<'b>(bytes: &'b [u8], config: &DecodeConfig) -> PngResult<PngContainer<'b>> {
  if !is_png_header_correct(bytes) {
    return Err(PngError::InvalidSignature);
  }
  let truncated_header = PngError::TruncatedRecord { offset: IHDR_OFFSET };
  let header_type = byte_array_at::<4>(bytes, IHDR_OFFSET + 4).ok_or(truncated_header)?;
  let data_start = IHDR_OFFSET + 8;
  let header_data =
    bytes.get(data_start..data_start + IHDR_DATA_LEN).ok_or(truncated_header)?;
  let header_crc = u32_be_at(bytes, data_start + IHDR_DATA_LEN).ok_or(truncated_header)?;
  let header = PngRawChunk::new(PngRawChunkType(header_type), header_data, header_crc);
  trace!("{:?}", header);
  if config.verify_crc {
    header.verify_crc()?;
  }

  let mut chunks = Vec::new();
  for chunk in PngRawChunkIter::starting_at(bytes, IHDR_OFFSET + IHDR_CHUNK_LEN) {
    let chunk = chunk?;
    trace!("{:?}", chunk);
    if config.verify_crc {
      chunk.verify_crc()?;
    }
    if chunk.type_ == PngRawChunkType::IEND {
      break;
    }
    chunks.push(chunk);
  }
  Ok(PngContainer { header, chunks })
}
