use super::*;

/// Turns one channel of the grid into filtered scanlines, ready for zlib.
///
/// Every output pixel keeps the selected channel and has the other two set to
/// 0, so the result is still 3-byte RGB rather than a grayscale image. Each
/// line gets filter type 0 (None); no other filter is ever written.
///
/// ## Failure
/// * [`PngError::EmptyImage`] if the grid has no pixels.
pub fn extract_channel(grid: &PixelGrid, channel: Channel) -> PngResult<Vec<u8>> {
  if grid.is_empty() || grid.width == 0 || grid.height == 0 {
    return Err(PngError::EmptyImage);
  }
  let isolated = grid.isolate_channel(channel);
  let bytes_per_filterline = 1 + (grid.width as usize) * BYTES_PER_PIXEL;
  let mut out = Vec::with_capacity(bytes_per_filterline * (grid.height as usize));
  for row in isolated.rows() {
    out.push(FilterType::None as u8);
    out.extend_from_slice(bytemuck::cast_slice(row));
  }
  Ok(out)
}
