#![forbid(unsafe_code)]

//! Just has shorthands for pulling big-endian fields out of byte slices.

/// Reads `N` bytes starting at `at`, or `None` if that runs off the end.
#[inline]
#[must_use]
pub fn byte_array_at<const N: usize>(bytes: &[u8], at: usize) -> Option<[u8; N]> {
  bytes.get(at..at.checked_add(N)?)?.try_into().ok()
}

#[inline]
#[must_use]
pub fn u32_be_at(bytes: &[u8], at: usize) -> Option<u32> {
  byte_array_at::<4>(bytes, at).map(u32::from_be_bytes)
}

#[test]
fn test_u32_be_at() {
  let bytes = [0, 0, 1, 2, 9];
  assert_eq!(u32_be_at(&bytes, 0), Some(0x0102));
  assert_eq!(u32_be_at(&bytes, 1), Some(0x0001_0209));
  assert_eq!(u32_be_at(&bytes, 2), None);
  assert_eq!(u32_be_at(&bytes, usize::MAX), None);
  assert_eq!(byte_array_at::<2>(&bytes, 3), Some([2, 9]));
}
