#![forbid(unsafe_code)]

//! Provides the owned RGB pixel grid that decoding produces.

use alloc::vec::Vec;
use core::str::FromStr;

use crate::PngError;

/// One RGB pixel, 8 bits per channel, in `[r, g, b]` order.
pub type RGB8 = [u8; 3];

/// Bytes per pixel of the only supported layout (8-bit truecolor).
pub const BYTES_PER_PIXEL: usize = 3;

/// Converts an `(x,y)` position within a given `width` 2D space into a linear
/// index.
#[inline]
#[must_use]
pub const fn xy_width_to_index(x: u32, y: u32, width: u32) -> usize {
  (y as usize) * (width as usize) + (x as usize)
}

/// An owned grid of RGB pixels.
///
/// Pixels are stored row-major, origin at the top left, `width` pixels per
/// row and `height` rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelGrid {
  pub(crate) width: u32,
  pub(crate) height: u32,
  pub(crate) pixels: Vec<RGB8>,
}
impl PixelGrid {
  /// Builds a grid from row-major pixels.
  ///
  /// Returns `None` if `pixels.len()` isn't exactly `width * height`.
  #[inline]
  #[must_use]
  pub fn from_pixels(width: u32, height: u32, pixels: Vec<RGB8>) -> Option<Self> {
    let expected = (width as usize).checked_mul(height as usize)?;
    if pixels.len() == expected {
      Some(Self { width, height, pixels })
    } else {
      None
    }
  }

  /// Builds a grid from nested rows, as `grid[y][x]`.
  ///
  /// Returns `None` if the rows aren't all the same length.
  pub fn from_rows<R: AsRef<[RGB8]>>(rows: &[R]) -> Option<Self> {
    let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
    if rows.iter().any(|r| r.as_ref().len() != width) {
      return None;
    }
    let pixels: Vec<RGB8> = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
    Self::from_pixels(u32::try_from(width).ok()?, u32::try_from(rows.len()).ok()?, pixels)
  }

  /// Width in pixels.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// Height in pixels.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }

  /// If the grid holds no pixels at all.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.pixels.is_empty()
  }

  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get(&self, x: u32, y: u32) -> Option<RGB8> {
    if x < self.width && y < self.height {
      self.pixels.get(xy_width_to_index(x, y, self.width)).copied()
    } else {
      None
    }
  }

  /// All pixels, row-major.
  #[inline]
  #[must_use]
  pub fn pixels(&self) -> &[RGB8] {
    &self.pixels
  }

  /// The pixel data as raw `r, g, b, r, g, b, ...` bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(&self.pixels)
  }

  /// Iterates the rows, top to bottom.
  #[inline]
  pub fn rows(&self) -> impl ExactSizeIterator<Item = &[RGB8]> + '_ {
    // `chunks_exact(0)` panics, and a zero width grid has no rows anyway.
    let w = (self.width as usize).max(1);
    self.pixels.chunks_exact(w).take(if self.width == 0 { 0 } else { self.height as usize })
  }

  /// Makes a copy with every channel except `channel` set to 0.
  #[must_use]
  pub fn isolate_channel(&self, channel: Channel) -> Self {
    let i = channel.index();
    let pixels = self
      .pixels
      .iter()
      .map(|p| {
        let mut out = [0_u8; BYTES_PER_PIXEL];
        out[i] = p[i];
        out
      })
      .collect();
    Self { width: self.width, height: self.height, pixels }
  }
}

/// Picks one color channel of an RGB image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
  /// Channel 0
  Red,
  /// Channel 1
  Green,
  /// Channel 2
  Blue,
}
impl Channel {
  /// Position of this channel within an [`RGB8`].
  #[inline]
  #[must_use]
  pub const fn index(self) -> usize {
    match self {
      Self::Red => 0,
      Self::Green => 1,
      Self::Blue => 2,
    }
  }
}
/// Uses 1-based numbering: 1 is red, 2 is green, 3 is blue.
impl TryFrom<u8> for Channel {
  type Error = PngError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      1 => Self::Red,
      2 => Self::Green,
      3 => Self::Blue,
      _ => return Err(PngError::InvalidChannelSelector),
    })
  }
}
impl FromStr for Channel {
  type Err = PngError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    Ok(if s.eq_ignore_ascii_case("red") || s.eq_ignore_ascii_case("r") || s == "1" {
      Self::Red
    } else if s.eq_ignore_ascii_case("green") || s.eq_ignore_ascii_case("g") || s == "2" {
      Self::Green
    } else if s.eq_ignore_ascii_case("blue") || s.eq_ignore_ascii_case("b") || s == "3" {
      Self::Blue
    } else {
      return Err(PngError::InvalidChannelSelector);
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use alloc::vec;

  #[test]
  fn test_from_rows_requires_rectangle() {
    assert!(PixelGrid::from_rows(&[vec![[0; 3]; 2], vec![[0; 3]; 1]]).is_none());
    let grid = PixelGrid::from_rows(&[vec![[1, 2, 3], [4, 5, 6]]]).unwrap();
    assert_eq!(grid.width(), 2);
    assert_eq!(grid.height(), 1);
    assert_eq!(grid.get(1, 0), Some([4, 5, 6]));
    assert_eq!(grid.get(2, 0), None);
    assert_eq!(grid.as_bytes(), &[1, 2, 3, 4, 5, 6]);
  }

  #[test]
  fn test_rows_of_empty_grid() {
    let grid = PixelGrid::default();
    assert!(grid.is_empty());
    assert_eq!(grid.rows().count(), 0);
    let grid = PixelGrid::from_pixels(0, 5, vec![]).unwrap();
    assert_eq!(grid.rows().count(), 0);
  }

  #[test]
  fn test_isolate_channel() {
    let grid = PixelGrid::from_rows(&[[[50, 100, 150]]]).unwrap();
    assert_eq!(grid.isolate_channel(Channel::Red).get(0, 0), Some([50, 0, 0]));
    assert_eq!(grid.isolate_channel(Channel::Green).get(0, 0), Some([0, 100, 0]));
    assert_eq!(grid.isolate_channel(Channel::Blue).get(0, 0), Some([0, 0, 150]));
  }

  #[test]
  fn test_channel_parsing() {
    assert_eq!(Channel::try_from(1_u8), Ok(Channel::Red));
    assert_eq!(Channel::try_from(3_u8), Ok(Channel::Blue));
    assert_eq!(Channel::try_from(0_u8), Err(PngError::InvalidChannelSelector));
    assert_eq!(Channel::try_from(4_u8), Err(PngError::InvalidChannelSelector));
    assert_eq!("Green".parse::<Channel>(), Ok(Channel::Green));
    assert_eq!(" b ".parse::<Channel>(), Ok(Channel::Blue));
    assert_eq!("2".parse::<Channel>(), Ok(Channel::Green));
    assert_eq!("alpha".parse::<Channel>(), Err(PngError::InvalidChannelSelector));
  }
}
