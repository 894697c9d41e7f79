use pngchan::{
  load_from_bytes, load_from_bytes_with, png::*, save_channel_to_bytes, Channel, DecodeConfig,
  MinizCodec, PixelGrid, PngError, ZlibCodec,
};
use walkdir::WalkDir;

/// Builds a PNG by hand from filtered scanlines.
fn png_from_filterlines(width: u32, height: u32, filterlines: &[u8]) -> Vec<u8> {
  let zlib = MinizCodec::default().compress(filterlines);
  build_container(&IHDR::rgb8(width, height), &zlib)
}

#[test]
fn test_RawPngChunkIter_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    for _ in PngRawChunkIter::new(&v) {
      //
    }
    let _ = load_from_bytes(&v);
  }
  // even totally random data should never panic the iterator!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    for _ in PngRawChunkIter::new(&v) {
      //
    }
  }
}

#[test]
fn test_load_from_bytes_no_panics_on_damaged_png() {
  let png = png_from_filterlines(2, 2, &[0, 1, 2, 3, 4, 5, 6, 1, 1, 1, 1, 1, 1, 1]);
  for _ in 0..50 {
    let noise = super::rand_bytes(png.len());
    let mut damaged = png.clone();
    // keep the signature so the parsing actually gets somewhere
    for (d, n) in damaged.iter_mut().zip(noise).skip(8).step_by(5) {
      *d ^= n;
    }
    let _ = load_from_bytes(&damaged);
    let _ = load_from_bytes_with(&damaged, &MinizCodec::default(), &DecodeConfig::strict());
  }
  // every cut short of a complete IDAT must fail
  for len in 0..png.len() - 12 {
    assert!(load_from_bytes(&png[..len]).is_err(), "len {len}");
  }
}

#[test]
fn test_end_to_end_single_pixel() {
  let ihdr = IHDR::rgb8(1, 1);
  let zlib = MinizCodec::default().compress(&[0, 200, 150, 50]);
  let png = build_container(&ihdr, &zlib);

  let container = parse_container(&png, &DecodeConfig::default()).unwrap();
  let header = extract_metadata(&container.header).unwrap();
  assert_eq!(header, ihdr);
  let zlib_data = assemble_idat(&container.chunks);
  let decompressed = MinizCodec::default().decompress(&zlib_data).unwrap();
  let grid = reconstruct(&decompressed, &header).unwrap();
  assert_eq!(grid.rows().collect::<Vec<_>>(), vec![&[[200, 150, 50]][..]]);

  let (header, grid2) = load_from_bytes(&png).unwrap();
  assert_eq!(header, ihdr);
  assert_eq!(grid2, grid);
}

#[test]
fn test_load_all_filter_types() {
  #[rustfmt::skip]
  let filterlines = [
    0, 10, 20, 30, 40, 50, 60,
    1, 1, 1, 1, 2, 2, 2,
    2, 1, 1, 1, 1, 1, 1,
    3, 0, 0, 0, 0, 0, 0,
    4, 0, 0, 0, 0, 0, 0,
  ];
  let png = png_from_filterlines(2, 5, &filterlines);
  let (ihdr, grid) = load_from_bytes(&png).unwrap();
  assert_eq!((ihdr.width, ihdr.height), (2, 5));
  let rows: Vec<&[[u8; 3]]> = grid.rows().collect();
  assert_eq!(rows[0], &[[10, 20, 30], [40, 50, 60]]);
  assert_eq!(rows[1], &[[1, 1, 1], [3, 3, 3]]);
  assert_eq!(rows[2], &[[2, 2, 2], [4, 4, 4]]);
  // (0 + 2) / 2 = 1, then (1 + 4) / 2 = 2
  assert_eq!(rows[3], &[[1, 1, 1], [2, 2, 2]]);
  // first pixel takes `b`, second: a=1, b=2, c=1 so p=2 and `b` is exact
  assert_eq!(rows[4], &[[1, 1, 1], [2, 2, 2]]);
}

#[test]
fn test_idat_split_across_chunks() {
  let zlib = MinizCodec::default().compress(&[0, 1, 2, 3, 0, 4, 5, 6]);
  let (left, right) = zlib.split_at(zlib.len() / 2);
  let mut png = Vec::new();
  png.extend_from_slice(&PNG_SIGNATURE);
  write_chunk(&mut png, PngRawChunkType::IHDR, &IHDR::rgb8(1, 2).to_bytes());
  write_chunk(&mut png, PngRawChunkType::IDAT, left);
  write_chunk(&mut png, PngRawChunkType(*b"tIME"), &[7, 230, 10, 19, 12, 0, 0]);
  write_chunk(&mut png, PngRawChunkType::IDAT, right);
  write_chunk(&mut png, PngRawChunkType::IEND, &[]);
  let (_, grid) = load_from_bytes_with(&png, &MinizCodec::default(), &DecodeConfig::strict()).unwrap();
  assert_eq!(grid.pixels(), &[[1, 2, 3], [4, 5, 6]]);
}

#[test]
fn test_load_errors() {
  assert_eq!(load_from_bytes(b"not a png"), Err(PngError::InvalidSignature));

  // no IDAT at all
  let png = build_container(&IHDR::rgb8(1, 1), &[]);
  assert_eq!(load_from_bytes(&png), Err(PngError::DecompressionError));

  // IDAT isn't zlib
  let png = build_container(&IHDR::rgb8(1, 1), &[1, 2, 3, 4]);
  assert_eq!(load_from_bytes(&png), Err(PngError::DecompressionError));

  // not enough pixel data
  let png = png_from_filterlines(2, 1, &[0, 1, 2, 3]);
  assert_eq!(load_from_bytes(&png), Err(PngError::TruncatedImageData { expected: 7, actual: 4 }));

  // bad filter byte
  let png = png_from_filterlines(1, 1, &[9, 1, 2, 3]);
  assert_eq!(load_from_bytes(&png), Err(PngError::UnsupportedFilterType { row: 0, filter: 9 }));

  // zero sized
  let png = png_from_filterlines(0, 1, &[0]);
  assert_eq!(load_from_bytes(&png), Err(PngError::HeaderNotRead));

  // too big to bother with
  let png = png_from_filterlines(20_000, 1, &[0]);
  assert_eq!(load_from_bytes(&png), Err(PngError::DimensionsTooLarge));

  // first chunk isn't a header
  let mut png = png_from_filterlines(1, 1, &[0, 1, 2, 3]);
  png[12..16].copy_from_slice(b"IHDX");
  assert_eq!(load_from_bytes(&png), Err(PngError::InvalidHeader));
}

#[test]
fn test_save_channel_round_trip() {
  let grid = PixelGrid::from_rows(&[[[50, 100, 150], [1, 2, 3]], [[7, 8, 9], [255, 254, 253]]]).unwrap();
  let ihdr = IHDR::rgb8(2, 2);
  for (channel, i) in [(Channel::Red, 0), (Channel::Green, 1), (Channel::Blue, 2)] {
    let png = save_channel_to_bytes(&ihdr, &grid, channel).unwrap();
    assert!(is_png_header_correct(&png));
    let container = parse_container(&png, &DecodeConfig::strict()).unwrap();
    assert_eq!(container.chunks.len(), 1);
    let (out_ihdr, out_grid) = load_from_bytes(&png).unwrap();
    assert_eq!(out_ihdr, ihdr);
    for (before, after) in grid.pixels().iter().zip(out_grid.pixels()) {
      for c in 0..3 {
        assert_eq!(after[c], if c == i { before[c] } else { 0 });
      }
    }
  }
}

#[test]
fn test_save_channel_empty_image() {
  assert_eq!(
    save_channel_to_bytes(&IHDR::rgb8(0, 0), &PixelGrid::default(), Channel::Red),
    Err(PngError::EmptyImage)
  );
}

#[test]
fn test_save_channel_rejects_mismatched_header() {
  let one = PixelGrid::from_rows(&[[[1, 2, 3]]]).unwrap();
  assert_eq!(
    save_channel_to_bytes(&IHDR::rgb8(2, 2), &one, Channel::Red),
    Err(PngError::DimensionMismatch { header_width: 2, header_height: 2, width: 1, height: 1 })
  );
  let two = PixelGrid::from_rows(&[[[1, 2, 3], [4, 5, 6]]]).unwrap();
  assert_eq!(
    save_channel_to_bytes(&IHDR::rgb8(1, 1), &two, Channel::Green),
    Err(PngError::DimensionMismatch { header_width: 1, header_height: 1, width: 2, height: 1 })
  );
  let png = save_channel_to_bytes(&IHDR::rgb8(2, 1), &two, Channel::Green).unwrap();
  let (_, grid) = load_from_bytes(&png).unwrap();
  assert_eq!(grid.pixels(), &[[0, 2, 0], [0, 5, 0]]);
}
