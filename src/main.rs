//! `pngchan` command line tool.
//!
//! ```text
//! pngchan split <input.png> <output.png> <red|green|blue>
//! pngchan info <input.png>...
//! ```
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=debug`) for more output.

use std::{path::Path, process::ExitCode};

use pngchan::{load_from_bytes, png::*, save_channel_to_bytes, Channel, DecodeConfig, PngError};

const USAGE: &str = "usage:
  pngchan split <input.png> <output.png> <red|green|blue>
  pngchan info <input.png>...";

#[derive(Debug, thiserror::Error)]
enum CliError {
  #[error("{0}: file not found")]
  NotFound(String),
  #[error("{path}: {source}")]
  Io { path: String, source: std::io::Error },
  #[error("{path}: {source}")]
  Png { path: String, source: PngError },
  #[error("`{arg}`: {source}")]
  Channel { arg: String, source: PngError },
  #[error("{0}")]
  Usage(&'static str),
}
impl CliError {
  fn exit_code(&self) -> ExitCode {
    match self {
      Self::NotFound(_) => ExitCode::from(2),
      Self::Usage(_) => ExitCode::from(64),
      _ => ExitCode::FAILURE,
    }
  }
}

fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
  std::fs::read(path).map_err(|e| match e.kind() {
    std::io::ErrorKind::NotFound => CliError::NotFound(path.display().to_string()),
    _ => CliError::Io { path: path.display().to_string(), source: e },
  })
}

fn split(input: &Path, output: &Path, channel: Channel) -> Result<(), CliError> {
  let bytes = read_file(input)?;
  log::info!("read {} bytes from {}", bytes.len(), input.display());
  let (ihdr, grid) = load_from_bytes(&bytes)
    .map_err(|source| CliError::Png { path: input.display().to_string(), source })?;
  log::info!("{}: {}x{} pixels", input.display(), ihdr.width, ihdr.height);
  let out = save_channel_to_bytes(&ihdr, &grid, channel)
    .map_err(|source| CliError::Png { path: output.display().to_string(), source })?;
  std::fs::write(output, &out)
    .map_err(|source| CliError::Io { path: output.display().to_string(), source })?;
  log::info!("wrote {} bytes to {}", out.len(), output.display());
  Ok(())
}

fn info(input: &Path) -> Result<(), CliError> {
  let bytes = read_file(input)?;
  let png_err = |source| CliError::Png { path: input.display().to_string(), source };
  let container = parse_container(&bytes, &DecodeConfig::default()).map_err(png_err)?;
  let ihdr = extract_metadata(&container.header).map_err(png_err)?;
  println!("{}: {} bytes", input.display(), bytes.len());
  println!("  {ihdr:?}");
  for (n, chunk) in core::iter::once(&container.header).chain(container.chunks.iter()).enumerate() {
    let actual = chunk.compute_actual_crc();
    println!(
      "  {n}: {:?} len={} crc={:#010X}{}",
      chunk.chunk_type(),
      chunk.data().len(),
      chunk.declared_crc(),
      if actual == chunk.declared_crc() { String::new() } else { format!(" (actual {actual:#010X})") }
    );
  }
  Ok(())
}

fn run(args: &[String]) -> Result<(), CliError> {
  match args {
    [cmd, input, output, channel] if cmd == "split" => {
      let channel: Channel =
        channel.parse().map_err(|source| CliError::Channel { arg: channel.clone(), source })?;
      split(Path::new(input), Path::new(output), channel)
    }
    [cmd, inputs @ ..] if cmd == "info" && !inputs.is_empty() => {
      inputs.iter().try_for_each(|input| info(Path::new(input)))
    }
    _ => Err(CliError::Usage(USAGE)),
  }
}

fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
  let args: Vec<String> = std::env::args().skip(1).collect();
  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("{e}");
      e.exit_code()
    }
  }
}
