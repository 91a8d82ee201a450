//! Prints the chunk table of a PNG file.
//!
//! `pngchunk <FILE>`
//!
//! Set `RUST_LOG=trace` to see each chunk as it's parsed.

use std::{fs::File, io::BufReader, path::Path, process::ExitCode};

use log::{info, LevelFilter};
use pngchunk::{png::*, PngResult};

fn main() -> ExitCode {
  // a logger that fails to install just means no log output
  let _ = simple_logger::SimpleLogger::new().with_level(LevelFilter::Warn).env().init();

  let args: Vec<String> = std::env::args().collect();
  let path = match args.as_slice() {
    [_, path] => Path::new(path),
    _ => {
      eprintln!("usage: pngchunk <FILE>");
      return ExitCode::from(2);
    }
  };
  match summarize(path) {
    Ok(text) => {
      println!("{text}");
      ExitCode::SUCCESS
    }
    Err(e) => {
      eprintln!("error: {}: {e}", path.display());
      ExitCode::FAILURE
    }
  }
}

fn summarize(path: &Path) -> PngResult<String> {
  let file = File::open(path)?;
  let png = Png::read_from(BufReader::new(file))?;
  info!("{}: {} records", path.display(), png.records.len());
  Ok(png.render_summary(&SummaryFormat::default(), "\n"))
}
