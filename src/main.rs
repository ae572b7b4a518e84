//! # png2ico
//!
//! Wraps a PNG image in a single-entry ICO file, for example to produce a `favicon.ico`.
//!
//! ```bash
//! png2ico logo.png favicon.ico
//! ```
//!
//! Diagnostics are written to stderr and can be enabled with `RUST_LOG=debug`.

use std::{
    env,
    fs,
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: png2ico <input.png> <output.ico>";

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<_> = env::args_os().skip(1).collect();
    let [src, dst] = args.as_slice() else {
        println!("{USAGE}");
        return Ok(ExitCode::from(2));
    };
    let (src, dst) = (Path::new(src), Path::new(dst));

    let written = convert(src, dst)?;
    println!("Wrote {} ({written} bytes) from {}", dst.display(), src.display());
    Ok(ExitCode::SUCCESS)
}

/// Reads `src`, wraps it in an ICO container and writes it to `dst`. Returns the size of the ICO file.
fn convert(src: &Path, dst: &Path) -> Result<usize> {
    let png = fs::read(src).with_context(|| format!("failed to read {}", src.display()))?;
    debug!(bytes = png.len(), "read PNG");

    let ico = const_ico::build_ico(&png).with_context(|| format!("failed to build ICO from {}", src.display()))?;
    write_atomic(dst, &ico).with_context(|| format!("failed to write {}", dst.display()))?;
    info!(path = %dst.display(), bytes = ico.len(), "wrote ICO");
    Ok(ico.len())
}

// Writes to a temp file next to `dst` and renames it over `dst`. On failure `dst` is left untouched.
fn write_atomic(dst: &Path, bytes: &[u8]) -> io::Result<()> {
    // `Path::parent` returns `Some("")` for bare file names.
    let dir = dst
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(dst).map_err(|e| e.error)?;
    Ok(())
}
