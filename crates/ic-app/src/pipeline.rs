use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use ic_ascii::RenderOptions;
use ic_source::InputFormat;

/// Initial read buffer; inputs are buffered whole before decoding.
const READ_BUF: usize = 64 * 1024;

/// Read the whole input and pick its decoder.
///
/// With no path, `stdin` is read and always treated as BMP.
///
/// # Errors
/// Returns an error for unknown extensions or unreadable input.
pub fn read_input(path: Option<&Path>, mut stdin: impl Read) -> Result<(Vec<u8>, InputFormat)> {
    let mut bytes = Vec::with_capacity(READ_BUF);
    match path {
        Some(path) => {
            let format = InputFormat::from_path(path).with_context(|| {
                format!(
                    "Unrecognized image format: {} (expected .bmp, .jpg, .jpeg or .png)",
                    path.display()
                )
            })?;
            File::open(path)
                .and_then(|mut f| f.read_to_end(&mut bytes))
                .with_context(|| format!("Failed to open image file {}", path.display()))?;
            Ok((bytes, format))
        }
        None => {
            stdin
                .read_to_end(&mut bytes)
                .context("Failed to read image data from stdin")?;
            Ok((bytes, InputFormat::Bmp))
        }
    }
}

/// Decode `path` (or `stdin`), render it and write the lines to `out`.
///
/// # Errors
/// Propagates input, decode and write errors; see [`crate::exit::code_for`].
pub fn run(
    path: Option<&Path>,
    stdin: impl Read,
    print_width: u32,
    opts: &RenderOptions,
    out: &mut impl Write,
) -> Result<()> {
    let (bytes, format) = read_input(path, stdin)?;
    let source = path.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());

    let raster = ic_source::decode(&bytes, format)
        .with_context(|| format!("Cannot decode {source} as {format}"))?;
    drop(bytes);
    log::info!(
        "{source}: {format} {}×{} → {print_width} columns",
        raster.width(),
        raster.height()
    );

    let lines = ic_ascii::render_with(&raster, print_width, opts);
    raster.release();

    write_lines(&lines, out).context("Failed to write output")
}

fn write_lines(lines: &[String], out: &mut impl Write) -> io::Result<()> {
    for line in lines {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
