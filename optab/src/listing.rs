//! Writes the formatted listing to a file, echoing each line to a second sink.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::symbol::OpcodeLine;

/// Create (or truncate) `path` and write `lines` to it, one per line.
///
/// Each line is also written to `echo` right after it goes to the file.
/// Returns the number of lines written.
pub fn write_file<E: Write>(
    path: &Path,
    lines: &[OpcodeLine],
    echo: Option<&mut E>,
) -> Result<usize> {
    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    write_lines(lines, &mut out, echo).map_err(|e| match e {
        SinkError::Out(source) => write_err(source),
        SinkError::Echo(source) => Error::Echo(source),
    })?;
    out.flush().map_err(write_err)?;

    log::info!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(lines.len())
}

enum SinkError {
    Out(std::io::Error),
    Echo(std::io::Error),
}

fn write_lines<W: Write, E: Write>(
    lines: &[OpcodeLine],
    out: &mut W,
    mut echo: Option<&mut E>,
) -> std::result::Result<(), SinkError> {
    for line in lines {
        writeln!(out, "{line}").map_err(SinkError::Out)?;
        if let Some(echo) = echo.as_deref_mut() {
            writeln!(echo, "{line}").map_err(SinkError::Echo)?;
        }
    }
    Ok(())
}
