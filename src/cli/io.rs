//! Payload and output plumbing for the CLI
//!
//! Input is UTF-8 JSON, either from a flag or from stdin; output goes to
//! stdout one blob per line, flushed.

use std::io::{self, Read, Write};

use super::errors::CliResult;

/// Reads a JSON payload from stdin (used when `--data` is omitted).
pub fn read_payload() -> CliResult<String> {
    let mut payload = String::new();
    io::stdin().read_to_string(&mut payload)?;
    Ok(payload)
}

/// Writes a raw JSON blob to stdout.
pub fn write_blob(blob: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", blob)?;
    if !blob.ends_with('\n') {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

/// Writes a plain status line to stdout.
pub fn write_line(line: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", line)?;
    stdout.flush()?;
    Ok(())
}
