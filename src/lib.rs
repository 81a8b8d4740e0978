//! Angle-bracket chat markup, rendered to styled text or a terminal.
//!
//! The parsing core lives in the `miniformat` crate and is re-exported here.
//! This crate adds ANSI output and a file logger.

pub mod ansi;
pub mod error;
pub mod log_init;

pub use error::{MiniFormatError, Result};
pub use miniformat::*;

/// Parse markup and write it to stdout as ANSI, followed by a newline.
pub fn print_markup(input: &str) -> Result<()> {
    use std::io::Write;

    let text = miniformat::parse(input);
    let mut stdout = std::io::stdout().lock();
    ansi::write_ansi(&mut stdout, &text)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
