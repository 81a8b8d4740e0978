//! ANSI terminal output for styled text.
//!
//! Writes each text-carrying unit of a [`StyledText`] as a self-contained
//! SGR sequence: color and attributes, the text, then a reset.
//!
//! Colors are decoded here. A unit whose color is not valid `#rrggbb` is
//! written without a foreground color.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use miniformat::{Rgb, StyledText};

use crate::error::Result;

/// Queue `text` onto `out` as ANSI escape sequences. Does not flush.
pub fn write_ansi<W: Write>(out: &mut W, text: &StyledText) -> Result<()> {
    for leaf in text.leaves() {
        write_unit(out, leaf)?;
    }
    Ok(())
}

/// Render `text` to an ANSI-escaped string.
///
/// # Examples
///
/// ```
/// let text = miniformat_rs::parse("<bold>hi</bold>");
/// let ansi = miniformat_rs::ansi::to_ansi_string(&text).unwrap();
/// assert_eq!(ansi, "\x1b[1mhi\x1b[0m");
/// ```
pub fn to_ansi_string(text: &StyledText) -> Result<String> {
    let mut buf = Vec::new();
    write_ansi(&mut buf, text)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_unit<W: Write>(out: &mut W, unit: &StyledText) -> Result<()> {
    // Only reset what was actually set.
    let mut opened = false;

    if let Some(hex) = &unit.color {
        match Rgb::from_hex(hex) {
            Ok(Rgb { r, g, b }) => {
                queue!(out, SetForegroundColor(Color::Rgb { r, g, b }))?;
                opened = true;
            }
            Err(err) => log::warn!("skipping color for {:?}: {err}", unit.text),
        }
    }
    let attributes = [
        (unit.bold, Attribute::Bold),
        (unit.italic, Attribute::Italic),
        (unit.underlined.is_true(), Attribute::Underlined),
    ];
    for (on, attribute) in attributes {
        if on {
            queue!(out, SetAttribute(attribute))?;
            opened = true;
        }
    }
    // Monospace is a no-op on a terminal.

    queue!(out, Print(&unit.text))?;
    if opened {
        queue!(out, SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}
