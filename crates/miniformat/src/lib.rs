//! Inline markup for styled chat text.
//!
//! This crate turns strings like `<bold>Hi <gradient:red:blue>there</gradient></bold>`
//! into a tree of styled text units for a rich-text renderer.
//!
//! # Overview
//!
//! Tags are angle-bracketed, with optional colon-separated arguments:
//!
//! - `<bold>`, `<b>` - Bold
//! - `<italic>`, `<i>`, `<em>` - Italic
//! - `<underlined>`, `<u>` - Underlined
//! - `<monospace>`, `<mono>`, `<tt>` - Fixed width
//! - `<red>`, `<dark_aqua>`, `<#ff8800>` - Solid color
//! - `<color:gold>` - Solid color, explicit form
//! - `<gradient:red:gold:blue>` - Per-character gradient over two or more stops
//! - `</...>` - Close the innermost open tag, whatever its name
//!
//! Parsing never fails. Unknown tags, unmatched close tags, unclosed tags
//! and unknown colors are all absorbed without an error.
//!
//! # Pipeline
//!
//! ```text
//! &str -> Lexer -> Token[] -> Tree -> Renderer (style + gradient) -> Message
//! ```
//!
//! # Usage
//!
//! ```
//! use miniformat::{parse, StyledText};
//!
//! let text: StyledText = parse("<bold>Hello</bold> World");
//! assert_eq!(text.plain_text(), "Hello World");
//! assert!(text.leaves()[0].bold);
//! ```

pub mod color;
pub mod error;
pub mod format;
pub mod gradient;
pub mod message;
pub mod parser;
pub mod render;
pub mod style;

// Re-export main types at crate root
pub use color::{Palette, Rgb};
pub use error::ColorParseError;
pub use format::MiniFormat;
pub use gradient::Gradient;
pub use message::{Message, StyledText, TriState};
pub use style::{Flags, StyleState};

/// Parse markup with the classic palette.
pub fn parse(input: &str) -> StyledText {
    MiniFormat::new().parse(input)
}

/// Parse markup with the classic palette into any [`Message`] type.
pub fn parse_into<M: Message>(input: &str) -> M {
    MiniFormat::new().parse_into(input)
}
