//! Tag content classification.
//!
//! Interprets the text inside `<...>`. Only the first colon-separated
//! segment selects the tag kind, compared case-insensitively.

use crate::style::Flags;

/// What a tag asks for, before any color is resolved.
#[derive(Clone, Debug, PartialEq)]
pub enum Tag<'a> {
    /// The synthetic tree root. No effect.
    Root,
    /// One of the boolean styles: `<bold>`, `<i>`, `<u>`, `<mono>`, ...
    Flag(Flags),
    /// `<gradient:a:b[:c...]>` with the raw color arguments.
    Gradient(Vec<&'a str>),
    /// Anything else: the whole tag is tried as a color, then the argument
    /// of a `<color:x>` tag.
    Color {
        spec: &'a str,
        argument: Option<&'a str>,
    },
    /// A recognized name used with the wrong arity, e.g. `<gradient:red>`.
    Inert,
}

impl<'a> Tag<'a> {
    /// Name of the synthetic root node.
    pub const ROOT: &'static str = "root";

    /// Classify raw tag content (the text between `<` and `>`).
    ///
    /// # Examples
    ///
    /// ```
    /// use miniformat::parser::Tag;
    /// use miniformat::style::Flags;
    ///
    /// assert_eq!(Tag::parse("B"), Tag::Flag(Flags::BOLD));
    /// assert_eq!(Tag::parse("gradient:red:#00ff00"), Tag::Gradient(vec!["red", "#00ff00"]));
    /// assert_eq!(Tag::parse("gradient:red"), Tag::Inert);
    /// ```
    pub fn parse(raw: &'a str) -> Self {
        if raw == Self::ROOT {
            return Tag::Root;
        }

        let mut parts = raw.split(':');
        let name = parts.next().unwrap_or_default().to_lowercase();

        match name.as_str() {
            "bold" | "b" => Tag::Flag(Flags::BOLD),
            "italic" | "i" | "em" => Tag::Flag(Flags::ITALIC),
            "underlined" | "u" => Tag::Flag(Flags::UNDERLINED),
            "monospace" | "mono" | "tt" => Tag::Flag(Flags::MONOSPACE),
            "gradient" => {
                let arguments: Vec<&str> = parts.collect();
                if arguments.len() >= 2 {
                    Tag::Gradient(arguments)
                } else {
                    Tag::Inert
                }
            }
            "color" => Tag::Color {
                spec: raw,
                argument: parts.next(),
            },
            _ => Tag::Color {
                spec: raw,
                argument: None,
            },
        }
    }
}
