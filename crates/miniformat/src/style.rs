//! Inherited style state.
//!
//! Every tree node starts from a copy of its parent's resolved style and
//! applies its own tag on top. Siblings never see each other's changes.
//!
//! Within a branch, flags only ever turn on. A gradient masks any solid
//! color: activating one clears `color`, and a color tag below an active
//! gradient only overwrites the masked value.

use bitflags::bitflags;

use crate::color::{Palette, WHITE};
use crate::gradient::Gradient;
use crate::message::{Message, TriState};
use crate::parser::Tag;

bitflags! {
    /// Boolean text styles.
    ///
    /// ```
    /// use miniformat::style::Flags;
    ///
    /// let mut flags = Flags::empty();
    /// flags |= Flags::BOLD;
    /// flags |= Flags::MONOSPACE;
    ///
    /// assert!(flags.contains(Flags::BOLD));
    /// assert!(!flags.contains(Flags::ITALIC));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Flags: u8 {
        const BOLD       = 0b0001;
        const ITALIC     = 0b0010;
        const UNDERLINED = 0b0100;
        const MONOSPACE  = 0b1000;
    }
}

/// The effective style at one point of the tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleState {
    /// Solid color. Ignored while `gradient` is set.
    pub color: Option<String>,
    pub flags: Flags,
    pub gradient: Option<Gradient>,
}

impl StyleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this style with `tag` applied. `self` is left untouched.
    pub fn derive(&self, tag: &str, palette: &Palette) -> StyleState {
        let mut style = self.clone();
        style.apply_tag(tag, palette);
        style
    }

    /// Apply one tag's effect in place.
    ///
    /// Tags that do not resolve to anything are a no-op.
    pub fn apply_tag(&mut self, tag: &str, palette: &Palette) {
        match Tag::parse(tag) {
            Tag::Root | Tag::Inert => {}
            Tag::Flag(flag) => self.flags |= flag,
            Tag::Gradient(arguments) => {
                let stops = arguments
                    .into_iter()
                    .map(|argument| {
                        palette.resolve(argument).unwrap_or_else(|| {
                            log::debug!("unknown gradient color {argument:?}, using white");
                            WHITE.to_string()
                        })
                    })
                    .collect();
                self.gradient = Some(Gradient::new(stops));
                self.color = None;
            }
            Tag::Color { spec, argument } => {
                let resolved = palette
                    .resolve(spec)
                    .or_else(|| argument.and_then(|argument| palette.resolve(argument)));
                match resolved {
                    Some(hex) => self.color = Some(hex),
                    None => log::debug!("ignoring unrecognized tag <{tag}>"),
                }
            }
        }
    }

    pub fn is_bold(&self) -> bool {
        self.flags.contains(Flags::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        self.flags.contains(Flags::ITALIC)
    }

    pub fn is_underlined(&self) -> bool {
        self.flags.contains(Flags::UNDERLINED)
    }

    pub fn is_monospace(&self) -> bool {
        self.flags.contains(Flags::MONOSPACE)
    }

    /// The color text should be painted with when no gradient is active.
    pub fn solid_color(&self) -> Option<&str> {
        match self.gradient {
            Some(_) => None,
            None => self.color.as_deref(),
        }
    }

    /// Write this style onto a unit. Only flags that are on are written.
    pub fn apply_to<M: Message>(&self, message: &mut M) {
        if let Some(color) = self.solid_color() {
            message.set_color(color);
        }
        if self.is_bold() {
            message.set_bold(true);
        }
        if self.is_italic() {
            message.set_italic(true);
        }
        if self.is_underlined() {
            message.set_underlined(TriState::True);
        }
        if self.is_monospace() {
            message.set_monospace(true);
        }
    }
}
