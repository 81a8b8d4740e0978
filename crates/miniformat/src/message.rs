//! The rich-text surface markup is rendered into.
//!
//! [`Message`] is the small set of operations the renderer needs from a
//! host text library: build a raw unit, style it in place, join units.
//! [`StyledText`] is the bundled implementation.

use std::fmt::Write as _;

/// A flag that can also be left unset, letting the host inherit it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriState {
    #[default]
    Unset,
    False,
    True,
}

impl TriState {
    pub fn is_true(self) -> bool {
        self == TriState::True
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value { TriState::True } else { TriState::False }
    }
}

/// A rich-text unit built by the renderer.
pub trait Message: Sized {
    /// An unstyled unit holding `text`.
    fn raw(text: &str) -> Self;

    /// Set the foreground color, `#rrggbb`.
    fn set_color(&mut self, hex: &str);

    fn set_bold(&mut self, bold: bool);

    fn set_italic(&mut self, italic: bool);

    fn set_monospace(&mut self, monospace: bool);

    fn set_underlined(&mut self, underlined: TriState);

    /// Compose units, in order, into one.
    fn join(parts: Vec<Self>) -> Self;
}

/// A tree of styled text units.
///
/// Leaves carry text and style. Units produced by [`Message::join`] carry
/// no text of their own and own their parts as children.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledText {
    pub text: String,
    pub color: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub monospace: bool,
    pub underlined: TriState,
    pub children: Vec<StyledText>,
}

impl StyledText {
    fn unit(text: String, children: Vec<StyledText>) -> Self {
        Self {
            text,
            color: None,
            bold: false,
            italic: false,
            monospace: false,
            underlined: TriState::Unset,
            children,
        }
    }

    /// All text, depth-first, without styling.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for unit in self.walk() {
            out.push_str(&unit.text);
        }
        out
    }

    /// Units that carry text, depth-first.
    pub fn leaves(&self) -> Vec<&StyledText> {
        self.walk().filter(|unit| !unit.text.is_empty()).collect()
    }

    /// Pre-order walk over this unit and everything below it.
    fn walk(&self) -> impl Iterator<Item = &StyledText> {
        let mut pending = vec![self];
        std::iter::from_fn(move || {
            let unit = pending.pop()?;
            pending.extend(unit.children.iter().rev());
            Some(unit)
        })
    }

    /// Returns true if no style is set on this unit itself.
    pub fn is_unstyled(&self) -> bool {
        self.color.is_none()
            && !self.bold
            && !self.italic
            && !self.monospace
            && self.underlined == TriState::Unset
    }

    /// One line per leaf: the quoted text followed by its style.
    ///
    /// ```text
    /// "Hi" bold color=#FF5555
    /// " there" -
    /// ```
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for (i, leaf) in self.leaves().into_iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = write!(out, "{:?}", leaf.text);
            if leaf.is_unstyled() {
                out.push_str(" -");
                continue;
            }
            if leaf.bold {
                out.push_str(" bold");
            }
            if leaf.italic {
                out.push_str(" italic");
            }
            if leaf.underlined != TriState::Unset {
                let _ = write!(out, " underlined={:?}", leaf.underlined);
            }
            if leaf.monospace {
                out.push_str(" mono");
            }
            if let Some(color) = &leaf.color {
                let _ = write!(out, " color={color}");
            }
        }
        out
    }
}

// Joined units can nest as deep as the markup does; unlink children one
// level at a time instead of letting drop glue recurse.
impl Drop for StyledText {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut unit) = pending.pop() {
            pending.append(&mut unit.children);
        }
    }
}

impl Message for StyledText {
    fn raw(text: &str) -> Self {
        Self::unit(text.to_string(), Vec::new())
    }

    fn set_color(&mut self, hex: &str) {
        self.color = Some(hex.to_string());
    }

    fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    fn set_italic(&mut self, italic: bool) {
        self.italic = italic;
    }

    fn set_monospace(&mut self, monospace: bool) {
        self.monospace = monospace;
    }

    fn set_underlined(&mut self, underlined: TriState) {
        self.underlined = underlined;
    }

    fn join(parts: Vec<Self>) -> Self {
        Self::unit(String::new(), parts)
    }
}
