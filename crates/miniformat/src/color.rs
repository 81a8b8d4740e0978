//! Color resolution for markup tags.
//!
//! A color token is either a hex literal (`#` followed by six characters,
//! accepted by length alone) or a name looked up in a [`Palette`]. The
//! default palette is the classic sixteen-color chat table.
//!
//! Digits are only validated when something needs the channel values,
//! through [`Rgb::from_hex`].

use std::collections::HashMap;
use std::fmt;

use phf::phf_map;

use crate::error::ColorParseError;

/// Fallback used for gradient stops that do not resolve.
pub const WHITE: &str = "#FFFFFF";

/// The classic sixteen named colors.
pub static CLASSIC_COLORS: phf::Map<&'static str, &'static str> = phf_map! {
    "black" => "#000000",
    "dark_blue" => "#0000AA",
    "dark_green" => "#00AA00",
    "dark_aqua" => "#00AAAA",
    "dark_red" => "#AA0000",
    "dark_purple" => "#AA00AA",
    "gold" => "#FFAA00",
    "gray" => "#AAAAAA",
    "dark_gray" => "#555555",
    "blue" => "#5555FF",
    "green" => "#55FF55",
    "aqua" => "#55FFFF",
    "red" => "#FF5555",
    "light_purple" => "#FF55FF",
    "yellow" => "#FFFF55",
    "white" => "#FFFFFF",
};

/// Returns true if `token` is accepted verbatim as a hex color.
///
/// Only the shape is checked: seven characters, the first being `#`.
/// `#zzzzzz` passes.
pub fn is_hex_literal(token: &str) -> bool {
    token.starts_with('#') && token.chars().count() == 7
}

/// Resolve a color token against the classic palette.
///
/// # Examples
///
/// ```
/// use miniformat::color::resolve_color;
///
/// assert_eq!(resolve_color("RED").as_deref(), Some("#FF5555"));
/// assert_eq!(resolve_color("#112233").as_deref(), Some("#112233"));
/// assert_eq!(resolve_color("crimson"), None);
/// ```
pub fn resolve_color(token: &str) -> Option<String> {
    Palette::classic().resolve(token)
}

/// A named-color table.
///
/// Extra names registered with [`Palette::with_color`] are consulted before
/// the classic table, so they can also shadow a classic name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    extra: HashMap<String, String>,
}

impl Palette {
    /// The classic sixteen colors and nothing else.
    pub fn classic() -> Self {
        Self::default()
    }

    /// Register an extra named color.
    ///
    /// The name is stored lowercased. The value has to pass the same shape
    /// check as a tag color.
    pub fn with_color(mut self, name: &str, hex: &str) -> Result<Self, ColorParseError> {
        if !is_hex_literal(hex) {
            return Err(ColorParseError::InvalidHex(hex.to_string()));
        }
        self.extra.insert(name.to_lowercase(), hex.to_string());
        Ok(self)
    }

    /// Look up a color by name (case-insensitive).
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.extra
            .get(&name)
            .map(String::as_str)
            .or_else(|| CLASSIC_COLORS.get(name.as_str()).copied())
    }

    /// Resolve a color token to a hex string.
    ///
    /// Hex literals are returned as written, names through [`Palette::lookup`].
    pub fn resolve(&self, token: &str) -> Option<String> {
        if is_hex_literal(token) {
            return Some(token.to_string());
        }
        self.lookup(token).map(str::to_string)
    }
}

/// A decoded 24-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode `#rrggbb`. Digits are case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use miniformat::color::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#FF8000").unwrap(), Rgb::new(255, 128, 0));
    /// assert!(Rgb::from_hex("#GG0000").is_err());
    /// ```
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(input.to_string());

        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_table_has_sixteen_colors() {
        assert_eq!(CLASSIC_COLORS.len(), 16);
        for hex in CLASSIC_COLORS.values() {
            assert!(Rgb::from_hex(hex).is_ok(), "bad table entry {hex}");
        }
    }

    #[test]
    fn resolve_named_color() {
        assert_eq!(resolve_color("gold").as_deref(), Some("#FFAA00"));
        assert_eq!(resolve_color("Dark_Blue").as_deref(), Some("#0000AA"));
    }

    #[test]
    fn resolve_hex_verbatim() {
        assert_eq!(resolve_color("#AbCdEf").as_deref(), Some("#AbCdEf"));
        // Shape only, no digit check.
        assert_eq!(resolve_color("#zzzzzz").as_deref(), Some("#zzzzzz"));
    }

    #[test]
    fn resolve_rejects_other_lengths() {
        assert_eq!(resolve_color("#fff"), None);
        assert_eq!(resolve_color("#ff00ff00"), None);
        assert_eq!(resolve_color(""), None);
    }

    #[test]
    fn palette_extra_shadows_classic() {
        let palette = Palette::classic()
            .with_color("Brand", "#123456")
            .unwrap()
            .with_color("red", "#EE0000")
            .unwrap();

        assert_eq!(palette.resolve("brand").as_deref(), Some("#123456"));
        assert_eq!(palette.resolve("RED").as_deref(), Some("#EE0000"));
        assert_eq!(palette.resolve("blue").as_deref(), Some("#5555FF"));
    }

    #[test]
    fn palette_rejects_malformed_extra() {
        let err = Palette::classic().with_color("brand", "123456").unwrap_err();
        assert_eq!(err, ColorParseError::InvalidHex("123456".to_string()));
    }

    #[test]
    fn rgb_round_trip_formats_lowercase() {
        let rgb = Rgb::from_hex("#AA00FF").unwrap();
        assert_eq!(rgb, Rgb::new(170, 0, 255));
        assert_eq!(rgb.to_hex(), "#aa00ff");
    }

    #[test]
    fn rgb_rejects_bad_digits() {
        assert!(Rgb::from_hex("#12345g").is_err());
        assert!(Rgb::from_hex("#+12345").is_err());
        assert!(Rgb::from_hex("123456").is_err());
        assert!(Rgb::from_hex("#ééé").is_err());
    }
}
