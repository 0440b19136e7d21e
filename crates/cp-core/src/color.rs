use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};

/// Unanchored on purpose: `"color: rgb(1, 2, 3);"` is accepted.
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgb\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)").expect("valid regex")
});

/// A 24-bit color triple.
///
/// # Example
/// ```
/// use cp_core::color::Rgb;
/// let teal = Rgb::new(0, 128, 128);
/// assert_eq!(teal.truecolor_fg(), "\x1b[38;2;0;128;128m");
/// assert_eq!(teal.truecolor_bg(), "\x1b[48;2;0;128;128m");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Séquence true-color foreground `ESC[38;2;R;G;Bm`.
    #[must_use]
    pub fn truecolor_fg(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Séquence true-color background `ESC[48;2;R;G;Bm`.
    #[must_use]
    pub fn truecolor_bg(self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Parse `#RRGGBB` into its components.
///
/// The six digits are read as one 24-bit integer and split by shifting.
///
/// # Errors
/// Returns [`PaletteError::InvalidHex`] if the `#` prefix is missing or the
/// rest is not exactly six hex digits.
///
/// # Example
/// ```
/// use cp_core::color::{parse_hex, Rgb};
/// assert_eq!(parse_hex("#FF8000").unwrap(), Rgb::new(255, 128, 0));
/// assert!(parse_hex("FF8000").is_err());
/// ```
pub fn parse_hex(hex: &str) -> Result<Rgb> {
    let invalid = || PaletteError::InvalidHex {
        input: hex.to_string(),
    };
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    Ok(Rgb {
        r: ((value >> 16) & 0xFF) as u8,
        g: ((value >> 8) & 0xFF) as u8,
        b: (value & 0xFF) as u8,
    })
}

/// Parse `rgb(r, g, b)`; whitespace around components is tolerated.
///
/// # Errors
/// Returns [`PaletteError::InvalidFormat`] when the pattern is not found or a
/// component does not fit in a byte.
///
/// # Example
/// ```
/// use cp_core::color::{parse_rgb_string, Rgb};
/// assert_eq!(parse_rgb_string("rgb( 1 ,2, 3 )").unwrap(), Rgb::new(1, 2, 3));
/// assert!(parse_rgb_string("rgb(256, 0, 0)").is_err());
/// ```
pub fn parse_rgb_string(input: &str) -> Result<Rgb> {
    let invalid = || PaletteError::InvalidFormat {
        input: input.to_string(),
    };
    let caps = RGB_RE.captures(input).ok_or_else(invalid)?;
    let component = |i: usize| caps[i].parse::<u8>().map_err(|_| invalid());
    Ok(Rgb {
        r: component(1)?,
        g: component(2)?,
        b: component(3)?,
    })
}

/// Hex `#RRGGBB` → foreground true-color escape.
///
/// # Errors
/// See [`parse_hex`].
///
/// # Example
/// ```
/// use cp_core::hex_to_ansi;
/// assert_eq!(hex_to_ansi("#000000").unwrap(), "\x1b[38;2;0;0;0m");
/// ```
pub fn hex_to_ansi(hex: &str) -> Result<String> {
    parse_hex(hex).map(Rgb::truecolor_fg)
}

/// Hex `#RRGGBB` → background true-color escape.
///
/// # Errors
/// See [`parse_hex`].
pub fn hex_to_ansi_background(hex: &str) -> Result<String> {
    parse_hex(hex).map(Rgb::truecolor_bg)
}

#[must_use]
pub fn rgb_to_ansi(rgb: Rgb) -> String {
    rgb.truecolor_fg()
}

#[must_use]
pub fn rgb_to_ansi_background(rgb: Rgb) -> String {
    rgb.truecolor_bg()
}

/// `rgb(r, g, b)` → foreground true-color escape.
///
/// # Errors
/// See [`parse_rgb_string`].
///
/// # Example
/// ```
/// use cp_core::{rgb_string_to_ansi, PaletteError};
/// assert_eq!(rgb_string_to_ansi("rgb(10, 20, 30)").unwrap(), "\x1b[38;2;10;20;30m");
/// assert!(matches!(
///     rgb_string_to_ansi("not-rgb"),
///     Err(PaletteError::InvalidFormat { .. })
/// ));
/// ```
pub fn rgb_string_to_ansi(input: &str) -> Result<String> {
    parse_rgb_string(input).map(Rgb::truecolor_fg)
}

/// `rgb(r, g, b)` → background true-color escape.
///
/// # Errors
/// See [`parse_rgb_string`].
pub fn rgb_string_to_ansi_background(input: &str) -> Result<String> {
    parse_rgb_string(input).map(Rgb::truecolor_bg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_extremes() {
        assert_eq!(hex_to_ansi("#000000").unwrap(), "\x1b[38;2;0;0;0m");
        assert_eq!(hex_to_ansi("#FFFFFF").unwrap(), "\x1b[38;2;255;255;255m");
        assert_eq!(
            hex_to_ansi_background("#ffffff").unwrap(),
            "\x1b[48;2;255;255;255m"
        );
    }

    #[test]
    fn hex_components_split_by_shift() {
        assert_eq!(parse_hex("#123456").unwrap(), Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(
            hex_to_ansi_background("#0A0B0C").unwrap(),
            "\x1b[48;2;10;11;12m"
        );
    }

    #[test]
    fn malformed_hex_fails_loudly() {
        for bad in ["", "#", "#12345", "#1234567", "#GGGGGG", "123456", "#+12345"] {
            assert_eq!(
                parse_hex(bad),
                Err(PaletteError::InvalidHex { input: bad.into() }),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn rgb_triple_templates() {
        let c = Rgb::from((1, 2, 3));
        assert_eq!(rgb_to_ansi(c), "\x1b[38;2;1;2;3m");
        assert_eq!(rgb_to_ansi_background(c), "\x1b[48;2;1;2;3m");
    }

    #[test]
    fn rgb_string_parses_with_whitespace() {
        assert_eq!(
            rgb_string_to_ansi("rgb(10, 20, 30)").unwrap(),
            "\x1b[38;2;10;20;30m"
        );
        assert_eq!(
            rgb_string_to_ansi_background("rgb(  0,0 ,   255 )").unwrap(),
            "\x1b[48;2;0;0;255m"
        );
        assert_eq!(
            parse_rgb_string("color: rgb(7,8,9);").unwrap(),
            Rgb::new(7, 8, 9)
        );
    }

    #[test]
    fn rgb_string_rejects_garbage() {
        for bad in ["not-rgb", "rgb(1,2)", "rgb(a,b,c)", "rgb(1,2,300)", "rgb(-1,2,3)"] {
            assert_eq!(
                rgb_string_to_ansi(bad),
                Err(PaletteError::InvalidFormat { input: bad.into() }),
                "{bad:?}"
            );
        }
    }
}
