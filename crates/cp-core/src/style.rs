use std::borrow::Cow;
use std::convert::Infallible;
use std::str::FromStr;

use serde::Deserialize;

use crate::codes::{RESET, ansi_code, background_code, is_background_key};
use crate::color::{
    Rgb, hex_to_ansi, hex_to_ansi_background, rgb_string_to_ansi, rgb_string_to_ansi_background,
    rgb_to_ansi, rgb_to_ansi_background,
};
use crate::error::Result;

/// A color request, in any of the four accepted notations.
///
/// # Example
/// ```
/// use cp_core::style::ColorSpec;
/// use cp_core::color::Rgb;
/// assert_eq!(ColorSpec::parse("#00FF00"), ColorSpec::Hex("#00FF00".into()));
/// assert_eq!(ColorSpec::parse("rgb(1,2,3)"), ColorSpec::RgbString("rgb(1,2,3)".into()));
/// assert_eq!(ColorSpec::parse("cyan"), ColorSpec::Named("cyan".into()));
/// assert_eq!(ColorSpec::from(Rgb::new(1, 2, 3)), ColorSpec::Rgb(Rgb::new(1, 2, 3)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawColorSpec")]
pub enum ColorSpec {
    /// Clé d'une table de codes (`"red"`, `"bgBlue"`, `"bold"`...).
    Named(String),
    /// `#RRGGBB`.
    Hex(String),
    /// Triplet typé.
    Rgb(Rgb),
    /// `rgb(r, g, b)`.
    RgbString(String),
}

impl ColorSpec {
    /// Classify a string by prefix: `#` is hex, `rgb` is an rgb string,
    /// anything else is a table name.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.starts_with('#') {
            Self::Hex(value.to_string())
        } else if value.starts_with("rgb") {
            Self::RgbString(value.to_string())
        } else {
            Self::Named(value.to_string())
        }
    }

    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for ColorSpec {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Rgb> for ColorSpec {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl FromStr for ColorSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// TOML accepts either `"red"` / `"#ff0000"` or an inline `{ r, g, b }` table.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawColorSpec {
    Rgb(Rgb),
    Text(String),
}

impl From<RawColorSpec> for ColorSpec {
    fn from(raw: RawColorSpec) -> Self {
        match raw {
            RawColorSpec::Rgb(rgb) => Self::Rgb(rgb),
            RawColorSpec::Text(text) => Self::parse(&text),
        }
    }
}

/// Per-call formatting options. Every field is optional.
///
/// # Example
/// ```
/// use cp_core::style::StyleOptions;
/// let opts = StyleOptions::default().with_color("red").with_style("bold");
/// assert!(opts.background.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StyleOptions {
    #[serde(default)]
    pub color: Option<ColorSpec>,
    #[serde(default)]
    pub background: Option<ColorSpec>,
    /// Liste de styles séparés par des virgules : `"bold, underline"`.
    #[serde(default)]
    pub style: Option<String>,
}

impl StyleOptions {
    #[must_use]
    pub fn with_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_background(mut self, background: impl Into<ColorSpec>) -> Self {
        self.background = Some(background.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Fill unset fields from `fallback`.
    #[must_use]
    pub fn or(self, fallback: &Self) -> Self {
        Self {
            color: self.color.or_else(|| fallback.color.clone()),
            background: self.background.or_else(|| fallback.background.clone()),
            style: self.style.or_else(|| fallback.style.clone()),
        }
    }
}

/// Wrap `text` as `style + color + background + text + reset`.
///
/// Unknown names contribute an empty fragment. The reset sequence is
/// appended even when no option is set.
///
/// # Errors
/// Fails only on an explicit hex or `rgb(...)` value that does not parse.
///
/// # Example
/// ```
/// use cp_core::{custom, StyleOptions, RESET};
/// assert_eq!(custom("x", &StyleOptions::default()).unwrap(), format!("x{RESET}"));
///
/// let opts = StyleOptions::default().with_style("bold,underline");
/// assert_eq!(custom("x", &opts).unwrap(), "\x1b[1m\x1b[4mx\x1b[0m");
/// ```
pub fn custom(text: &str, options: &StyleOptions) -> Result<String> {
    let color = match &options.color {
        Some(spec) => foreground_fragment(spec)?,
        None => Cow::Borrowed(""),
    };
    let background = match &options.background {
        Some(spec) => background_fragment(spec)?,
        None => Cow::Borrowed(""),
    };
    let style = options.style.as_deref().map(style_fragment).unwrap_or_default();

    Ok(wrap(&style, &color, &background, text))
}

pub(crate) fn wrap(style: &str, color: &str, background: &str, text: &str) -> String {
    let mut out =
        String::with_capacity(style.len() + color.len() + background.len() + text.len() + RESET.len());
    out.push_str(style);
    out.push_str(color);
    out.push_str(background);
    out.push_str(text);
    out.push_str(RESET);
    out
}

/// Escape for a foreground request.
///
/// # Errors
/// Propagates hex / rgb-string parse failures.
pub fn foreground_fragment(spec: &ColorSpec) -> Result<Cow<'static, str>> {
    Ok(match spec {
        ColorSpec::Rgb(rgb) => Cow::Owned(rgb_to_ansi(*rgb)),
        ColorSpec::Hex(hex) => Cow::Owned(hex_to_ansi(hex)?),
        ColorSpec::RgbString(s) => Cow::Owned(rgb_string_to_ansi(s)?),
        ColorSpec::Named(name) => Cow::Borrowed(named_foreground(name)),
    })
}

/// Escape for a background request.
///
/// # Errors
/// Propagates hex / rgb-string parse failures.
pub fn background_fragment(spec: &ColorSpec) -> Result<Cow<'static, str>> {
    Ok(match spec {
        ColorSpec::Rgb(rgb) => Cow::Owned(rgb_to_ansi_background(*rgb)),
        ColorSpec::Hex(hex) => Cow::Owned(hex_to_ansi_background(hex)?),
        ColorSpec::RgbString(s) => Cow::Owned(rgb_string_to_ansi_background(s)?),
        ColorSpec::Named(name) => Cow::Borrowed(named_background(name)),
    })
}

/// Foreground names resolve against the merged table, so style names work too.
#[must_use]
pub fn named_foreground(name: &str) -> &'static str {
    ansi_code(name).unwrap_or_else(|| {
        log::debug!("Couleur inconnue ignorée : {name}");
        ""
    })
}

/// `"red"` and `"bgRed"` resolve to the same background entry.
///
/// # Example
/// ```
/// use cp_core::style::named_background;
/// assert_eq!(named_background("red"), "\x1b[41m");
/// assert_eq!(named_background("bgRed"), "\x1b[41m");
/// assert_eq!(named_background("brightCyan"), "\x1b[106m");
/// ```
#[must_use]
pub fn named_background(name: &str) -> &'static str {
    let key = if is_background_key(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(background_key(name))
    };
    background_code(&key).unwrap_or_else(|| {
        log::debug!("Fond inconnu ignoré : {name}");
        ""
    })
}

/// `"brightRed"` → `"bgBrightRed"`.
#[must_use]
pub fn background_key(base: &str) -> String {
    let mut chars = base.chars();
    let mut key = String::with_capacity(base.len() + 2);
    key.push_str("bg");
    if let Some(first) = chars.next() {
        key.extend(first.to_uppercase());
        key.push_str(chars.as_str());
    }
    key
}

/// Concatenate the codes of a comma-separated list, in the order given.
#[must_use]
pub fn style_fragment(list: &str) -> String {
    list.split(',')
        .map(str::trim)
        .filter_map(|token| {
            let code = ansi_code(token);
            if code.is_none() && !token.is_empty() {
                log::debug!("Style inconnu ignoré : {token}");
            }
            code
        })
        .collect()
}
