//! Named convenience formatters, one per code-table key.
//!
//! Background keys format with the background resolution of their base
//! color (`bgRed` → `red`); every other key, styles included, formats as a
//! foreground lookup of the key itself.

use crate::codes::{self, RESET};
use crate::style::{named_background, named_foreground, wrap};

/// Format `text` with the facade entry registered under `key`.
///
/// Keys are the camelCase table names (`"brightRed"`, `"bgBlue"`, `"bold"`).
/// Returns `None` for a key that is not in the merged table.
///
/// # Example
/// ```
/// use cp_core::palette::paint;
/// assert_eq!(paint("red", "hi").as_deref(), Some("\x1b[31mhi\x1b[0m"));
/// assert_eq!(paint("bgRed", "hi").as_deref(), Some("\x1b[41mhi\x1b[0m"));
/// assert_eq!(paint("nope", "hi"), None);
/// ```
#[must_use]
pub fn paint(key: &str, text: &str) -> Option<String> {
    codes::ansi_code(key)?;
    if codes::is_background_key(key) {
        Some(wrap("", "", named_background(&base_color(key)), text))
    } else {
        Some(wrap("", named_foreground(key), "", text))
    }
}

/// Every key [`paint`] accepts, in table order.
pub fn facade_names() -> impl Iterator<Item = &'static str> {
    codes::names()
}

/// `"bgBrightRed"` → `"brightRed"`.
fn base_color(key: &str) -> String {
    let rest = key.strip_prefix("bg").unwrap_or(key);
    let mut chars = rest.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reset-only formatter: `ESC[0m text ESC[0m`.
#[must_use]
pub fn reset(text: &str) -> String {
    wrap("", RESET, "", text)
}

/// A generated formatter with the name it answers to.
type Formatter = (&'static str, fn(&str) -> String);

macro_rules! foreground_fns {
    ($($fn_name:ident => $key:literal),* $(,)?) => {
        $(
            #[doc = concat!("Format `text` with the `", $key, "` code.")]
            #[must_use]
            pub fn $fn_name(text: &str) -> String {
                wrap("", named_foreground($key), "", text)
            }
        )*

        /// Generated foreground formatters, keyed by table name.
        #[cfg_attr(not(test), allow(dead_code))]
        pub(crate) const FOREGROUND_FNS: &[Formatter] = &[$(($key, $fn_name)),*];
    };
}

macro_rules! background_fns {
    ($($fn_name:ident => $base:literal),* $(,)?) => {
        $(
            #[doc = concat!("Format `text` on a `", $base, "` background.")]
            #[must_use]
            pub fn $fn_name(text: &str) -> String {
                wrap("", "", named_background($base), text)
            }
        )*

        /// Generated background formatters, keyed by base color.
        #[cfg_attr(not(test), allow(dead_code))]
        pub(crate) const BACKGROUND_FNS: &[Formatter] = &[$(($base, $fn_name)),*];
    };
}

foreground_fns! {
    bold => "bold",
    underline => "underline",
    italic => "italic",
    strikethrough => "strikethrough",
    inverse => "inverse",

    black => "black",
    red => "red",
    green => "green",
    yellow => "yellow",
    blue => "blue",
    magenta => "magenta",
    cyan => "cyan",
    white => "white",
    bright_black => "brightBlack",
    bright_red => "brightRed",
    bright_green => "brightGreen",
    bright_yellow => "brightYellow",
    bright_blue => "brightBlue",
    bright_magenta => "brightMagenta",
    bright_cyan => "brightCyan",
    bright_white => "brightWhite",
}

background_fns! {
    bg_black => "black",
    bg_red => "red",
    bg_green => "green",
    bg_yellow => "yellow",
    bg_blue => "blue",
    bg_magenta => "magenta",
    bg_cyan => "cyan",
    bg_white => "white",
    bg_bright_red => "brightRed",
    bg_bright_green => "brightGreen",
    bg_bright_yellow => "brightYellow",
    bg_bright_blue => "brightBlue",
    bg_bright_magenta => "brightMagenta",
    bg_bright_cyan => "brightCyan",
    bg_bright_white => "brightWhite",
}
