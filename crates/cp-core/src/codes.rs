use std::collections::HashMap;
use std::sync::LazyLock;

/// Reset sequence, terminates every styled string.
pub const RESET: &str = "\x1b[0m";

/// Text attributes (6 entries).
pub const STYLE_CODES: &[(&str, &str)] = &[
    ("reset", RESET),
    ("bold", "\x1b[1m"),
    ("underline", "\x1b[4m"),
    ("italic", "\x1b[3m"),
    ("strikethrough", "\x1b[9m"),
    ("inverse", "\x1b[7m"),
];

/// Standard and bright foreground colors (16 entries).
pub const COLOR_CODES: &[(&str, &str)] = &[
    ("black", "\x1b[30m"),
    ("red", "\x1b[31m"),
    ("green", "\x1b[32m"),
    ("yellow", "\x1b[33m"),
    ("blue", "\x1b[34m"),
    ("magenta", "\x1b[35m"),
    ("cyan", "\x1b[36m"),
    ("white", "\x1b[37m"),
    ("brightBlack", "\x1b[90m"),
    ("brightRed", "\x1b[91m"),
    ("brightGreen", "\x1b[92m"),
    ("brightYellow", "\x1b[93m"),
    ("brightBlue", "\x1b[94m"),
    ("brightMagenta", "\x1b[95m"),
    ("brightCyan", "\x1b[96m"),
    ("brightWhite", "\x1b[97m"),
];

/// Standard and bright background colors (15 entries, no `bgBrightBlack`).
pub const BACKGROUND_CODES: &[(&str, &str)] = &[
    ("bgBlack", "\x1b[40m"),
    ("bgRed", "\x1b[41m"),
    ("bgGreen", "\x1b[42m"),
    ("bgYellow", "\x1b[43m"),
    ("bgBlue", "\x1b[44m"),
    ("bgMagenta", "\x1b[45m"),
    ("bgCyan", "\x1b[46m"),
    ("bgWhite", "\x1b[47m"),
    ("bgBrightRed", "\x1b[101m"),
    ("bgBrightGreen", "\x1b[102m"),
    ("bgBrightYellow", "\x1b[103m"),
    ("bgBrightBlue", "\x1b[104m"),
    ("bgBrightMagenta", "\x1b[105m"),
    ("bgBrightCyan", "\x1b[106m"),
    ("bgBrightWhite", "\x1b[107m"),
];

/// Table fusionnée styles + couleurs + fonds. Construite une seule fois.
static ANSI_CODES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    STYLE_CODES
        .iter()
        .chain(COLOR_CODES)
        .chain(BACKGROUND_CODES)
        .copied()
        .collect()
});

fn find(table: &[(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
}

/// Merged lookup across all three namespaces.
///
/// # Example
/// ```
/// use cp_core::codes::ansi_code;
/// assert_eq!(ansi_code("bold"), Some("\x1b[1m"));
/// assert_eq!(ansi_code("bgRed"), Some("\x1b[41m"));
/// assert_eq!(ansi_code("mauve"), None);
/// ```
#[must_use]
pub fn ansi_code(name: &str) -> Option<&'static str> {
    ANSI_CODES.get(name).copied()
}

/// The merged table, for inspection.
#[must_use]
pub fn ansi_codes() -> &'static HashMap<&'static str, &'static str> {
    &ANSI_CODES
}

#[must_use]
pub fn style_code(name: &str) -> Option<&'static str> {
    find(STYLE_CODES, name)
}

#[must_use]
pub fn color_code(name: &str) -> Option<&'static str> {
    find(COLOR_CODES, name)
}

#[must_use]
pub fn background_code(name: &str) -> Option<&'static str> {
    find(BACKGROUND_CODES, name)
}

/// Every table key in declaration order: styles, colors, then backgrounds.
pub fn names() -> impl Iterator<Item = &'static str> {
    STYLE_CODES
        .iter()
        .chain(COLOR_CODES)
        .chain(BACKGROUND_CODES)
        .map(|(k, _)| *k)
}

/// Whether `name` lives in the background namespace (`bg` + capitalized color).
#[must_use]
pub fn is_background_key(name: &str) -> bool {
    name.strip_prefix("bg")
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(STYLE_CODES.len(), 6);
        assert_eq!(COLOR_CODES.len(), 16);
        assert_eq!(BACKGROUND_CODES.len(), 15);
    }

    #[test]
    fn merged_table_has_no_collisions() {
        assert_eq!(
            ansi_codes().len(),
            STYLE_CODES.len() + COLOR_CODES.len() + BACKGROUND_CODES.len()
        );
        assert_eq!(names().count(), ansi_codes().len());
    }

    #[test]
    fn every_code_is_an_sgr_sequence() {
        for name in names() {
            let code = ansi_code(name).unwrap();
            assert!(code.starts_with("\x1b["), "{name}");
            assert!(code.ends_with('m'), "{name}");
        }
    }

    #[test]
    fn namespace_lookups_stay_separate() {
        assert_eq!(color_code("red"), Some("\x1b[31m"));
        assert_eq!(background_code("red"), None);
        assert_eq!(background_code("bgBlack"), Some("\x1b[40m"));
        assert_eq!(style_code("inverse"), Some("\x1b[7m"));
        assert_eq!(style_code("red"), None);
    }

    #[test]
    fn background_key_detection() {
        assert!(is_background_key("bgRed"));
        assert!(is_background_key("bgBrightCyan"));
        assert!(!is_background_key("red"));
        assert!(!is_background_key("bg"));
        assert!(!is_background_key("bgred"));
        assert!(!is_background_key("bold"));
    }
}
