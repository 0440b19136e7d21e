/// Code-point ranges associated with emoji and pictographs.
///
/// Some blocks appear more than once; a range is picked uniformly from this
/// list, so duplicated blocks come up proportionally more often.
pub const EMOJI_RANGES: &[(u32, u32)] = &[
    // Symboles à code point unique
    (0x00A9, 0x00A9),
    (0x00AE, 0x00AE),
    (0x20E3, 0x20E3),
    (0x2122, 0x2122),
    (0x2139, 0x2139),
    (0x2194, 0x2199),
    (0x21A9, 0x21AA),
    (0x231A, 0x231B),
    (0x2328, 0x2328),
    (0x23CF, 0x23CF),
    (0x23E9, 0x23F3),
    (0x23F8, 0x23FA),
    (0x24C2, 0x24C2),
    (0x25AA, 0x25AB),
    (0x25B6, 0x25C0),
    (0x25FB, 0x25FE),
    (0x2B05, 0x2B07),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x2600, 0x27EF),
    (0x2934, 0x2935),
    (0x1F000, 0x1F02F),
    (0x1F0A0, 0x1F0FF),
    (0x1F100, 0x1F64F),
    (0x1F680, 0x1F6FF),
    (0x1F1E6, 0x1F1FF),
    // Blocs emoji Unicode
    (0x1F700, 0x1F77F),
    (0x1F780, 0x1F7FF),
    (0x1F800, 0x1F8FF),
    (0x1F900, 0x1F9FF),
    (0x1FA70, 0x1FAFF),
    (0x1FB00, 0x1FBFF),
    (0x1F300, 0x1F5FF),
    (0x1F600, 0x1F64F),
    (0x1F680, 0x1F6FF),
    (0x1F700, 0x1F77F),
    (0x1F780, 0x1F7FF),
    (0x1F800, 0x1F8FF),
    (0x1F900, 0x1F9FF),
    (0x1FA70, 0x1FAFF),
    (0x1FB00, 0x1FBFF),
    // Alphanumériques encadrés
    (0x1F170, 0x1F171),
    (0x1F17E, 0x1F17F),
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F201, 0x1F202),
    (0x1F21A, 0x1F21A),
    (0x1F22F, 0x1F22F),
    (0x1F232, 0x1F23A),
    (0x1F250, 0x1F251),
    // Visages, pictogrammes, transport, indicateurs régionaux
    (0x1F600, 0x1F64F),
    (0x1F300, 0x1F5FF),
    (0x1F680, 0x1F6FF),
    (0x1F1E6, 0x1F1FF),
];

/// Printable span used by [`random_unicode_char`].
pub const UNICODE_SPAN: (u32, u32) = (0x0020, 0x1FAFF);

/// Draws per glyph before giving up on a range.
pub const MAX_DRAW_ATTEMPTS: usize = 64;

/// Returned when every draw in a row was rejected.
pub const FALLBACK_GLYPH: char = '\u{2726}';

/// Whether a glyph would render as nothing visible.
///
/// Covers whitespace, control characters, zero-width and format characters,
/// variation selectors and the blank pattern/filler glyphs.
///
/// # Example
/// ```
/// use cp_art::glyphs::is_blank;
/// assert!(is_blank(' '));
/// assert!(is_blank('\u{200D}'));
/// assert!(!is_blank('★'));
/// ```
#[must_use]
pub fn is_blank(c: char) -> bool {
    c.is_whitespace()
        || c.is_control()
        || matches!(
            c,
            '\u{00AD}'
                | '\u{034F}'
                | '\u{115F}'
                | '\u{1160}'
                | '\u{180E}'
                | '\u{200B}'..='\u{200F}'
                | '\u{2060}'..='\u{2064}'
                | '\u{2800}'
                | '\u{3164}'
                | '\u{FE00}'..='\u{FE0F}'
                | '\u{FEFF}'
                | '\u{FFA0}'
        )
}

/// Uniform code point in `[start, end]`, rejected until visible.
fn draw_in(rng: &mut fastrand::Rng, start: u32, end: u32) -> Option<char> {
    char::from_u32(rng.u32(start..=end)).filter(|&c| !is_blank(c))
}

/// Random emoji-ish glyph: a range from [`EMOJI_RANGES`], then a code point
/// inside it.
///
/// # Example
/// ```
/// use cp_art::glyphs::{random_emoji, is_blank};
/// let mut rng = fastrand::Rng::with_seed(3);
/// let c = random_emoji(&mut rng);
/// assert!(!is_blank(c));
/// ```
#[must_use]
pub fn random_emoji(rng: &mut fastrand::Rng) -> char {
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let (start, end) = EMOJI_RANGES[rng.usize(..EMOJI_RANGES.len())];
        if let Some(c) = draw_in(rng, start, end) {
            return c;
        }
    }
    log::warn!("Aucun glyphe visible après {MAX_DRAW_ATTEMPTS} tirages, repli sur {FALLBACK_GLYPH}");
    FALLBACK_GLYPH
}

/// Random printable glyph anywhere in [`UNICODE_SPAN`].
///
/// Surrogates and blank glyphs are redrawn. Backs `art --unicode` through
/// [`ArtGenerator::random_unicode_palette`](crate::ArtGenerator::random_unicode_palette).
#[must_use]
pub fn random_unicode_char(rng: &mut fastrand::Rng) -> char {
    let (start, end) = UNICODE_SPAN;
    for _ in 0..MAX_DRAW_ATTEMPTS {
        if let Some(c) = draw_in(rng, start, end) {
            return c;
        }
    }
    log::warn!("Aucun glyphe visible après {MAX_DRAW_ATTEMPTS} tirages, repli sur {FALLBACK_GLYPH}");
    FALLBACK_GLYPH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_ordered_and_valid() {
        for &(start, end) in EMOJI_RANGES {
            assert!(start <= end, "{start:#X}..{end:#X}");
            assert!(char::from_u32(start).is_some());
            assert!(char::from_u32(end).is_some());
        }
    }

    #[test]
    fn emoji_draws_stay_in_ranges() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..2_000 {
            let c = random_emoji(&mut rng);
            assert!(!is_blank(c));
            let cp = u32::from(c);
            assert!(
                c == FALLBACK_GLYPH || EMOJI_RANGES.iter().any(|&(s, e)| (s..=e).contains(&cp)),
                "{cp:#X}"
            );
        }
    }

    #[test]
    fn unicode_draws_are_visible_and_in_span() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..2_000 {
            let c = random_unicode_char(&mut rng);
            assert!(!is_blank(c));
            assert!((UNICODE_SPAN.0..=UNICODE_SPAN.1).contains(&u32::from(c)));
        }
    }

    #[test]
    fn draw_rejects_blank_and_surrogates() {
        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(draw_in(&mut rng, 0x20, 0x20), None);
        assert_eq!(draw_in(&mut rng, 0xD800, 0xD800), None);
        assert_eq!(draw_in(&mut rng, 0x41, 0x41), Some('A'));
    }

    #[test]
    fn seeded_draws_repeat() {
        let a: Vec<char> = {
            let mut rng = fastrand::Rng::with_seed(99);
            (0..16).map(|_| random_emoji(&mut rng)).collect()
        };
        let b: Vec<char> = {
            let mut rng = fastrand::Rng::with_seed(99);
            (0..16).map(|_| random_emoji(&mut rng)).collect()
        };
        assert_eq!(a, b);
    }
}
