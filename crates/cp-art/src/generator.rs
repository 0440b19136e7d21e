use std::f64::consts::PI;

use cp_core::PaletteError;

use crate::glyphs::{random_emoji, random_unicode_char};

/// Size bounds of a random palette.
pub const RANDOM_PALETTE_MIN: usize = 1;
pub const RANDOM_PALETTE_MAX: usize = 10;

/// Ordered glyph palette of one art invocation.
///
/// A `&str` is split into individual characters; a sequence of strings is
/// kept as-is, so multi-code-point glyphs (flags, keycaps) survive. An empty
/// string counts as no palette at all.
///
/// # Example
/// ```
/// use cp_art::generator::Glyphs;
/// assert_eq!(Glyphs::from("AB").len(), 2);
/// assert_eq!(Glyphs::from(vec!["🇫🇷".to_string(), "x".to_string()]).len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Glyphs {
    glyphs: Vec<String>,
    /// Découpé depuis une chaîne plutôt que fourni en séquence.
    from_text: bool,
}

impl Glyphs {
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.glyphs
    }

    /// An empty string stands for "no palette"; an empty sequence does not.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.from_text && self.glyphs.is_empty()
    }

    fn sequence(glyphs: Vec<String>) -> Self {
        Self {
            glyphs,
            from_text: false,
        }
    }
}

impl PartialEq for Glyphs {
    fn eq(&self, other: &Self) -> bool {
        self.glyphs == other.glyphs
    }
}

impl Eq for Glyphs {}

impl From<&str> for Glyphs {
    fn from(value: &str) -> Self {
        Self {
            glyphs: value.chars().map(String::from).collect(),
            from_text: true,
        }
    }
}

impl From<String> for Glyphs {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Vec<String>> for Glyphs {
    fn from(value: Vec<String>) -> Self {
        Self::sequence(value)
    }
}

impl From<Vec<char>> for Glyphs {
    fn from(value: Vec<char>) -> Self {
        Self::sequence(value.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Glyphs {
    fn from(value: &[&str]) -> Self {
        Self::sequence(value.iter().map(|s| (*s).to_string()).collect())
    }
}

/// Dimensions et palette d'une grille.
///
/// # Example
/// ```
/// use cp_art::generator::ArtSpec;
/// let spec = ArtSpec::default();
/// assert_eq!((spec.rows, spec.cols), (50, 50));
/// assert!(spec.characters.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtSpec {
    pub rows: usize,
    pub cols: usize,
    /// `None` = palette d'emoji aléatoire (1 à 10 glyphes).
    pub characters: Option<Glyphs>,
}

impl Default for ArtSpec {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            characters: None,
        }
    }
}

impl ArtSpec {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            characters: None,
        }
    }

    #[must_use]
    pub fn with_characters(mut self, characters: impl Into<Glyphs>) -> Self {
        self.characters = Some(characters.into());
        self
    }
}

/// Champ sinusoïdal 2D : `sin(nx·fx + φx) + cos(ny·fy + φy)`, dans [-2, 2].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Field {
    pub freq_x: f64,
    pub freq_y: f64,
    pub phase_x: f64,
    pub phase_y: f64,
}

impl Field {
    /// Draw the four parameters, each in `[0, palette_len · π)`.
    #[must_use]
    pub fn random(rng: &mut fastrand::Rng, palette_len: usize) -> Self {
        let scale = palette_len as f64 * PI;
        Self {
            freq_x: rng.f64() * scale,
            freq_y: rng.f64() * scale,
            phase_x: rng.f64() * scale,
            phase_y: rng.f64() * scale,
        }
    }

    #[inline]
    #[must_use]
    pub fn value(&self, nx: f64, ny: f64) -> f64 {
        (nx * self.freq_x + self.phase_x).sin() + (ny * self.freq_y + self.phase_y).cos()
    }

    /// Palette index of cell `(x, y)` in a `cols × rows` grid.
    ///
    /// `palette_len` must be non-zero.
    #[inline]
    #[must_use]
    pub fn index(&self, x: usize, y: usize, cols: usize, rows: usize, palette_len: usize) -> usize {
        let nx = x as f64 / cols as f64;
        let ny = y as f64 / rows as f64;
        let scaled = ((self.value(nx, ny) + 2.0) / 4.0) * palette_len as f64;
        (scaled.floor().max(0.0) as usize) % palette_len
    }
}

/// Générateur d'art avec source aléatoire injectée.
///
/// # Example
/// ```
/// use cp_art::generator::{ArtGenerator, ArtSpec};
/// let spec = ArtSpec::new(3, 4).with_characters("AB");
/// let a = ArtGenerator::with_seed(1).generate(&spec).unwrap();
/// let b = ArtGenerator::with_seed(1).generate(&spec).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.lines().count(), 3);
/// ```
pub struct ArtGenerator {
    rng: fastrand::Rng,
}

impl Default for ArtGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtGenerator {
    /// Non-deterministic generator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Render the grid: `rows` lines of `cols` glyphs, each line followed by `\n`.
    ///
    /// A zero dimension yields an empty string.
    ///
    /// # Errors
    /// Returns [`PaletteError::EmptyPalette`] for an empty glyph sequence.
    /// An empty string palette is treated as absent and replaced by random emoji.
    pub fn generate(&mut self, spec: &ArtSpec) -> Result<String, PaletteError> {
        let characters = spec.characters.as_ref().filter(|g| !g.is_absent());
        if characters.is_some_and(Glyphs::is_empty) {
            return Err(PaletteError::EmptyPalette);
        }
        if spec.rows == 0 || spec.cols == 0 {
            log::debug!("Grille dégénérée {}×{}, sortie vide", spec.rows, spec.cols);
            return Ok(String::new());
        }

        let drawn;
        let palette = match characters {
            Some(glyphs) => glyphs.as_slice(),
            None => {
                drawn = self.random_palette();
                drawn.as_slice()
            }
        };
        let len = palette.len();
        let field = Field::random(&mut self.rng, len);
        log::debug!("Art {}×{} : {len} glyphes, {field:?}", spec.rows, spec.cols);

        let glyph_bytes = palette.iter().map(String::len).max().unwrap_or(1);
        let mut art = String::with_capacity(capacity_hint(spec.rows, spec.cols, glyph_bytes));
        for y in 0..spec.rows {
            for x in 0..spec.cols {
                art.push_str(&palette[field.index(x, y, spec.cols, spec.rows, len)]);
            }
            art.push('\n');
        }
        Ok(art)
    }

    /// Between 1 and 10 random emoji.
    pub fn random_palette(&mut self) -> Glyphs {
        let count = self.rng.usize(RANDOM_PALETTE_MIN..=RANDOM_PALETTE_MAX);
        (0..count)
            .map(|_| random_emoji(&mut self.rng))
            .collect::<Vec<char>>()
            .into()
    }

    /// Between 1 and 10 random printable glyphs from the whole Unicode span.
    pub fn random_unicode_palette(&mut self) -> Glyphs {
        let count = self.rng.usize(RANDOM_PALETTE_MIN..=RANDOM_PALETTE_MAX);
        (0..count)
            .map(|_| random_unicode_char(&mut self.rng))
            .collect::<Vec<char>>()
            .into()
    }
}

/// Bytes to pre-allocate; 0 when the product overflows.
fn capacity_hint(rows: usize, cols: usize, glyph_bytes: usize) -> usize {
    cols.checked_mul(glyph_bytes)
        .and_then(|line| line.checked_add(1))
        .and_then(|line| line.checked_mul(rows))
        .unwrap_or(0)
}

/// One-shot generation with a fresh, unseeded generator.
///
/// # Errors
/// See [`ArtGenerator::generate`].
///
/// # Example
/// ```
/// use cp_art::generate_art;
/// let art = generate_art(2, 3, Some("A".into())).unwrap();
/// assert_eq!(art, "AAA\nAAA\n");
/// assert_eq!(generate_art(0, 0, None).unwrap(), "");
/// ```
pub fn generate_art(
    rows: usize,
    cols: usize,
    characters: Option<Glyphs>,
) -> Result<String, PaletteError> {
    ArtGenerator::new().generate(&ArtSpec {
        rows,
        cols,
        characters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_shape_and_alphabet() {
        for (rows, cols) in [(1, 1), (5, 7), (20, 3), (50, 50)] {
            let art = generate_art(rows, cols, Some("AB".into())).unwrap();
            assert!(art.ends_with('\n'));
            let lines: Vec<&str> = art.lines().collect();
            assert_eq!(lines.len(), rows);
            for line in lines {
                assert_eq!(line.chars().count(), cols);
                assert!(line.chars().all(|c| c == 'A' || c == 'B'));
            }
        }
    }

    #[test]
    fn degenerate_dimensions_are_empty() {
        assert_eq!(generate_art(0, 0, None).unwrap(), "");
        assert_eq!(generate_art(0, 10, Some("AB".into())).unwrap(), "");
        assert_eq!(generate_art(10, 0, None).unwrap(), "");
    }

    #[test]
    fn empty_sequence_palette_is_rejected() {
        assert_eq!(
            generate_art(3, 3, Some(Vec::<String>::new().into())),
            Err(PaletteError::EmptyPalette)
        );
        assert_eq!(
            generate_art(3, 3, Some(Vec::<char>::new().into())),
            Err(PaletteError::EmptyPalette)
        );
    }

    #[test]
    fn empty_string_palette_draws_random_emoji() {
        let from_empty = ArtGenerator::with_seed(31)
            .generate(&ArtSpec::new(4, 6).with_characters(""))
            .unwrap();
        let from_none = ArtGenerator::with_seed(31)
            .generate(&ArtSpec::new(4, 6))
            .unwrap();
        assert_eq!(from_empty, from_none);
        assert_eq!(from_empty.lines().count(), 4);
        assert!(generate_art(2, 2, Some("".into())).is_ok());
    }

    #[test]
    fn capacity_hint_saturates_instead_of_overflowing() {
        assert_eq!(capacity_hint(2, 3, 1), 8);
        assert_eq!(capacity_hint(usize::MAX / 2, 2, 1), 0);
        assert_eq!(capacity_hint(2, usize::MAX, 4), 0);
        assert_eq!(capacity_hint(usize::MAX, usize::MAX, usize::MAX), 0);
    }

    #[test]
    fn unicode_palette_size_bounds() {
        let mut generator = ArtGenerator::with_seed(13);
        for _ in 0..100 {
            let glyphs = generator.random_unicode_palette();
            assert!((RANDOM_PALETTE_MIN..=RANDOM_PALETTE_MAX).contains(&glyphs.len()));
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let spec = ArtSpec::new(12, 30);
        let a = ArtGenerator::with_seed(2024).generate(&spec).unwrap();
        let b = ArtGenerator::with_seed(2024).generate(&spec).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.lines().count(), 12);
    }

    #[test]
    fn random_palette_size_bounds() {
        let mut generator = ArtGenerator::with_seed(5);
        for _ in 0..200 {
            let n = generator.random_palette().len();
            assert!((RANDOM_PALETTE_MIN..=RANDOM_PALETTE_MAX).contains(&n));
        }
    }

    #[test]
    fn multi_codepoint_glyphs_kept_whole() {
        let glyphs = Glyphs::from(vec!["🇫🇷".to_string(), "🇯🇵".to_string()]);
        let art = ArtGenerator::with_seed(8)
            .generate(&ArtSpec::new(4, 4).with_characters(glyphs))
            .unwrap();
        for line in art.lines() {
            let rest = line.replace("🇫🇷", "").replace("🇯🇵", "");
            assert!(rest.is_empty(), "{line}");
        }
    }

    #[test]
    fn field_index_covers_extremes() {
        let field = Field {
            freq_x: 0.0,
            freq_y: 0.0,
            phase_x: PI / 2.0,
            phase_y: 0.0,
        };
        // sin(π/2) + cos(0) = 2 → index wraps to 0
        assert_eq!(field.index(0, 0, 4, 4, 3), 0);

        let field = Field {
            freq_x: 0.0,
            freq_y: 0.0,
            phase_x: 0.0,
            phase_y: PI / 2.0,
        };
        // ~0 → middle of the palette
        assert_eq!(field.index(1, 1, 4, 4, 4), 2);
    }

    #[test]
    fn single_glyph_palette_fills_grid() {
        let art = generate_art(3, 2, Some(vec!['#'].into())).unwrap();
        assert_eq!(art, "##\n##\n##\n");
    }
}
