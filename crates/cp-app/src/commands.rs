use std::io::Write;

use anyhow::Result;
use cp_art::{ArtGenerator, ArtSpec, Glyphs};
use cp_core::config::{MAX_ART_SIDE, PaletteConfig};
use cp_core::palette::{facade_names, paint};
use cp_core::style::{ColorSpec, StyleOptions, custom};

/// `paint` : les options CLI priment, la section `[paint]` complète.
///
/// # Errors
/// Returns an error on a malformed hex / rgb value or a failed write.
pub fn run_paint(
    out: &mut impl Write,
    config: &PaletteConfig,
    text: &str,
    options: StyleOptions,
) -> Result<()> {
    let options = options.or(&config.paint);
    let styled = custom(text, &options)?;
    writeln!(out, "{styled}")?;
    Ok(())
}

/// Build the paint options from the raw CLI values.
#[must_use]
pub fn paint_options(
    color: Option<ColorSpec>,
    background: Option<ColorSpec>,
    style: Option<String>,
) -> StyleOptions {
    StyleOptions {
        color,
        background,
        style,
    }
}

/// CLI overrides for the `art` command.
#[derive(Debug, Default)]
pub struct ArtArgs {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub chars: Option<String>,
    pub seed: Option<u64>,
    /// Palette aléatoire tirée de tout l'espace Unicode plutôt que des emoji.
    pub unicode: bool,
}

/// `art` : dimensions, palette et graine résolues CLI > config > défauts.
///
/// Dimensions are clamped to [`MAX_ART_SIDE`], like the config file. An
/// empty `--chars` counts as absent.
///
/// # Errors
/// Returns an error on a failed write.
pub fn run_art(out: &mut impl Write, config: &PaletteConfig, args: ArtArgs) -> Result<()> {
    let mut generator = match args.seed.or(config.art_seed) {
        Some(seed) => ArtGenerator::with_seed(seed),
        None => ArtGenerator::new(),
    };
    let characters = args
        .chars
        .filter(|chars| !chars.is_empty())
        .map(Glyphs::from)
        .or_else(|| args.unicode.then(|| generator.random_unicode_palette()))
        .or_else(|| config.art_characters.as_deref().map(Glyphs::from));
    let rows = args.rows.unwrap_or(config.art_rows);
    let cols = args.cols.unwrap_or(config.art_cols);
    if rows > MAX_ART_SIDE || cols > MAX_ART_SIDE {
        log::warn!("Grille {rows}×{cols} réduite à {MAX_ART_SIDE} par côté");
    }
    let spec = ArtSpec {
        rows: rows.min(MAX_ART_SIDE),
        cols: cols.min(MAX_ART_SIDE),
        characters,
    };
    let art = generator.generate(&spec)?;
    out.write_all(art.as_bytes())?;
    Ok(())
}

/// `list` : chaque nom de la palette, rendu avec son propre code.
///
/// # Errors
/// Returns an error on a failed write.
pub fn run_list(out: &mut impl Write) -> Result<()> {
    for name in facade_names() {
        if let Some(sample) = paint(name, name) {
            writeln!(out, "{sample}")?;
        }
    }
    Ok(())
}
