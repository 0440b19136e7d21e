/// Decorative glyph-grid generator for console-palette.
///
/// Fills a rectangular grid from a small palette using a 2D sinusoidal field.
pub mod generator;
pub mod glyphs;

pub use generator::{ArtGenerator, ArtSpec, Glyphs, generate_art};
pub use glyphs::{random_emoji, random_unicode_char};
