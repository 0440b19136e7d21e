/// Code tables, color conversion and text styling for console-palette.
///
/// This crate holds every ANSI-facing type and function of the workspace:
/// the static code tables, the true-color converters, the `custom` text
/// customizer and the named palette facade.

pub mod codes;
pub mod color;
pub mod config;
pub mod error;
pub mod palette;
pub mod style;

pub use codes::{BACKGROUND_CODES, COLOR_CODES, RESET, STYLE_CODES, ansi_code, ansi_codes};
pub use color::{
    Rgb, hex_to_ansi, hex_to_ansi_background, rgb_string_to_ansi, rgb_string_to_ansi_background,
    rgb_to_ansi, rgb_to_ansi_background,
};
pub use config::PaletteConfig;
pub use error::PaletteError;
pub use palette::paint;
pub use style::{ColorSpec, StyleOptions, custom};
