use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::style::{ColorSpec, StyleOptions};

/// Upper bound for art dimensions read from a config file.
pub const MAX_ART_SIDE: usize = 500;

/// Configuration du binaire : défauts pour `paint` et `art`.
///
/// Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use cp_core::config::PaletteConfig;
/// let config = PaletteConfig::default();
/// assert_eq!(config.art_rows, 50);
/// assert_eq!(config.art_cols, 50);
/// assert!(config.art_seed.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteConfig {
    // === Art ===
    /// Nombre de lignes de la grille.
    pub art_rows: usize,
    /// Nombre de colonnes de la grille.
    pub art_cols: usize,
    /// Palette explicite. `None` = emoji aléatoires.
    pub art_characters: Option<String>,
    /// Graine RNG. `None` = non déterministe.
    pub art_seed: Option<u64>,

    // === Paint ===
    /// Options appliquées quand la ligne de commande n'en fournit pas.
    pub paint: StyleOptions,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            art_rows: 50,
            art_cols: 50,
            art_characters: None,
            art_seed: None,
            paint: StyleOptions::default(),
        }
    }
}

impl PaletteConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.art_rows = self.art_rows.min(MAX_ART_SIDE);
        self.art_cols = self.art_cols.min(MAX_ART_SIDE);
        if self.art_characters.as_deref() == Some("") {
            log::warn!("Palette vide dans la config, retour aux emoji aléatoires.");
            self.art_characters = None;
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    art: Option<ArtSection>,
    paint: Option<PaintSection>,
}

/// Art section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct ArtSection {
    rows: Option<usize>,
    cols: Option<usize>,
    characters: Option<String>,
    seed: Option<u64>,
}

/// Paint section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct PaintSection {
    color: Option<ColorSpec>,
    background: Option<ColorSpec>,
    style: Option<String>,
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error if the text is not valid TOML for this schema.
///
/// # Example
/// ```
/// use cp_core::config::parse_config;
/// let config = parse_config("[art]\nrows = 3\n").unwrap();
/// assert_eq!(config.art_rows, 3);
/// assert_eq!(config.art_cols, 50);
/// ```
pub fn parse_config(content: &str) -> Result<PaletteConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = PaletteConfig::default();

    if let Some(a) = file.art {
        if let Some(v) = a.rows {
            config.art_rows = v;
        }
        if let Some(v) = a.cols {
            config.art_cols = v;
        }
        if let Some(v) = a.characters {
            config.art_characters = Some(v);
        }
        if let Some(v) = a.seed {
            config.art_seed = Some(v);
        }
    }

    if let Some(p) = file.paint {
        if let Some(v) = p.color {
            config.paint.color = Some(v);
        }
        if let Some(v) = p.background {
            config.paint.background = Some(v);
        }
        if let Some(v) = p.style {
            config.paint.style = Some(v);
        }
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use cp_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<PaletteConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let config =
        parse_config(&content).with_context(|| format!("Config invalide : {}", path.display()))?;
    log::info!("Config chargée depuis {}", path.display());
    Ok(config)
}
