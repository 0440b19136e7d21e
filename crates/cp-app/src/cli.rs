use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cp_core::style::ColorSpec;

/// console-palette — ANSI text styling and emoji art.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Afficher un texte stylé.
    Paint {
        /// Texte à styler.
        text: String,

        /// Couleur : nom ("red"), hex ("#FF0000") ou "rgb(255, 0, 0)".
        #[arg(long)]
        color: Option<ColorSpec>,

        /// Fond : nom ("red" ou "bgRed"), hex ou "rgb(...)".
        #[arg(long)]
        background: Option<ColorSpec>,

        /// Styles séparés par des virgules : "bold,underline".
        #[arg(long)]
        style: Option<String>,
    },

    /// Générer une grille de glyphes.
    Art {
        /// Nombre de lignes.
        #[arg(long)]
        rows: Option<usize>,

        /// Nombre de colonnes.
        #[arg(long)]
        cols: Option<usize>,

        /// Palette explicite (chaque caractère est un glyphe).
        #[arg(long)]
        chars: Option<String>,

        /// Graine pour une sortie reproductible.
        #[arg(long)]
        seed: Option<u64>,

        /// Palette aléatoire tirée de tout Unicode (ignorée avec --chars).
        #[arg(long)]
        unicode: bool,
    },

    /// Lister les noms de la palette, chacun dans son propre style.
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_paint() {
        let cli = Cli::parse_from([
            "console-palette",
            "paint",
            "hello",
            "--color",
            "#00FF00",
            "--background",
            "bgRed",
            "--style",
            "bold,italic",
        ]);
        match cli.command {
            Command::Paint {
                text,
                color,
                background,
                style,
            } => {
                assert_eq!(text, "hello");
                assert_eq!(color, Some(ColorSpec::Hex("#00FF00".into())));
                assert_eq!(background, Some(ColorSpec::named("bgRed")));
                assert_eq!(style.as_deref(), Some("bold,italic"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_art_with_global_flags() {
        let cli = Cli::parse_from([
            "console-palette",
            "art",
            "--rows",
            "4",
            "--seed",
            "9",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(
            cli.command,
            Command::Art {
                rows: Some(4),
                cols: None,
                chars: None,
                seed: Some(9),
                unicode: false,
            }
        ));
    }

    #[test]
    fn parses_art_unicode_and_empty_chars() {
        let cli = Cli::parse_from(["console-palette", "art", "--unicode", "--chars", ""]);
        match cli.command {
            Command::Art { chars, unicode, .. } => {
                assert!(unicode);
                assert_eq!(chars.as_deref(), Some(""));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
