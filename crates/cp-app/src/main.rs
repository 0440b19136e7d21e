use std::io::Write;

use anyhow::Result;
use clap::Parser;
use cp_core::config::PaletteConfig;

pub mod cli;
pub mod commands;

use cli::Command;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config
    let config = resolve_config(&cli)?;

    // 4. Exécuter la commande
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Paint {
            text,
            color,
            background,
            style,
        } => commands::run_paint(
            &mut out,
            &config,
            &text,
            commands::paint_options(color, background, style),
        )?,
        Command::Art {
            rows,
            cols,
            chars,
            seed,
            unicode,
        } => commands::run_art(
            &mut out,
            &config,
            commands::ArtArgs {
                rows,
                cols,
                chars,
                seed,
                unicode,
            },
        )?,
        Command::List => commands::run_list(&mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// Config absente : défauts. Config présente mais invalide : erreur.
fn resolve_config(cli: &cli::Cli) -> Result<PaletteConfig> {
    if cli.config.exists() {
        cp_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(PaletteConfig::default())
    }
}
