use std::path::PathBuf;

use clap::Parser;
use ic_core::config::{MAX_PRINT_WIDTH, RenderConfig};

/// Config path used when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "config/default.toml";

/// imgcat — affiche une image BMP, JPEG ou PNG en ASCII dans le terminal.
#[derive(Parser, Debug)]
#[command(name = "imgcat", version, about, long_about = None)]
pub struct Cli {
    /// Image à afficher (.bmp, .jpg, .jpeg, .png). Sans fichier, lit un BMP sur stdin.
    pub file: Option<PathBuf>,

    /// Largeur de sortie en caractères. Défaut : config, puis largeur du terminal.
    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PRINT_WIDTH))
    )]
    pub width: Option<u32>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Inverser la rampe (pour terminal à fond clair).
    #[arg(long, default_value_t = false)]
    pub invert: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Pick the print width: `-w`, then config `width`, then the terminal,
    /// then config `fallback_width`.
    #[must_use]
    pub fn resolve_width(&self, config: &RenderConfig, terminal_cols: Option<u32>) -> u32 {
        self.width
            .or(config.width)
            .or(terminal_cols)
            .unwrap_or(config.fallback_width)
    }
}

/// Current terminal column count, if a terminal is attached.
#[must_use]
pub fn terminal_width() -> Option<u32> {
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => Some(u32::from(cols)),
        Ok(_) => None,
        Err(e) => {
            log::debug!("Terminal size unavailable: {e}");
            None
        }
    }
}
