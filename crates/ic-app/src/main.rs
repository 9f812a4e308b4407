use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use ic_ascii::RenderOptions;
use ic_core::config::RenderConfig;

pub mod cli;
pub mod exit;
pub mod pipeline;

fn main() -> ExitCode {
    // 1. Parser CLI
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(exit::code_for_cli(&e));
        }
    };

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Décoder, rendre, écrire
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("imgcat: {err:#}");
            ExitCode::from(exit::code_for(&err))
        }
    }
}

fn run(cli: &cli::Cli) -> Result<()> {
    let mut config = resolve_config(cli)?;
    if cli.invert {
        config.invert = true;
    }

    let width = cli.resolve_width(&config, cli::terminal_width());
    let opts = RenderOptions::from(&config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    pipeline::run(cli.file.as_deref(), io::stdin().lock(), width, &opts, &mut out)
}

/// Load `--config` if present, defaults otherwise.
///
/// Only an explicitly passed path that is missing is worth a warning.
fn resolve_config(cli: &cli::Cli) -> Result<RenderConfig> {
    if cli.config.exists() {
        ic_core::config::load_config(&cli.config)
    } else {
        if cli.config.as_os_str() == cli::DEFAULT_CONFIG {
            log::debug!("No config at {}. Using defaults.", cli::DEFAULT_CONFIG);
        } else {
            log::warn!(
                "Config not found: {}. Using defaults.",
                cli.config.display()
            );
        }
        Ok(RenderConfig::default())
    }
}
