//! periwave - Terminal explorer for periodic waveforms
//!
//! Run with: cargo run -- --harmonic 1,1,0 --harmonic 0.5,0.25,0.125

mod app;
mod cli;
mod export;
mod form;
mod oscillator;
mod ui;

use std::fs::File;
use std::path::Path;

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use env_logger::{Builder, Env, Target};

use app::Explorer;
use cli::{Cli, Command};

fn main() -> EyreResult<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let waveform = cli.initial_waveform();

    match cli.command.unwrap_or_default() {
        Command::Explore => {
            // The terminal belongs to the UI: log to a file or not at all.
            init_logging(cli.log_file.as_deref(), false)?;
            let terminal = ratatui::init();
            let result = Explorer::new(waveform).run(terminal);
            ratatui::restore();
            result
        }
        Command::Export(args) => {
            init_logging(cli.log_file.as_deref(), true)?;
            let path = export::run(&waveform, &args)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// Route `log` records to `log_file` when given, else to stderr if allowed.
fn init_logging(log_file: Option<&Path>, allow_stderr: bool) -> EyreResult<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None if allow_stderr => {
            builder.target(Target::Stderr);
        }
        None => return Ok(()),
    }
    builder.init();
    Ok(())
}
