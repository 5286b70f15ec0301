//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use periodic_waveform::{BasicWaveform, CompositeWaveform, DEFAULT_SAMPLE_RATE};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "periwave")]
#[command(about = "Explore periodic waveforms built from nested elliptical harmonics", long_about = None)]
pub struct Cli {
    /// Harmonic as MAGNITUDE_X,MAGNITUDE_Y,PHASE (repeat for more; default 1,1,0)
    #[arg(long = "harmonic", value_name = "MX,MY,PHASE", value_parser = parse_harmonic, global = true)]
    pub harmonics: Vec<BasicWaveform>,

    /// Write logs to this file (RUST_LOG sets the level)
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Interactive terminal explorer (default)
    #[default]
    Explore,
    /// Render the waveform to a WAV file without opening the explorer
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Fundamental frequency in Hz
    #[arg(long, value_name = "HZ")]
    pub frequency: f64,

    /// Approximate duration in seconds
    #[arg(long, value_name = "SECONDS")]
    pub seconds: f64,

    /// Output sample rate
    #[arg(long, value_name = "HZ", default_value_t = DEFAULT_SAMPLE_RATE)]
    pub sample_rate: u32,

    /// Output path (default: derived from frequency and harmonics)
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Waveform from `--harmonic` flags, or a single unit circle.
    pub fn initial_waveform(&self) -> CompositeWaveform {
        if self.harmonics.is_empty() {
            CompositeWaveform::from(vec![BasicWaveform::default()])
        } else {
            CompositeWaveform::from(self.harmonics.clone())
        }
    }
}

fn parse_harmonic(text: &str) -> Result<BasicWaveform, String> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let [mx, my, phase] = parts.as_slice() else {
        return Err(format!("expected MX,MY,PHASE, got '{text}'"));
    };
    let number = |name: &str, value: &str| {
        value
            .parse::<f64>()
            .map_err(|_| format!("{name} '{value}' must be a number"))
    };
    BasicWaveform::new(
        number("magnitude x", mx)?,
        number("magnitude y", my)?,
        number("phase", phase)?,
    )
    .map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_harmonic_triples() {
        let harmonic = parse_harmonic("1, 0.5,0.25").unwrap();
        assert_eq!(harmonic, BasicWaveform::new(1.0, 0.5, 0.25).unwrap());
    }

    #[test]
    fn rejects_malformed_harmonics() {
        assert!(parse_harmonic("1,1").is_err());
        assert!(parse_harmonic("1,x,0").is_err());
        assert!(parse_harmonic("1,1,1").is_err());
        assert!(parse_harmonic("0,1,0").is_err());
    }

    #[test]
    fn defaults_to_unit_circle() {
        let cli = Cli::parse_from(["periwave"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.initial_waveform().harmonics(), &[BasicWaveform::default()]);
    }

    #[test]
    fn export_arguments() {
        let cli = Cli::parse_from([
            "periwave",
            "export",
            "--frequency",
            "220",
            "--seconds",
            "2",
            "--harmonic",
            "1,1,0",
            "--harmonic",
            "0.5,0.5,0",
        ]);
        let Some(Command::Export(args)) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(args.frequency, 220.0);
        assert_eq!(args.sample_rate, DEFAULT_SAMPLE_RATE);
        assert_eq!(cli.harmonics.len(), 2);
    }
}
