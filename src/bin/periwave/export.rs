//! Headless WAV export

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use log::info;

use periodic_waveform::io::wav::{export_file_name, write_wav_file};
use periodic_waveform::{generate_audio_samples, CompositeWaveform};

use super::cli::ExportArgs;

/// Render `waveform` per `args` and write it out. Returns the path written.
pub fn run(waveform: &CompositeWaveform, args: &ExportArgs) -> EyreResult<std::path::PathBuf> {
    let samples = generate_audio_samples(waveform, args.frequency, args.seconds, args.sample_rate)
        .wrap_err("failed to generate audio")?;
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| export_file_name(waveform, args.frequency).into());
    write_wav_file(&path, &samples, args.sample_rate)
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    info!(
        "exported {} harmonics at {} Hz for {} s",
        waveform.len(),
        args.frequency,
        args.seconds
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodic_waveform::BasicWaveform;

    #[test]
    fn writes_requested_path() {
        let path = std::env::temp_dir().join(format!("periwave-export-{}.wav", std::process::id()));
        let args = ExportArgs {
            frequency: 441.0,
            seconds: 0.5,
            sample_rate: 44_100,
            output: Some(path.clone()),
        };
        let waveform: CompositeWaveform = vec![BasicWaveform::default()].into();

        let written = run(&waveform, &args).unwrap();
        assert_eq!(written, path);

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.len(), 22_050);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn rejects_bad_duration() {
        let args = ExportArgs {
            frequency: 440.0,
            seconds: 0.0,
            sample_rate: 44_100,
            output: Some(std::env::temp_dir().join("periwave-never-written.wav")),
        };
        assert!(run(&CompositeWaveform::new(), &args).is_err());
    }
}
