use std::io::{Cursor, Seek, Write};
use std::path::Path;

use log::info;

use crate::error::WaveformResult;
use crate::waveform::CompositeWaveform;

/// Mono, 32-bit IEEE float at `sample_rate`.
pub fn wav_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    }
}

/// Encode samples into any seekable writer.
pub fn write_wav<W: Write + Seek>(writer: W, samples: &[f32], sample_rate: u32) -> WaveformResult<()> {
    let mut wav = hound::WavWriter::new(writer, wav_spec(sample_rate))?;
    for &sample in samples {
        wav.write_sample(sample)?;
    }
    wav.finalize()?;
    Ok(())
}

/// Encode samples into an in-memory WAV file.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> WaveformResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    write_wav(&mut cursor, samples, sample_rate)?;
    Ok(cursor.into_inner())
}

/// Encode samples into a file at `path`, replacing it if present.
pub fn write_wav_file(path: impl AsRef<Path>, samples: &[f32], sample_rate: u32) -> WaveformResult<()> {
    let path = path.as_ref();
    let mut wav = hound::WavWriter::create(path, wav_spec(sample_rate))?;
    for &sample in samples {
        wav.write_sample(sample)?;
    }
    wav.finalize()?;
    info!("wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}

/// File name describing the export: the frequency followed by one
/// `__{magnitude_x}_{magnitude_y}_{phase}` group per harmonic.
///
/// `export_file_name(440 Hz, [{1, 0.5, 0.25}])` is `"440__1_0.5_0.25.wav"`.
pub fn export_file_name(waveform: &CompositeWaveform, frequency: f64) -> String {
    let mut name = format!("{frequency}");
    for harmonic in waveform {
        name.push_str(&format!(
            "__{}_{}_{}",
            harmonic.magnitude_x(),
            harmonic.magnitude_y(),
            harmonic.phase()
        ));
    }
    name.push_str(".wav");
    name
}
