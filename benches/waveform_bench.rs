//! Benchmarks for waveform sampling and audio generation.
//!
//! Run with: cargo bench
//!
//! Every edit in the explorer resamples all four graphics, so sampling should
//! stay far below one frame (16ms at ~60fps). Audio generation runs on export
//! and whenever playback is retuned.
//!
//! Benchmark groups:
//!   - sampling/*  Structure, timeloop and timeline paths
//!   - audio/*     Period buffers and full exports

use criterion::{criterion_group, criterion_main};
use periodic_waveform::{BasicWaveform, CompositeWaveform};

mod audio;
mod sampling;

/// Harmonic counts to sweep.
pub const HARMONIC_COUNTS: &[usize] = &[1, 4, 8, 16];

/// Waveform of `count` shrinking, slightly flattened harmonics.
pub fn harmonic_stack(count: usize) -> CompositeWaveform {
    (0..count)
        .map(|index| {
            let radius = 1.0 / (index + 1) as f64;
            let phase = (index as f64 * 0.125).fract();
            BasicWaveform::new(radius, radius * 0.75, phase)
                .unwrap_or_else(|err| panic!("bench harmonic {index}: {err}"))
        })
        .collect()
}

criterion_group!(
    benches,
    sampling::bench_structure,
    sampling::bench_time_graphics,
    audio::bench_period,
    audio::bench_export,
);
criterion_main!(benches);
