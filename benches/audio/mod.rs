//! Benchmarks for audio sample generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use periodic_waveform::audio::period_samples;
use periodic_waveform::{generate_audio_samples, DEFAULT_SAMPLE_RATE};

use crate::{harmonic_stack, HARMONIC_COUNTS};

pub fn bench_period(c: &mut Criterion) {
    let mut group = c.benchmark_group("audio/period");

    // 100 samples per period is 441 Hz at 44.1kHz; 1000 is 44.1 Hz.
    for &samples_per_period in &[100usize, 1000] {
        let waveform = harmonic_stack(8);
        group.bench_with_input(
            BenchmarkId::new("eight_harmonics", samples_per_period),
            &samples_per_period,
            |b, &len| b.iter(|| period_samples(black_box(&waveform), len)),
        );
    }

    group.finish();
}

pub fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("audio/export");

    for &count in HARMONIC_COUNTS {
        let waveform = harmonic_stack(count);
        group.bench_with_input(BenchmarkId::new("one_second", count), &count, |b, _| {
            b.iter(|| {
                generate_audio_samples(black_box(&waveform), 440.0, 1.0, DEFAULT_SAMPLE_RATE)
            })
        });
    }

    group.finish();
}
