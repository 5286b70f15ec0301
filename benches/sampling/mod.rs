//! Benchmarks for the per-graphic sampling drivers.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use periodic_waveform::{
    sample_structure_paths, sample_timeline, sample_timeloop, Region, TimelineAxis,
    WaveformGraphics, STRUCTURE_SAMPLE_COUNT, TIMELINE_SAMPLE_COUNT, TIMELOOP_SAMPLE_COUNT,
};

use crate::{harmonic_stack, HARMONIC_COUNTS};

pub fn bench_structure(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/structure");
    let canvas = Region::canvas(256.0, 256.0);

    for &count in HARMONIC_COUNTS {
        let waveform = harmonic_stack(count);
        group.bench_with_input(BenchmarkId::new("paths", count), &count, |b, _| {
            b.iter(|| {
                sample_structure_paths(black_box(&waveform), STRUCTURE_SAMPLE_COUNT, canvas)
            })
        });
    }

    group.finish();
}

pub fn bench_time_graphics(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/time");
    let canvas = Region::canvas(256.0, 256.0);

    for &count in HARMONIC_COUNTS {
        let waveform = harmonic_stack(count);

        group.bench_with_input(BenchmarkId::new("timeloop", count), &count, |b, _| {
            b.iter(|| sample_timeloop(black_box(&waveform), TIMELOOP_SAMPLE_COUNT, canvas))
        });

        group.bench_with_input(BenchmarkId::new("sine_timeline", count), &count, |b, _| {
            b.iter(|| {
                sample_timeline(
                    black_box(&waveform),
                    TimelineAxis::Sine,
                    TIMELINE_SAMPLE_COUNT,
                    canvas,
                )
            })
        });

        // Everything the explorer recomputes after one edit
        group.bench_with_input(BenchmarkId::new("all_graphics", count), &count, |b, _| {
            b.iter(|| WaveformGraphics::sample(black_box(&waveform), canvas))
        });
    }

    group.finish();
}
