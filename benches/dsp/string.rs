use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use strum_dsp::{dsp::UniformNoise, synth::StringVoice};

use crate::BLOCK_SIZES;

pub fn bench_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/string");
    let mut noise = UniformNoise::seeded(0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // === TIC ===
        // Steady-state cost of one string: read, then advance
        let mut voice = StringVoice::new(110.0).unwrap();
        voice.pluck(&mut noise);

        group.bench_with_input(BenchmarkId::new("tic", size), &size, |b, _| {
            b.iter(|| {
                for out in buffer.iter_mut() {
                    *out = voice.sample();
                    voice.tic();
                }
                black_box(&buffer);
            })
        });
    }

    // === PLUCK ===
    // Refilling a long (low) and a short (high) delay line
    for &frequency in &[110.0f32, 880.0] {
        let mut voice = StringVoice::new(frequency).unwrap();
        group.bench_with_input(
            BenchmarkId::new("pluck", voice.length()),
            &frequency,
            |b, _| b.iter(|| voice.pluck(black_box(&mut noise))),
        );
    }

    group.finish();
}
