//! Benchmarks for a full keyboard voice bank.

use std::{collections::VecDeque, hint::black_box};

use criterion::{BenchmarkId, Criterion};
use strum_dsp::{
    dsp::UniformNoise,
    synth::{config::KEYBOARD_LAYOUT, BankConfig, VoiceBank},
};

use crate::BLOCK_SIZES;

fn keyboard_bank() -> VoiceBank<char> {
    VoiceBank::with_noise(BankConfig::keyboard(44_100.0), UniformNoise::seeded(9)).unwrap()
}

pub fn bench_bank(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/bank");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // === IDLE ===
        // 37 silent strings: the floor cost of the mixer
        let mut idle = keyboard_bank();
        group.bench_with_input(BenchmarkId::new("37_idle", size), &size, |b, _| {
            b.iter(|| idle.render_block(black_box(&mut buffer)))
        });

        // === CHORD ===
        // Every string ringing at once
        let mut chord = keyboard_bank();
        for symbol in KEYBOARD_LAYOUT.chars() {
            chord.trigger(&symbol);
        }
        group.bench_with_input(BenchmarkId::new("37_ringing", size), &size, |b, _| {
            b.iter(|| chord.render_block(black_box(&mut buffer)))
        });

        // === LIVE ===
        // Per-sample trigger draining as the audio callback does it
        let mut live = keyboard_bank();
        let mut pending: VecDeque<char> = VecDeque::new();
        group.bench_with_input(BenchmarkId::new("live_drain", size), &size, |b, _| {
            b.iter(|| {
                pending.extend("qwe".chars());
                for out in buffer.iter_mut() {
                    live.process_messages(&mut pending);
                    *out = live.tick();
                }
                black_box(&buffer);
            })
        });
    }

    group.finish();
}
