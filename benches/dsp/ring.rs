use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use strum_dsp::dsp::CircularSampleBuffer;

use crate::BLOCK_SIZES;

pub fn bench_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/ring");

    for &size in BLOCK_SIZES {
        // A full 440 Hz delay line cycled once per sample
        let mut buffer = CircularSampleBuffer::new(101).unwrap();
        for _ in 0..buffer.capacity() {
            buffer.enqueue(0.1).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("cycle", size), &size, |b, &size| {
            b.iter(|| {
                for _ in 0..size {
                    let oldest = buffer.dequeue().unwrap();
                    buffer.enqueue(black_box(oldest)).unwrap();
                }
            })
        });
    }

    group.finish();
}
