//! Benchmarks for low-level DSP primitives.

mod ring;
mod string;

pub use ring::bench_ring;
pub use string::bench_string;
