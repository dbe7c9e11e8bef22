//! Real-world scenario benchmarks.
//!
//! These model the terminal instrument: a full keyboard bank rendering
//! device-sized blocks while strings are plucked.

mod bank;

pub use bank::bench_bank;
