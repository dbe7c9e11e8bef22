//! Error types shared by the buffer, voice and bank layers.
//!
//! Configuration problems are reported when a voice or bank is built and are
//! fatal to that setup. Buffer errors mean a delay line was driven out of
//! sequence and indicate a logic defect.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("buffer capacity must be at least 1")]
    ZeroCapacity,

    #[error("sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f32),

    #[error("frequency {frequency} Hz is outside (0, {sample_rate}] Hz")]
    FrequencyOutOfRange { frequency: f32, sample_rate: f32 },

    #[error("a string needs at least one initial sample")]
    EmptyExcitation,

    #[error("symbol {0} is bound to more than one voice")]
    DuplicateSymbol(String),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("enqueue on a full buffer (capacity {capacity})")]
    Full { capacity: usize },

    #[error("read from an empty buffer")]
    Empty,
}
