pub mod dsp; // Delay-line storage and noise sources
pub mod error;
pub mod io;
pub mod synth; // String voices and the voice bank

pub use error::{BufferError, ConfigError};

pub const MAX_BLOCK_SIZE: usize = 2048;

/// Sample rate assumed when a voice is built without an explicit one.
pub const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;

/// Energy kept by the averaging filter on every step of a string.
pub const DECAY_FACTOR: f32 = 0.996;
