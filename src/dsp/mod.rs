//! Low-level DSP primitives used by the string voices.
//!
//! These components allocate only at construction and are realtime-safe
//! afterwards, so they can live directly inside voice structs.

/// Uniform noise sources for string excitation.
pub mod noise;
/// Fixed-capacity FIFO backing a string's delay line.
pub mod ring;

pub use noise::{NoiseSource, ScriptedNoise, UniformNoise};
pub use ring::CircularSampleBuffer;
