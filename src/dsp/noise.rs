//! Uniform noise used to excite a string on pluck.
//!
//! Voices never reach for a process-wide generator. Whoever owns the voices
//! passes a `NoiseSource` in, so tests can swap in a fixed sequence.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A source of samples drawn uniformly from [-0.5, 0.5).
pub trait NoiseSource: Send {
    fn next_uniform(&mut self) -> f32;
}

impl<F> NoiseSource for F
where
    F: FnMut() -> f32 + Send,
{
    fn next_uniform(&mut self) -> f32 {
        self()
    }
}

/// White noise backed by `StdRng`.
pub struct UniformNoise {
    rng: StdRng,
}

impl UniformNoise {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible noise: the same seed always yields the same excitation.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource for UniformNoise {
    #[inline]
    fn next_uniform(&mut self) -> f32 {
        self.rng.gen_range(-0.5..0.5)
    }
}

/// Replays a fixed list of values, wrapping at the end.
///
/// An empty list replays silence.
#[derive(Debug, Clone)]
pub struct ScriptedNoise {
    values: Vec<f32>,
    position: usize,
}

impl ScriptedNoise {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self {
            values: values.into(),
            position: 0,
        }
    }
}

impl NoiseSource for ScriptedNoise {
    fn next_uniform(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }

        let value = self.values[self.position];
        self.position = (self.position + 1) % self.values.len();
        value
    }
}
