use crate::{
    dsp::{noise::NoiseSource, ring::CircularSampleBuffer},
    error::{BufferError, ConfigError},
    DECAY_FACTOR, DEFAULT_SAMPLE_RATE,
};

/*
Karplus-Strong String
=====================

A plucked string is modelled as a delay line that feeds back into itself
through a gentle lowpass. The delay line holds exactly one period of the
waveform, so its length sets the pitch:

    N = ceil(sample_rate / frequency)

At 44.1 kHz an A4 (440 Hz) string holds ceil(100.23) = 101 samples. The
rounding is kept as-is: it makes every string slightly flat, and changing
it would change the emitted pitch.


Pluck
-----

Plucking fills the delay line with white noise in [-0.5, 0.5). Noise holds
every frequency at once; the loop quickly keeps only the ones that fit the
line, which is what makes it sound pitched.

Each slot is replaced by dequeuing the oldest sample and enqueuing its
replacement, so the line never leaves full occupancy.


Tic
---

One step of the recurrence:

    a = dequeue()            oldest sample
    b = peek()               the one behind it
    enqueue((a + b) / 2 * 0.996)

  ┌──────────────────────────────────────────┐
  │                                          │
  │   ┌───────────── N samples ───────────┐  │
  └──→│ tail                         head │──┴──→ sample()
      └───────────────────────────────────┘
              ↑                         │
              └── avg(a, b) * 0.996 ←───┘

Averaging two neighbours is a one-zero lowpass: high harmonics die faster
than the fundamental, so the tone mellows as it rings. The 0.996 factor
removes a little energy on every pass, so the string fades geometrically
toward (but never exactly to) silence. Both a and b are read before the
new tail is computed.

A one-sample line has no neighbour behind its head; there the dequeued
sample is its own neighbour and the step reduces to a * 0.996.


Lifecycle
---------

    Silent ──pluck──→ Triggered ──tic──→ Decaying ──(fades)──→ Silent
       ↑                  │                  │
       └──────────────────┴──── pluck ───────┘ (always legal, restarts)
*/

/// Peak level below which a string counts as silent.
pub const SILENCE_THRESHOLD: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Silent,    // Nothing audible in the delay line
    Triggered, // Freshly plucked, not yet advanced
    Decaying,  // Ringing down toward silence
}

/// One Karplus-Strong oscillator.
#[derive(Debug, Clone)]
pub struct StringVoice {
    buffer: CircularSampleBuffer,
    frequency: Option<f32>,
    just_plucked: bool,
}

impl StringVoice {
    /// A silent string tuned to `frequency` at 44.1 kHz.
    pub fn new(frequency: f32) -> Result<Self, ConfigError> {
        Self::with_sample_rate(frequency, DEFAULT_SAMPLE_RATE)
    }

    /// A silent string tuned to `frequency` at `sample_rate`.
    pub fn with_sample_rate(frequency: f32, sample_rate: f32) -> Result<Self, ConfigError> {
        let length = delay_length(frequency, sample_rate)?;
        let mut buffer = CircularSampleBuffer::new(length)?;
        for _ in 0..length {
            buffer.enqueue(0.0).unwrap_or_else(|err| delay_line_fault(err));
        }

        Ok(Self {
            buffer,
            frequency: Some(frequency),
            just_plucked: false,
        })
    }

    /// A string whose delay line starts with `init` (oldest first).
    ///
    /// The length is `init.len()`. Useful for seeding a known impulse
    /// instead of noise.
    pub fn from_samples(init: &[f32]) -> Result<Self, ConfigError> {
        if init.is_empty() {
            return Err(ConfigError::EmptyExcitation);
        }

        let mut buffer = CircularSampleBuffer::new(init.len())?;
        for &sample in init {
            buffer.enqueue(sample).unwrap_or_else(|err| delay_line_fault(err));
        }

        Ok(Self {
            buffer,
            frequency: None,
            just_plucked: false,
        })
    }

    /// Replace the delay line with fresh noise from `noise`.
    pub fn pluck<N: NoiseSource + ?Sized>(&mut self, noise: &mut N) {
        for _ in 0..self.buffer.capacity() {
            self.buffer
                .dequeue()
                .and_then(|_| self.buffer.enqueue(noise.next_uniform()))
                .unwrap_or_else(|err| delay_line_fault(err));
        }
        self.just_plucked = true;
    }

    /// Advance the string by one sample period.
    pub fn tic(&mut self) {
        self.step().unwrap_or_else(|err| delay_line_fault(err));
        self.just_plucked = false;
    }

    /// The current output sample. Does not advance the string.
    #[inline]
    pub fn sample(&self) -> f32 {
        self.buffer.peek().unwrap_or_else(|err| delay_line_fault(err))
    }

    /// Delay-line length in samples.
    #[inline]
    pub fn length(&self) -> usize {
        self.buffer.capacity()
    }

    /// Number of samples currently held; equals `length()` between calls.
    #[inline]
    pub fn size(&self) -> usize {
        self.buffer.size()
    }

    /// Tuning the string was built for, if it was built from a frequency.
    pub fn frequency(&self) -> Option<f32> {
        self.frequency
    }

    /// Largest absolute sample in the delay line.
    pub fn peak(&self) -> f32 {
        self.buffer.iter().fold(0.0, |peak, s| peak.max(s.abs()))
    }

    pub fn state(&self) -> VoiceState {
        if self.just_plucked {
            VoiceState::Triggered
        } else if self.peak() >= SILENCE_THRESHOLD {
            VoiceState::Decaying
        } else {
            VoiceState::Silent
        }
    }

    fn step(&mut self) -> Result<(), BufferError> {
        let a = self.buffer.dequeue()?;
        let b = if self.buffer.is_empty() {
            a
        } else {
            self.buffer.peek()?
        };
        self.buffer.enqueue((a + b) * 0.5 * DECAY_FACTOR)
    }
}

/// Longest delay line a string may allocate, about six minutes of one
/// period at 44.1 kHz.
pub const MAX_DELAY_LENGTH: usize = 1 << 24;

/// `ceil(sample_rate / frequency)`, validated.
pub fn delay_length(frequency: f32, sample_rate: f32) -> Result<usize, ConfigError> {
    check_sample_rate(sample_rate)?;
    let out_of_range = ConfigError::FrequencyOutOfRange {
        frequency,
        sample_rate,
    };
    if !frequency.is_finite() || frequency <= 0.0 || frequency > sample_rate {
        return Err(out_of_range);
    }

    let period = (f64::from(sample_rate) / f64::from(frequency)).ceil();
    if !period.is_finite() || period > MAX_DELAY_LENGTH as f64 {
        return Err(out_of_range);
    }
    Ok(period as usize)
}

pub(crate) fn check_sample_rate(sample_rate: f32) -> Result<(), ConfigError> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(ConfigError::InvalidSampleRate(sample_rate));
    }
    Ok(())
}

#[cold]
fn delay_line_fault(err: BufferError) -> ! {
    panic!("string delay line out of sequence: {err}")
}
