//! Voice tables: which symbol plucks which pitch.
//!
//! A `BankConfig` is an ordered list of (symbol, frequency) pairs plus the
//! sample rate they are rendered at. The order is kept all the way into the
//! bank and fixes the mixer's iteration order.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::{io::converter::midi_note_to_freq, DEFAULT_SAMPLE_RATE};

/// Computer-keyboard layout: 37 keys, chromatic from 110 Hz to 880 Hz.
pub const KEYBOARD_LAYOUT: &str = "q2we4r5ty7u8i9op-[=zxdcfvgbnjmk,.;/' ";

/// Index of concert A (440 Hz) within `KEYBOARD_LAYOUT`.
pub const KEYBOARD_REFERENCE_INDEX: usize = 24;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceSpec<S> {
    pub symbol: S,
    pub frequency: f32,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BankConfig<S> {
    pub sample_rate: f32,
    pub voices: Vec<VoiceSpec<S>>,
}

impl<S> BankConfig<S> {
    /// An empty table at `sample_rate`.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            voices: Vec::new(),
        }
    }

    /// Bind `symbol` to a string tuned to `frequency` Hz.
    pub fn voice(mut self, symbol: S, frequency: f32) -> Self {
        self.voices.push(VoiceSpec { symbol, frequency });
        self
    }

    /// Equal-tempered chromatic table: the symbol at `reference_index` plays
    /// 440 Hz and each neighbour is one semitone away.
    pub fn chromatic(
        symbols: impl IntoIterator<Item = S>,
        reference_index: usize,
        sample_rate: f32,
    ) -> Self {
        let voices = symbols
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| VoiceSpec {
                symbol,
                frequency: semitones_from_a440(i as f32 - reference_index as f32),
            })
            .collect();

        Self {
            sample_rate,
            voices,
        }
    }

    pub fn with_sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}

impl BankConfig<char> {
    /// The 37-key computer keyboard layout.
    pub fn keyboard(sample_rate: f32) -> Self {
        Self::chromatic(KEYBOARD_LAYOUT.chars(), KEYBOARD_REFERENCE_INDEX, sample_rate)
    }
}

impl BankConfig<u8> {
    /// One string per MIDI note number in `notes`.
    pub fn midi_notes(notes: RangeInclusive<u8>, sample_rate: f32) -> Self {
        let voices = notes
            .map(|note| VoiceSpec {
                symbol: note,
                frequency: midi_note_to_freq(note),
            })
            .collect();

        Self {
            sample_rate,
            voices,
        }
    }
}

impl Default for BankConfig<char> {
    fn default() -> Self {
        Self::keyboard(DEFAULT_SAMPLE_RATE)
    }
}

#[inline]
fn semitones_from_a440(semitones: f32) -> f32 {
    440.0 * 2.0_f32.powf(semitones / 12.0)
}
