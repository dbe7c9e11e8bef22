use std::{collections::HashMap, fmt::Debug, hash::Hash};

use crate::{
    dsp::noise::{NoiseSource, UniformNoise},
    error::ConfigError,
    synth::{
        config::BankConfig,
        message::MessageReceiver,
        string::{check_sample_rate, StringVoice, VoiceState},
    },
};

/// A fixed set of strings keyed by input symbol, mixed to one mono signal.
///
/// Every simulation step reads all current samples first and only then
/// advances every string, so each step sums one consistent set of samples.
pub struct VoiceBank<S, N = UniformNoise> {
    symbols: Vec<S>,
    voices: Vec<StringVoice>,
    index: HashMap<S, usize>,
    noise: N,
    sample_rate: f32,
    frame_counter: u64,
}

impl<S> VoiceBank<S>
where
    S: Eq + Hash + Clone + Debug,
{
    /// Build a bank plucked with entropy-seeded white noise.
    pub fn new(config: BankConfig<S>) -> Result<Self, ConfigError> {
        Self::with_noise(config, UniformNoise::new())
    }
}

impl<S, N> VoiceBank<S, N>
where
    S: Eq + Hash + Clone + Debug,
    N: NoiseSource,
{
    /// Build a bank that draws pluck excitation from `noise`.
    ///
    /// Fails if the sample rate or any frequency is out of range, or if a
    /// symbol appears twice. No bank is built from a partially valid table.
    pub fn with_noise(config: BankConfig<S>, noise: N) -> Result<Self, ConfigError> {
        let BankConfig {
            sample_rate,
            voices: specs,
        } = config;
        check_sample_rate(sample_rate)?;

        let mut symbols = Vec::with_capacity(specs.len());
        let mut voices = Vec::with_capacity(specs.len());
        let mut index = HashMap::with_capacity(specs.len());

        for spec in specs {
            if index.contains_key(&spec.symbol) {
                return Err(ConfigError::DuplicateSymbol(format!("{:?}", spec.symbol)));
            }

            let voice = StringVoice::with_sample_rate(spec.frequency, sample_rate)?;
            index.insert(spec.symbol.clone(), voices.len());
            symbols.push(spec.symbol);
            voices.push(voice);
        }

        if voices.is_empty() {
            tracing::warn!(sample_rate, "voice bank built with no voices");
        } else {
            let shortest = voices.iter().map(StringVoice::length).min().unwrap_or(0);
            let longest = voices.iter().map(StringVoice::length).max().unwrap_or(0);
            tracing::debug!(
                voices = voices.len(),
                sample_rate,
                shortest,
                longest,
                "voice bank ready"
            );
        }

        Ok(Self {
            symbols,
            voices,
            index,
            noise,
            sample_rate,
            frame_counter: 0,
        })
    }

    /// Pluck the string bound to `symbol`.
    ///
    /// Returns whether a string was plucked. Unbound symbols are ignored.
    pub fn trigger(&mut self, symbol: &S) -> bool {
        match self.index.get(symbol) {
            Some(&idx) => {
                self.voices[idx].pluck(&mut self.noise);
                true
            }
            None => false,
        }
    }

    /// Apply every pending trigger in arrival order.
    pub fn process_messages<R: MessageReceiver<S>>(&mut self, rx: &mut R) {
        while let Some(symbol) = rx.pop() {
            self.trigger(&symbol);
        }
    }

    /// Produce one output sample and advance every string by one step.
    pub fn tick(&mut self) -> f32 {
        let mixed: f32 = self.voices.iter().map(StringVoice::sample).sum();

        for voice in &mut self.voices {
            voice.tic();
        }

        self.frame_counter += 1;
        mixed
    }

    /// Fill `out` with consecutive ticks.
    pub fn render_block(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.tick();
        }
    }

    pub fn voice(&self, symbol: &S) -> Option<&StringVoice> {
        self.index.get(symbol).map(|&idx| &self.voices[idx])
    }

    /// Voices in mixing order.
    pub fn voices(&self) -> impl Iterator<Item = (&S, &StringVoice)> {
        self.symbols.iter().zip(self.voices.iter())
    }

    /// Symbols whose strings are still sounding.
    pub fn active_symbols(&self) -> impl Iterator<Item = &S> {
        self.voices()
            .filter(|(_, voice)| voice.state() != VoiceState::Silent)
            .map(|(symbol, _)| symbol)
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Number of ticks rendered so far.
    pub fn frames(&self) -> u64 {
        self.frame_counter
    }
}
