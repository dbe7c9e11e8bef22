//! Spectrum widget with a rough pitch readout
//!
//! The strings' fundamentals sit between roughly 100 Hz and 1 kHz, so bins
//! are log-spaced over the range where their first few partials live.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

const SPECTRUM_BINS: usize = 64;
const MIN_FREQ: f64 = 50.0;
const MAX_FREQ: f64 = 5_000.0;
const FLOOR_DB: f64 = -100.0;

pub struct SpectrumAnalyzer {
    fft: Arc<dyn Fft<f32>>,
    /// Hann window coefficients
    window: Vec<f32>,
    scratch: Vec<Complex<f32>>,
    /// FFT bin index sampled for each display point
    bin_indices: Vec<usize>,
    /// (frequency_hz, magnitude_db) per display point
    spectrum: Vec<(f64, f64)>,
    /// Hz per FFT bin
    resolution: f64,
    /// Strongest FFT bin from the last update, in Hz
    peak_hz: Option<f64>,
}

impl SpectrumAnalyzer {
    pub fn new(buffer_len: usize, sample_rate: f32) -> Self {
        let fft = FftPlanner::new().plan_fft_forward(buffer_len);

        let window: Vec<f32> = (0..buffer_len)
            .map(|i| {
                if buffer_len > 1 {
                    let phase = std::f32::consts::TAU * i as f32 / (buffer_len - 1) as f32;
                    0.5 * (1.0 - phase.cos())
                } else {
                    1.0
                }
            })
            .collect();

        let resolution = sample_rate as f64 / buffer_len.max(1) as f64;
        let top = MAX_FREQ.min(sample_rate as f64 / 2.0);
        let ratio = top / MIN_FREQ;
        let half = (buffer_len / 2).max(1);

        let mut bin_indices = Vec::with_capacity(SPECTRUM_BINS);
        let mut spectrum = Vec::with_capacity(SPECTRUM_BINS);
        for i in 0..SPECTRUM_BINS {
            let t = i as f64 / (SPECTRUM_BINS - 1) as f64;
            let freq = MIN_FREQ * ratio.powf(t);
            let index = ((freq / resolution).round() as usize).min(half - 1);
            bin_indices.push(index);
            spectrum.push((freq, FLOOR_DB));
        }

        Self {
            fft,
            window,
            scratch: vec![Complex::new(0.0, 0.0); buffer_len],
            bin_indices,
            spectrum,
            resolution,
            peak_hz: None,
        }
    }

    /// Recompute from the latest audio window. Windows of the wrong length
    /// are ignored.
    pub fn update(&mut self, buffer: &[f32]) {
        if buffer.len() != self.window.len() {
            return;
        }

        for ((slot, &sample), &w) in self.scratch.iter_mut().zip(buffer).zip(&self.window) {
            *slot = Complex::new(sample * w, 0.0);
        }
        self.fft.process(&mut self.scratch);

        let power = |bin: &Complex<f32>| (bin.norm_sqr() as f64).max(1e-12);

        for ((_, magnitude_db), &idx) in self.spectrum.iter_mut().zip(&self.bin_indices) {
            *magnitude_db = (10.0 * power(&self.scratch[idx]).log10()).max(FLOOR_DB);
        }

        // Skip DC when looking for the loudest partial
        let half = self.scratch.len() / 2;
        self.peak_hz = self.scratch[1..half.max(1)]
            .iter()
            .enumerate()
            .map(|(i, bin)| (i + 1, power(bin)))
            .filter(|&(_, p)| 10.0 * p.log10() > FLOOR_DB / 2.0)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i as f64 * self.resolution);
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }

    pub fn peak_hz(&self) -> Option<f64> {
        self.peak_hz
    }
}

pub fn render_spectrum(frame: &mut Frame, area: Rect, analyzer: &SpectrumAnalyzer) {
    let title = match analyzer.peak_hz() {
        Some(hz) => format!(" Spectrum  peak ≈ {hz:.0} Hz "),
        None => " Spectrum ".to_string(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    // Plot on a log-frequency axis so octaves are evenly spaced
    let data: Vec<(f64, f64)> = analyzer
        .data()
        .iter()
        .map(|&(freq, db)| ((freq / MIN_FREQ).log2(), db))
        .collect();
    let octaves = data.last().map(|&(x, _)| x).unwrap_or(1.0).max(1.0);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, octaves])
                .labels(vec!["50", "500", "5k"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([FLOOR_DB, 20.0])
                .labels(vec!["-100", "-40", "20"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
