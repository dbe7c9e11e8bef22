//! TUI module for strum
//!
//! Turns key presses into pluck triggers and shows what the strings are doing.

mod keyboard;
mod spectrum;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use std::time::Duration;

use keyboard::{render_keyboard, KeyboardState};
use spectrum::{render_spectrum, SpectrumAnalyzer};
use waveform::render_waveform;

/// Audio visualization buffer size
pub const VIS_BUFFER_SIZE: usize = 1024;

/// UI application state
pub struct UiApp {
    /// Trigger symbols sent to the audio thread
    key_tx: Producer<char>,
    /// Rendered samples coming back for display
    audio_rx: Consumer<f32>,
    audio_buffer: Vec<f32>,
    spectrum: SpectrumAnalyzer,
    keyboard: KeyboardState,
    /// Key presses lost because the trigger ring was full
    dropped: u64,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        key_tx: Producer<char>,
        audio_rx: Consumer<f32>,
        layout: Vec<char>,
        sample_rate: f32,
    ) -> Self {
        Self {
            key_tx,
            audio_rx,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            spectrum: SpectrumAnalyzer::new(VIS_BUFFER_SIZE, sample_rate),
            keyboard: KeyboardState::new(layout),
            dropped: 0,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();
            self.spectrum.update(&self.audio_buffer);

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Read as many samples as available, keeping the last VIS_BUFFER_SIZE
    fn poll_audio(&mut self) {
        let available = self.audio_rx.slots();
        if available == 0 {
            return;
        }

        self.audio_buffer
            .extend(std::iter::from_fn(|| self.audio_rx.pop().ok()).take(available));
        if self.audio_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
            self.audio_buffer.drain(0..excess);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {
                if let Some(symbol) = trigger_symbol(&key) {
                    self.send_trigger(symbol);
                }
            }
        }
    }

    /// Light the key only once the audio thread will actually see it.
    fn send_trigger(&mut self, symbol: char) {
        if self.key_tx.push(symbol).is_err() {
            self.dropped += 1;
            tracing::warn!(%symbol, dropped = self.dropped, "trigger ring full, key dropped");
            return;
        }
        self.keyboard.press(symbol);
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),  // Keyboard strip
                Constraint::Min(8),     // Waveform
                Constraint::Length(10), // Spectrum
                Constraint::Length(1),  // Help bar
            ])
            .split(area);

        render_keyboard(frame, chunks[0], &self.keyboard);
        render_waveform(frame, chunks[1], &self.audio_buffer);
        render_spectrum(frame, chunks[2], &self.spectrum);

        let help = Paragraph::new(" [keys] Pluck  [Esc] Quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}

/// The pluck symbol for a key press. Chords with Ctrl, Alt or other
/// modifiers besides Shift are not triggers.
fn trigger_symbol(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(symbol) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            Some(symbol)
        }
        _ => None,
    }
}
