//! Keyboard strip: one cell per bound key, lit while recently plucked

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};

/// How long a key stays lit after a pluck
const GLOW: Duration = Duration::from_millis(400);

pub struct KeyboardState {
    layout: Vec<char>,
    last_pressed: Vec<Option<Instant>>,
    last_symbol: Option<char>,
}

impl KeyboardState {
    pub fn new(layout: Vec<char>) -> Self {
        let last_pressed = vec![None; layout.len()];
        Self {
            layout,
            last_pressed,
            last_symbol: None,
        }
    }

    pub fn press(&mut self, symbol: char) {
        self.last_symbol = Some(symbol);
        if let Some(idx) = self.layout.iter().position(|&c| c == symbol) {
            self.last_pressed[idx] = Some(Instant::now());
        }
    }

    pub fn last_symbol(&self) -> Option<char> {
        self.last_symbol
    }

    fn is_lit(&self, idx: usize, now: Instant) -> bool {
        self.last_pressed[idx].is_some_and(|at| now.duration_since(at) < GLOW)
    }
}

pub fn render_keyboard(frame: &mut Frame, area: Rect, state: &KeyboardState) {
    let title = match state.last_symbol() {
        Some(symbol) if state.layout.contains(&symbol) => format!(" Strings  last: {} ", label(symbol)),
        Some(symbol) => format!(" Strings  last: {} (unbound) ", label(symbol)),
        None => " Strings ".to_string(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let now = Instant::now();
    let cells: Vec<Span> = state
        .layout
        .iter()
        .enumerate()
        .map(|(idx, &symbol)| {
            let style = if state.is_lit(idx, now) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Span::styled(format!(" {} ", label(symbol)), style)
        })
        .collect();

    let keys = Paragraph::new(Line::from(cells))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(keys, area);
}

fn label(symbol: char) -> char {
    if symbol == ' ' {
        '␣'
    } else {
        symbol
    }
}
