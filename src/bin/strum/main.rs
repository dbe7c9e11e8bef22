//! strum - play plucked strings from the computer keyboard
//!
//! Run with: cargo run --bin strum [voice-table.json]
//!
//! Without a table the 37-key layout `q2we4r5ty7u8i9op-[=zxdcfvgbnjmk,.;/' `
//! is used, tuned chromatically from 110 Hz to 880 Hz.

mod app;
mod ui;

use app::Strum;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use strum_dsp::synth::BankConfig;
use tracing_subscriber::EnvFilter;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let table = match std::env::args().nth(1) {
        Some(path) => load_table(&path)?,
        None => BankConfig::default(),
    };

    Strum::new(table).run()
}

fn load_table(path: &str) -> EyreResult<BankConfig<char>> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read voice table {path}"))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("failed to parse voice table {path}"))
}
