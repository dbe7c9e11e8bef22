//! Strum - audio device setup and runner

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{PushError, RingBuffer};

use strum_dsp::{
    io::write_interleaved,
    synth::{BankConfig, VoiceBank},
    MAX_BLOCK_SIZE,
};

use super::ui::{UiApp, VIS_BUFFER_SIZE};

/// Capacity of the UI → audio trigger ring
const TRIGGER_RING_LEN: usize = 64;
/// Capacity in visualization windows for the audio → UI ring
const AUDIO_RING_BLOCKS: usize = 16;

/// Main application
pub struct Strum {
    table: BankConfig<char>,
}

impl Strum {
    pub fn new(table: BankConfig<char>) -> Self {
        Self { table }
    }

    /// Open the default output device and play until the user quits.
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        // Pitch depends on the rate the strings are rendered at
        if self.table.sample_rate != sample_rate {
            tracing::warn!(
                table_rate = self.table.sample_rate,
                device_rate = sample_rate,
                "retuning voice table to the device sample rate"
            );
        }
        let table = self.table.with_sample_rate(sample_rate);
        let layout: Vec<char> = table.voices.iter().map(|spec| spec.symbol).collect();

        let mut bank = VoiceBank::new(table).wrap_err("invalid voice table")?;
        tracing::info!(voices = bank.len(), sample_rate, channels, "audio device ready");

        // --- Cross-thread rings ---
        let (key_tx, mut key_rx) = RingBuffer::<char>::new(TRIGGER_RING_LEN);
        let (mut audio_tx, audio_rx) = RingBuffer::<f32>::new(VIS_BUFFER_SIZE * AUDIO_RING_BLOCKS);

        // Buffer reused by audio callback
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames_remaining = total_frames - frames_written;
                    let frames_to_render = frames_remaining.min(MAX_BLOCK_SIZE);
                    let block = &mut render_buf[..frames_to_render];

                    // Triggers land on the sample period they arrive in
                    for sample in block.iter_mut() {
                        bank.process_messages(&mut key_rx);
                        *sample = bank.tick();
                    }

                    let out_off = frames_written * channels;
                    write_interleaved(block, &mut data[out_off..], channels);

                    // Push mono block to UI ring, non-blocking (drop on overflow)
                    for &s in block.iter() {
                        if let Err(PushError::Full(_)) = audio_tx.push(s) {
                            break;
                        }
                    }

                    frames_written += frames_to_render;
                }
            },
            |err| tracing::error!(%err, "audio stream error"),
            None,
        )?;

        stream.play()?;

        let mut terminal = ratatui::init();
        let result = UiApp::new(key_tx, audio_rx, layout, sample_rate).run(&mut terminal);
        ratatui::restore();

        result
    }
}
