// Purpose: string voices, voice tables and the mixing bank
// This layer sits above the dsp primitives and owns every string

pub mod bank;
pub mod config;
pub mod message;
pub mod string;

pub use bank::VoiceBank;
pub use config::{BankConfig, VoiceSpec};
pub use string::{StringVoice, VoiceState};
