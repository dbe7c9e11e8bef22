use crate::io::midi::MidiEvent;

/// Reduce a MIDI event to the key a bank keyed by note number should pluck.
///
/// Only note-ons on `channel_filter` pluck. Note-offs are ignored since a
/// plucked string rings down on its own; velocity is ignored too.
pub fn midi_to_trigger(midi: MidiEvent, channel_filter: u8) -> Option<u8> {
    match midi {
        MidiEvent::NoteOn { channel, key, .. } if channel == channel_filter => Some(key),
        _ => None,
    }
}

/// Convert MIDI note number to frequency in Hz.
/// A4 = 440 Hz = MIDI note 69
pub fn midi_note_to_freq(note: u8) -> f32 {
    440.0 * 2.0_f32.powf((note as f32 - 69.0) / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_on_on_matching_channel_triggers() {
        let on = MidiEvent::NoteOn {
            channel: 0,
            key: 57,
            velocity: 90,
        };
        assert_eq!(midi_to_trigger(on, 0), Some(57));
        assert_eq!(midi_to_trigger(on, 1), None);
    }

    #[test]
    fn other_events_do_not_trigger() {
        let off = MidiEvent::NoteOff {
            channel: 0,
            key: 57,
            velocity: 0,
        };
        let cc = MidiEvent::ControlChange {
            channel: 0,
            controller: 64,
            value: 127,
        };
        assert_eq!(midi_to_trigger(off, 0), None);
        assert_eq!(midi_to_trigger(cc, 0), None);
    }

    #[test]
    fn a4_is_440() {
        assert!((midi_note_to_freq(69) - 440.0).abs() < 1e-4);
        assert!((midi_note_to_freq(57) - 220.0).abs() < 1e-3);
    }
}
