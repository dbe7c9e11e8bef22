use std::collections::VecDeque;

use strum_dsp::{
    dsp::{ScriptedNoise, UniformNoise},
    synth::{BankConfig, StringVoice, VoiceBank, VoiceState},
    ConfigError, DECAY_FACTOR,
};

#[test]
fn length_matches_ceiling_for_many_frequencies() {
    let cases: &[(f32, usize)] = &[
        (27.5, 1604),    // 1603.64
        (55.0, 802),     // 801.82
        (82.41, 536),    // 535.13
        (261.63, 169),   // 168.56
        (1_000.0, 45),   // 44.1
        (4_186.01, 11),  // 10.54
        (11_025.0, 4),   // exact
        (14_700.0, 3),   // exact
        (20_000.0, 3),   // 2.205
        (44_100.0, 1),   // exact
    ];
    for &(frequency, expected) in cases {
        let voice = StringVoice::with_sample_rate(frequency, 44_100.0).unwrap();
        assert_eq!(voice.length(), expected, "frequency {frequency}");
    }
}

#[test]
fn five_sample_string_survives_pluck_and_tic() {
    let mut voice = StringVoice::new(44_100.0 / 5.0).unwrap();
    assert_eq!(voice.length(), 5);

    voice.pluck(&mut UniformNoise::seeded(2024));
    voice.tic();

    assert_eq!(voice.size(), 5);
    assert!(voice.sample().is_finite());
}

#[test]
fn triggering_one_string_leaves_the_other_silent() {
    let config = BankConfig::new(44_100.0).voice('a', 220.0).voice('b', 440.0);
    let mut bank = VoiceBank::with_noise(config, UniformNoise::seeded(17)).unwrap();

    bank.trigger(&'a');
    let a_before = bank.voice(&'a').unwrap().sample();
    let mixed = bank.tick();

    // The mix is taken before the step: voice 'a' contributes its fresh
    // head sample and 'b' contributes silence.
    assert_eq!(mixed, a_before + 0.0);
    assert_ne!(a_before, 0.0);
    assert_eq!(bank.voice(&'b').unwrap().sample(), 0.0);
    assert_eq!(bank.voice(&'b').unwrap().state(), VoiceState::Silent);
    assert_eq!(bank.voice(&'a').unwrap().state(), VoiceState::Decaying);
}

#[test]
fn unbound_trigger_changes_nothing() {
    let config = BankConfig::new(44_100.0).voice('a', 220.0).voice('b', 440.0);
    let mut bank = VoiceBank::with_noise(config, UniformNoise::seeded(3)).unwrap();
    bank.trigger(&'a');
    for _ in 0..10 {
        bank.tick();
    }

    let snapshot: Vec<(char, f32, VoiceState)> = bank
        .voices()
        .map(|(s, v)| (*s, v.sample(), v.state()))
        .collect();

    assert!(!bank.trigger(&'z'));

    let after: Vec<(char, f32, VoiceState)> = bank
        .voices()
        .map(|(s, v)| (*s, v.sample(), v.state()))
        .collect();
    assert_eq!(snapshot, after);
}

#[test]
fn impulse_string_follows_the_recurrence_exactly() {
    // A single impulse spreads and decays: after one full period the head
    // holds (1 + 0) / 2 * decay, after the next (0 + that) / 2 * decay.
    let mut voice = StringVoice::from_samples(&[1.0, 0.0, 0.0, 0.0]).unwrap();
    let mut output = Vec::new();
    for _ in 0..8 {
        output.push(voice.sample());
        voice.tic();
    }

    let half = 0.5 * DECAY_FACTOR;
    let expected = [1.0, 0.0, 0.0, 0.0, half, 0.0, 0.0, half * half];
    for (i, (&got, &want)) in output.iter().zip(expected.iter()).enumerate() {
        assert!((got - want).abs() < 1e-6, "sample {i}: got {got}, want {want}");
    }
}

#[test]
fn scripted_noise_makes_banks_reproducible() {
    let render = || {
        let config = BankConfig::keyboard(44_100.0);
        let noise = ScriptedNoise::new(vec![0.4, -0.3, 0.1, -0.45, 0.25]);
        let mut bank = VoiceBank::with_noise(config, noise).unwrap();
        let mut queue: VecDeque<char> = "qv ".chars().collect();
        bank.process_messages(&mut queue);

        let mut block = vec![0.0f32; 2048];
        bank.render_block(&mut block);
        block
    };

    assert_eq!(render(), render());
}

#[test]
fn chord_rings_down() {
    let config = BankConfig::keyboard(44_100.0);
    let mut bank = VoiceBank::with_noise(config, UniformNoise::seeded(8)).unwrap();
    for symbol in ['q', 'v', ' '] {
        assert!(bank.trigger(&symbol));
    }
    assert_eq!(bank.active_symbols().count(), 3);

    let mut block = vec![0.0f32; 4096];
    let mut first_peak = 0.0f32;
    bank.render_block(&mut block);
    for &s in &block {
        first_peak = first_peak.max(s.abs());
    }

    // Twenty seconds later every string has faded out
    for _ in 0..(44_100 * 20 / block.len()) {
        bank.render_block(&mut block);
    }
    let late_peak = block.iter().fold(0.0f32, |p, s| p.max(s.abs()));

    assert!(first_peak > 0.1);
    assert!(late_peak < 1e-3, "late peak {late_peak}");
    assert_eq!(bank.active_symbols().count(), 0);
}

#[test]
fn invalid_table_refuses_to_start() {
    let config = BankConfig::new(44_100.0)
        .voice('a', 220.0)
        .voice('b', 88_200.0);
    assert_eq!(
        VoiceBank::new(config).err(),
        Some(ConfigError::FrequencyOutOfRange {
            frequency: 88_200.0,
            sample_rate: 44_100.0
        })
    );
}
