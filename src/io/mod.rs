// Purpose - external interfaces, format conversions

pub mod converter;
pub mod midi;

/// Copy a mono block into an interleaved device buffer, duplicating each
/// sample across `channels`.
///
/// Writes `min(mono.len(), out.len() / channels)` frames and returns that count.
pub fn write_interleaved(mono: &[f32], out: &mut [f32], channels: usize) -> usize {
    if channels == 0 {
        return 0;
    }

    let mut frames = 0;
    for (frame, &sample) in out.chunks_exact_mut(channels).zip(mono) {
        frame.fill(sample);
        frames += 1;
    }
    frames
}
