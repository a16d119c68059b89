use crate::SamplePoint;

/// Averages each interleaved frame of `audio` down to a single sample.
///
/// Trailing samples that don't fill a whole frame are ignored; callers are
/// expected to have validated the frame alignment already.
pub fn mix_to_mono(audio: &[SamplePoint], channel_count: usize) -> Vec<SamplePoint> {
    if channel_count <= 1 {
        return audio.to_vec();
    }

    audio
        .chunks_exact(channel_count)
        .map(|frame| frame.iter().sum::<SamplePoint>() / channel_count as SamplePoint)
        .collect()
}

/// Largest absolute value in `audio`, skipping NaNs.
pub fn peak(audio: &[SamplePoint]) -> SamplePoint {
    audio
        .iter()
        .filter(|sample| !sample.is_nan())
        .fold(0.0, |max, sample| max.max(sample.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_passthrough() {
        let audio = vec![0.25, -0.5, 1.5];

        assert_eq!(mix_to_mono(&audio, 1), audio);
    }

    #[test]
    fn stereo_is_averaged() {
        let audio = vec![1.0, 0.0, -1.0, -0.5, 0.25, 0.75];

        assert_eq!(mix_to_mono(&audio, 2), vec![0.5, -0.75, 0.5]);
    }

    #[test]
    fn peak_ignores_nan() {
        assert_eq!(peak(&[0.5, f32::NAN, -2.0, 1.0]), 2.0);
        assert_eq!(peak(&[]), 0.0);
    }
}
