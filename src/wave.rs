// src/wave.rs
// Mono waveform value type shared by the synthesizer, decoder, and WAV adapters

/// A mono sample buffer and its sample rate.
///
/// Multi-channel captures are reduced to channel 0 by the source adapter
/// before the core ever sees them.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    pub sample_rate: u32,
    pub samples: Vec<f32>,
}

impl Waveform {
    pub fn new(sample_rate: u32, samples: Vec<f32>) -> Self {
        Self {
            sample_rate,
            samples,
        }
    }

    pub fn duration_seconds(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Largest absolute sample value, 0.0 for an empty buffer.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_and_peak() {
        let wave = Waveform::new(1000, vec![0.0, 0.25, -0.5, 0.1]);
        assert_eq!(wave.duration_seconds(), 0.004);
        assert_eq!(wave.peak(), 0.5);
    }

    #[test]
    fn test_empty_peak_is_zero() {
        let wave = Waveform::new(44100, Vec::new());
        assert_eq!(wave.peak(), 0.0);
    }
}
