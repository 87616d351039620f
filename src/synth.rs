// src/synth.rs
// Sine tone synthesis of Morse strings for playback and round-trip testing

use crate::codec::{CodecError, MorseCodec};
use crate::wave::Waveform;
use std::f32::consts::PI;

pub const DEFAULT_UNIT_SECONDS: f32 = 0.1;
pub const DEFAULT_CARRIER_HZ: f32 = 750.0;
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Renders a Morse string into a full-scale sine waveform.
///
/// Timing is additive over the character stream of the Morse string:
/// every dot and dash carries a trailing one-unit gap, and the space and
/// slash characters between letters and words contribute their own three
/// and seven units of silence on top of that. The decoder's gap
/// thresholds assume exactly this composition.
pub struct ToneSynth {
    pub unit_seconds: f32,
    pub carrier_hz: f32,
    pub sample_rate: u32,
}

impl ToneSynth {
    pub fn new(unit_seconds: f32, carrier_hz: f32, sample_rate: u32) -> Self {
        Self {
            unit_seconds,
            carrier_hz,
            sample_rate,
        }
    }

    /// Encodes `text` with `codec` and renders the result.
    pub fn synthesize(&self, codec: &MorseCodec, text: &str) -> Result<Waveform, CodecError> {
        Ok(self.render(&codec.encode(text)?))
    }

    /// Renders an already-encoded Morse string.
    pub fn render(&self, morse: &str) -> Waveform {
        let unit_samples = (self.unit_seconds * self.sample_rate as f32).round() as usize;

        // Pre-size the buffer from the total unit count so long inputs
        // don't pay for repeated reallocation.
        let total_units: usize = morse.chars().map(units_for).sum();
        let mut samples = Vec::with_capacity(total_units * unit_samples);

        for c in morse.chars() {
            match c {
                '.' => {
                    self.push_tone(&mut samples, unit_samples);
                    samples.resize(samples.len() + unit_samples, 0.0);
                }
                '-' => {
                    self.push_tone(&mut samples, 3 * unit_samples);
                    samples.resize(samples.len() + unit_samples, 0.0);
                }
                ' ' => samples.resize(samples.len() + 3 * unit_samples, 0.0),
                '/' => samples.resize(samples.len() + 7 * unit_samples, 0.0),
                _ => {}
            }
        }

        Waveform::new(self.sample_rate, samples)
    }

    fn push_tone(&self, samples: &mut Vec<f32>, count: usize) {
        for i in 0..count {
            let t = i as f32 / self.sample_rate as f32;
            samples.push((2.0 * PI * self.carrier_hz * t).sin());
        }
    }
}

impl Default for ToneSynth {
    fn default() -> Self {
        Self::new(DEFAULT_UNIT_SECONDS, DEFAULT_CARRIER_HZ, DEFAULT_SAMPLE_RATE)
    }
}

fn units_for(c: char) -> usize {
    match c {
        '.' => 2,  // one unit tone + one unit trailing gap
        '-' => 4,  // three units tone + one unit trailing gap
        ' ' => 3,
        '/' => 7,
        _ => 0,
    }
}
