// src/decoder.rs
// Envelope-based Morse audio decoder

use crate::wave::Waveform;
use thiserror::Error;

// Short-time energy frame length. 20ms resolves the shortest dot any
// realistic keying speed produces.
const FRAME_SECONDS: f32 = 0.02;
// A frame counts as tone when its energy exceeds this fraction of the
// loudest frame.
const TONE_FRACTION: f32 = 0.5;
// Gap classification thresholds, in timing units.
const LETTER_GAP_UNITS: i64 = 3;
const WORD_GAP_UNITS: i64 = 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("waveform contains no samples")]
    EmptyWaveform,
    #[error("waveform is silent (zero peak amplitude)")]
    SilentWaveform,
    #[error("no tone runs detected above the energy threshold")]
    NoToneDetected,
}

/// A maximal stretch of consecutive envelope frames sharing the same
/// tone/silence state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub tone: bool,
    pub frames: usize,
}

/// Decodes a mono waveform into a spaced Morse string.
///
/// Pipeline: peak-normalize, short-time energy envelope, binarize
/// against an adaptive threshold, run-length encode, estimate the dot
/// duration as the median tone-run length, then classify each run by
/// its rounded length in units. The single global threshold means
/// amplitude drift within a recording degrades the decode; that is an
/// accepted limitation.
pub fn decode_waveform(wave: &Waveform) -> Result<String, DecodeError> {
    if wave.samples.is_empty() {
        return Err(DecodeError::EmptyWaveform);
    }
    let peak = wave.peak();
    if peak == 0.0 {
        return Err(DecodeError::SilentWaveform);
    }

    let frame_size = ((wave.sample_rate as f32 * FRAME_SECONDS).round() as usize).max(1);
    let envelope = energy_envelope(&wave.samples, peak, frame_size);

    let max_energy = envelope.iter().fold(0.0f32, |acc, &e| acc.max(e));
    let threshold = TONE_FRACTION * max_energy;
    let bits: Vec<bool> = envelope.iter().map(|&e| e > threshold).collect();

    let runs = run_lengths(&bits);
    let unit = estimate_unit(&runs)?;
    log::debug!(
        "frame size {} samples, threshold {:.2}, unit {:.1} frames across {} runs",
        frame_size,
        threshold,
        unit,
        runs.len()
    );

    Ok(classify(&runs, unit))
}

/// Sum of normalized absolute sample values per non-overlapping frame.
/// The final frame may be shorter than `frame_size`.
fn energy_envelope(samples: &[f32], peak: f32, frame_size: usize) -> Vec<f32> {
    samples
        .chunks(frame_size)
        .map(|frame| frame.iter().map(|s| (s / peak).abs()).sum())
        .collect()
}

/// Collapses the binary envelope into alternating tone/silence runs.
fn run_lengths(bits: &[bool]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for &bit in bits {
        match runs.last_mut() {
            Some(run) if run.tone == bit => run.frames += 1,
            _ => runs.push(Run {
                tone: bit,
                frames: 1,
            }),
        }
    }
    runs
}

/// Median tone-run length, the decoder's estimate of one dot in frames.
///
/// The median shrugs off a single clipped dot, but it mis-reads
/// dash-majority traffic: when most tone runs are dashes the estimate
/// lands on the dash length and every element scales down by three.
fn estimate_unit(runs: &[Run]) -> Result<f32, DecodeError> {
    let mut tone_runs: Vec<usize> = runs.iter().filter(|r| r.tone).map(|r| r.frames).collect();
    if tone_runs.is_empty() {
        return Err(DecodeError::NoToneDetected);
    }
    tone_runs.sort_unstable();
    Ok(tone_runs[tone_runs.len() / 2] as f32)
}

/// Maps each run to its Morse fragment. Classification is memoryless:
/// the only shared state is the unit estimate computed up front.
fn classify(runs: &[Run], unit: f32) -> String {
    let mut morse = String::new();
    for run in runs {
        let units = (run.frames as f32 / unit).round() as i64;
        if run.tone {
            morse.push(if units <= 2 { '.' } else { '-' });
        } else if units >= WORD_GAP_UNITS {
            morse.push_str(" / ");
        } else if units >= LETTER_GAP_UNITS {
            morse.push(' ');
        }
    }
    morse
}
