// src/wav.rs
// WAV file adapters between the filesystem and the in-memory core

use crate::wave::Waveform;
use anyhow::{Result, bail};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;

/// Reads a WAV file into a mono [`Waveform`].
///
/// 16-bit integer and 32-bit float formats are accepted. Multi-channel
/// files keep channel 0 only.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<Waveform> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    log::info!("WAV spec: {:?}", spec);

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Int if spec.bits_per_sample == 16 => reader
            .samples::<i16>()
            .collect::<Result<Vec<i16>, _>>()?
            .iter()
            .map(|&s| s as f32 / 32768.0)
            .collect(),
        SampleFormat::Float => reader.samples::<f32>().collect::<Result<Vec<f32>, _>>()?,
        _ => bail!(
            "Unsupported sample format: {:?} ({} bits). Only 16-bit Int and 32-bit Float are supported.",
            spec.sample_format,
            spec.bits_per_sample
        ),
    };

    let mono: Vec<f32> = if spec.channels > 1 {
        samples
            .iter()
            .step_by(spec.channels as usize)
            .copied()
            .collect()
    } else {
        samples
    };

    Ok(Waveform::new(spec.sample_rate, mono))
}

/// Writes a [`Waveform`] as a mono 16-bit signed little-endian WAV file.
pub fn write_wav<P: AsRef<Path>>(path: P, wave: &Waveform) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: wave.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in &wave.samples {
        writer.write_sample((sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)?;
    }
    writer.finalize()?;
    Ok(())
}
