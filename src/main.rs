use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use morsewav::synth::{DEFAULT_CARRIER_HZ, DEFAULT_SAMPLE_RATE, DEFAULT_UNIT_SECONDS};
use morsewav::{MorseCodec, ToneSynth, decode_waveform, wav};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fail on unmapped characters instead of dropping them silently
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate text to a Morse string
    Encode {
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Translate a Morse string back to text
    Decode {
        #[arg(value_name = "MORSE")]
        morse: String,
        /// Treat the input as spoken Morse ("dot dash slash")
        #[arg(long)]
        spoken: bool,
    },
    /// Synthesize text as a Morse tone WAV file
    Synth {
        #[arg(value_name = "TEXT")]
        text: String,
        /// Output WAV path
        #[arg(short, long, value_name = "WAV_FILE")]
        output: PathBuf,
        /// Dot duration in seconds
        #[arg(long, default_value_t = DEFAULT_UNIT_SECONDS)]
        unit: f32,
        /// Carrier frequency in Hz
        #[arg(long, default_value_t = DEFAULT_CARRIER_HZ)]
        freq: f32,
        /// Sample rate in Hz
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        rate: u32,
    },
    /// Decode a Morse tone WAV file back to text
    Listen {
        #[arg(value_name = "WAV_FILE")]
        wav_file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Set up logging. Use `RUST_LOG=info` or `RUST_LOG=debug` to see output.
    env_logger::init();
    let cli = Cli::parse();
    let codec = if cli.strict {
        MorseCodec::strict()
    } else {
        MorseCodec::new()
    };

    match cli.command {
        Command::Encode { text } => {
            println!("{}", codec.encode(&text)?);
        }
        Command::Decode { morse, spoken } => {
            let morse = if spoken {
                codec.normalize_spoken(&morse)
            } else {
                morse
            };
            println!("{}", codec.decode(&morse)?);
        }
        Command::Synth {
            text,
            output,
            unit,
            freq,
            rate,
        } => {
            let synth = ToneSynth::new(unit, freq, rate);
            let wave = synth.synthesize(&codec, &text)?;
            log::info!(
                "Synthesized {:.2}s of audio at {} Hz",
                wave.duration_seconds(),
                rate
            );
            wav::write_wav(&output, &wave)?;
            println!("Wrote {}", output.display());
        }
        Command::Listen { wav_file } => {
            log::info!("Opening WAV file: {:?}", wav_file);
            let wave = wav::read_wav(&wav_file)?;
            let morse = decode_waveform(&wave)?;
            log::info!("Decoded Morse: {}", morse);
            println!("{}", codec.decode(&morse)?);
        }
    }

    Ok(())
}
