// src/lib.rs
// Library interface for morsewav

pub mod codec;
pub mod decoder;
pub mod synth;
pub mod table;
pub mod wav;
pub mod wave;

pub use codec::{CodecError, MorseCodec};
pub use decoder::{DecodeError, Run, decode_waveform};
pub use synth::ToneSynth;
pub use table::SymbolTable;
pub use wave::Waveform;
