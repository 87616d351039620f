// src/codec.rs
// Text <-> Morse translation and segmentation recovery

use crate::table::SymbolTable;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("no morse mapping for character {0:?}")]
    UnmappedCharacter(char),
    #[error("unknown morse symbol {0:?}")]
    UnknownSymbol(String),
    #[error("unparsable morse input at byte offset {offset}")]
    Unsegmentable { offset: usize },
}

/// Text <-> Morse codec over an immutable [`SymbolTable`].
///
/// By default unmapped characters and unknown symbols are dropped
/// silently, matching traditional best-effort Morse tooling. `strict`
/// turns every such miss into an error instead.
pub struct MorseCodec {
    table: SymbolTable,
    strict: bool,
}

impl MorseCodec {
    pub fn new() -> Self {
        Self::with_table(SymbolTable::new(), false)
    }

    pub fn strict() -> Self {
        Self::with_table(SymbolTable::new(), true)
    }

    pub fn with_table(table: SymbolTable, strict: bool) -> Self {
        Self { table, strict }
    }

    /// Encodes text into a spaced Morse string.
    ///
    /// Letters are joined with single spaces and a space in the input
    /// becomes a `/` token. Unmapped characters contribute an empty
    /// token, so they surface as a stray double space in the output.
    pub fn encode(&self, text: &str) -> Result<String, CodecError> {
        let mut parts: Vec<&str> = Vec::with_capacity(text.len());
        for c in text.chars() {
            match self.table.encode_char(c) {
                Some(symbol) => parts.push(symbol),
                None if self.strict => return Err(CodecError::UnmappedCharacter(c)),
                None => parts.push(""),
            }
        }
        Ok(parts.join(" "))
    }

    /// Decodes a spaced Morse string back into text.
    ///
    /// Input made up of only `.`, `-`, `/` and whitespace is first run
    /// through [`insert_spaces`](Self::insert_spaces); existing spaces
    /// act as match barriers there, so correctly spaced input decodes
    /// unchanged.
    pub fn decode(&self, morse: &str) -> Result<String, CodecError> {
        let trimmed = morse.trim();
        let recovered;
        let spaced = if !trimmed.is_empty() && is_morse_charset(trimmed) {
            recovered = self.insert_spaces(trimmed)?;
            recovered.as_str()
        } else {
            trimmed
        };

        let mut words: Vec<String> = Vec::new();
        for word in spaced.split(" / ") {
            let mut decoded = String::new();
            for token in word.split_whitespace() {
                match self.table.decode_symbol(token) {
                    Some(c) => decoded.push(c),
                    None if self.strict => {
                        return Err(CodecError::UnknownSymbol(token.to_string()));
                    }
                    None => {}
                }
            }
            words.push(decoded);
        }
        Ok(words.join(" "))
    }

    /// Recovers letter boundaries in a Morse string that lacks them.
    ///
    /// Greedy longest-prefix match against every known symbol string
    /// plus `/`: on a match the candidate is emitted as a token and the
    /// scan advances past it; otherwise the scan advances one character
    /// without emitting. Skipped whitespace is benign; any other
    /// unmatchable character is a segmentation miss, fatal only in
    /// strict mode.
    ///
    /// Greedy matching is a heuristic: a run can re-segment through a
    /// longer code that prefixes it (`...---...` matches `...--` before
    /// `...`), which is accepted rather than corrected.
    pub fn insert_spaces(&self, unspaced: &str) -> Result<String, CodecError> {
        let mut tokens: Vec<&str> = Vec::new();
        let mut rest = unspaced;
        let mut offset = 0;

        'scan: while let Some(c) = rest.chars().next() {
            for &candidate in self.table.candidates() {
                if rest.starts_with(candidate) {
                    tokens.push(candidate);
                    rest = &rest[candidate.len()..];
                    offset += candidate.len();
                    continue 'scan;
                }
            }
            if self.strict && !c.is_whitespace() {
                return Err(CodecError::Unsegmentable { offset });
            }
            let width = c.len_utf8();
            rest = &rest[width..];
            offset += width;
        }
        Ok(tokens.join(" "))
    }

    /// Rewrites spoken Morse ("dot dash slash") into symbol characters,
    /// ready to feed into [`decode`](Self::decode).
    pub fn normalize_spoken(&self, spoken: &str) -> String {
        spoken
            .to_lowercase()
            .replace("dot", ".")
            .replace("dash", "-")
            .replace("slash", "/")
    }
}

impl Default for MorseCodec {
    fn default() -> Self {
        Self::new()
    }
}

fn is_morse_charset(s: &str) -> bool {
    s.chars()
        .all(|c| matches!(c, '.' | '-' | '/') || c.is_whitespace())
}
