// src/table.rs
// Bidirectional character <-> Morse symbol mapping

use std::collections::HashMap;

/// International Morse, plus `' ' -> "/"` so the word separator travels
/// through the same table as every other character.
const MORSE_TABLE: &[(char, &'static str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    (' ', "/"),
    (',', "--..--"),
    ('.', ".-.-.-"),
    ('?', "..--.."),
];

/// Immutable forward and inverse symbol maps, built once and shared by
/// reference. The forward map is injective, so the inverse is total over
/// its value set.
pub struct SymbolTable {
    forward: HashMap<char, &'static str>,
    inverse: HashMap<&'static str, char>,
    // Segmentation candidates: every symbol string, longest first.
    // Same-length ties resolved lexicographically so matching order is
    // deterministic across runs.
    candidates: Vec<&'static str>,
}

impl SymbolTable {
    pub fn new() -> Self {
        let forward: HashMap<char, &'static str> = MORSE_TABLE.iter().copied().collect();
        let inverse: HashMap<&'static str, char> =
            MORSE_TABLE.iter().map(|&(c, s)| (s, c)).collect();

        let mut candidates: Vec<&'static str> = MORSE_TABLE.iter().map(|&(_, s)| s).collect();
        candidates.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

        Self {
            forward,
            inverse,
            candidates,
        }
    }

    /// Morse symbol string for a character, case-folded to uppercase.
    pub fn encode_char(&self, c: char) -> Option<&'static str> {
        self.forward.get(&c.to_ascii_uppercase()).copied()
    }

    /// Character for a Morse symbol string. `"/"` decodes to a space.
    pub fn decode_symbol(&self, symbol: &str) -> Option<char> {
        self.inverse.get(symbol).copied()
    }

    /// Candidate patterns for segmentation recovery, longest first.
    pub fn candidates(&self) -> &[&'static str] {
        &self.candidates
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
