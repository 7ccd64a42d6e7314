// Core Yupik orthography types: consonant classes, phoneme classes, and the
// structured transcription result.
//
// These types are shared by the three pipeline stages:
// - `ConsonantClass` — the four disjoint consonant groups the redoubling
//   rules test against (see `redouble.rs`)
// - `PhonemeClass` — the articulatory grouping of the phoneme table (see
//   `ipa.rs`), exposed for table queries
// - `Transcription` — everything the pipeline derives from one word, built
//   by `transcribe_with()` in `lib.rs`
//
// All types are plain data with no interior mutability, so the pipeline is
// safe to call from any number of threads at once.

use serde::{Deserialize, Serialize};

/// Consonant grouping used by the redoubling rules.
///
/// The groups are pairwise disjoint: a grapheme belongs to at most one of
/// them, which is what makes the rule predicates mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsonantClass {
    /// Voiced fricatives written single: `l r g gh ghw`.
    DoubleableFricative,
    /// Voiced nasals written single: `n m ng ngw`.
    DoubleableNasal,
    /// Fricatives whose doubling marks voicelessness: `ll rr gg ghh ghhw`.
    DoubledFricative,
    /// Stops and inherently voiceless fricatives: `p t k kw q qw f s wh`.
    UndoubleableUnvoiced,
}

/// Articulatory class of a phoneme table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhonemeClass {
    Vowel,
    Stop,
    VoicedFricative,
    VoicelessFricative,
    VoicedNasal,
    VoicelessNasal,
}

/// The full set of representations derived from one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcription {
    /// The input word, lower-cased.
    pub word: String,
    /// Surface graphemes as produced by the tokenizer.
    pub graphemes: Vec<String>,
    /// Graphemes after redoubling. Equal to `graphemes` when redoubling is
    /// disabled.
    pub redoubled: Vec<String>,
    /// `redoubled` joined back into a single orthographic string.
    pub orthography: String,
    /// One IPA string per grapheme, with any trailing marker dropped.
    pub phonemes: Vec<String>,
    /// `phonemes` joined with the configured separator.
    pub ipa: String,
}

impl Transcription {
    /// Serialize this transcription to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonant_class_serde() {
        let json = serde_json::to_string(&ConsonantClass::DoubleableFricative).unwrap();
        assert_eq!(json, "\"doubleable_fricative\"");
        let parsed: ConsonantClass = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ConsonantClass::DoubleableFricative);
    }

    #[test]
    fn test_phoneme_class_serde() {
        let json = serde_json::to_string(&PhonemeClass::VoicelessNasal).unwrap();
        assert_eq!(json, "\"voiceless_nasal\"");
        let parsed: PhonemeClass = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, PhonemeClass::VoicelessNasal);
    }

    #[test]
    fn test_transcription_json_roundtrip() {
        let transcription = Transcription {
            word: "aghta".to_string(),
            graphemes: vec!["a".into(), "gh".into(), "t".into(), "a".into()],
            redoubled: vec!["a".into(), "ghh".into(), "t".into(), "a".into()],
            orthography: "aghhta".to_string(),
            phonemes: vec!["ɑ".into(), "χ".into(), "t".into(), "ɑ".into()],
            ipa: "ɑχtɑ".to_string(),
        };

        let json = transcription.to_json().unwrap();
        assert!(json.contains("\"orthography\":\"aghhta\""), "got {json}");
        let parsed: Transcription = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, transcription);
    }
}
