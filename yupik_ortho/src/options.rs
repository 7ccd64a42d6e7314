// Caller-facing configuration for `transcribe_with()`.
//
// The grapheme, doubling and phoneme tables are fixed; the only knobs are
// how the pipeline output is assembled. Options load from JSON (every field
// optional, missing ones take their defaults) so a caller can keep them
// next to its own configuration.

use serde::{Deserialize, Serialize};

/// How a word is run through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscribeOptions {
    /// Take the IPA from the redoubled graphemes (`true`) or straight from
    /// the surface spelling (`false`).
    pub redouble: bool,
    /// Placed between phonemes in `Transcription::ipa`. Empty by default,
    /// which matches `tokens2string`.
    pub separator: String,
}

impl Default for TranscribeOptions {
    fn default() -> Self {
        Self {
            redouble: true,
            separator: String::new(),
        }
    }
}

impl TranscribeOptions {
    /// Parse options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
