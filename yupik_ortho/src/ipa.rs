// Grapheme-to-phoneme table and IPA conversion.
//
// Each grapheme of the inventory maps to one phonemic IPA string. Several
// are more than one code point: long vowels carry U+02D0 (length mark),
// labialized consonants U+02B7 (small w), and voiceless nasals a combining
// ring (U+0325 below, or U+030A above for the eng). The strings are opaque
// and never sliced.
//
// Conversion is a per-token map with no cross-token context. A trailing
// `*` marks a "strong" segment upstream; it has no phonemic content and
// is dropped before mapping. Tokens missing from the table (fallback
// characters, stray markers) pass through unchanged.

use crate::error::PipelineError;
use crate::types::PhonemeClass;
use crate::types::PhonemeClass::*;

/// Trailing token flagging a strong segment. Never mapped to a phoneme.
pub const MARKER: &str = "*";

/// One row of the phoneme table.
#[derive(Debug, Clone)]
pub struct PhonemeEntry {
    /// Orthographic grapheme.
    pub grapheme: &'static str,
    /// Phonemic transcription.
    pub ipa: &'static str,
    /// Articulatory class.
    pub class: PhonemeClass,
    /// Unicode name of the IPA symbol (e.g., "LATIN SMALL LETTER ENG").
    pub label: &'static str,
}

const fn entry(
    grapheme: &'static str,
    ipa: &'static str,
    class: PhonemeClass,
    label: &'static str,
) -> PhonemeEntry {
    PhonemeEntry {
        grapheme,
        ipa,
        class,
        label,
    }
}

/// The phoneme table, grouped by class.
pub const PHONEMES: &[PhonemeEntry] = &[
    entry("i", "\u{0069}", Vowel, "LATIN SMALL LETTER I"),
    entry("a", "\u{0251}", Vowel, "LATIN SMALL LETTER ALPHA"),
    entry("u", "\u{0075}", Vowel, "LATIN SMALL LETTER U"),
    entry("e", "\u{0259}", Vowel, "LATIN SMALL LETTER SCHWA"),
    entry("ii", "\u{0069}\u{02D0}", Vowel, "LATIN SMALL LETTER I + TRIANGULAR COLON"),
    entry("aa", "\u{0251}\u{02D0}", Vowel, "LATIN SMALL LETTER ALPHA + TRIANGULAR COLON"),
    entry("uu", "\u{0075}\u{02D0}", Vowel, "LATIN SMALL LETTER U + TRIANGULAR COLON"),
    entry("p", "\u{0070}", Stop, "LATIN SMALL LETTER P"),
    entry("t", "\u{0074}", Stop, "LATIN SMALL LETTER T"),
    entry("k", "\u{006B}", Stop, "LATIN SMALL LETTER K"),
    entry("kw", "\u{006B}\u{02B7}", Stop, "LATIN SMALL LETTER K + SMALL W"),
    entry("q", "\u{0071}", Stop, "LATIN SMALL LETTER Q"),
    entry("qw", "\u{0071}\u{02B7}", Stop, "LATIN SMALL LETTER Q + SMALL W"),
    entry("v", "\u{0076}", VoicedFricative, "LATIN SMALL LETTER V"),
    entry("l", "\u{006C}", VoicedFricative, "LATIN SMALL LETTER L"),
    entry("z", "\u{007A}", VoicedFricative, "LATIN SMALL LETTER Z"),
    entry("y", "\u{006A}", VoicedFricative, "LATIN SMALL LETTER J"),
    entry("r", "\u{0279}", VoicedFricative, "LATIN SMALL LETTER TURNED R"),
    entry("g", "\u{0263}", VoicedFricative, "LATIN SMALL LETTER GAMMA"),
    entry("w", "\u{0263}\u{02B7}", VoicedFricative, "LATIN SMALL LETTER GAMMA + SMALL W"),
    entry("gh", "\u{0281}", VoicedFricative, "LATIN LETTER SMALL CAPITAL INVERTED R"),
    entry(
        "ghw",
        "\u{0281}\u{02B7}",
        VoicedFricative,
        "LATIN LETTER SMALL CAPITAL INVERTED R + SMALL W",
    ),
    entry("f", "\u{0066}", VoicelessFricative, "LATIN SMALL LETTER F"),
    entry("ll", "\u{026C}", VoicelessFricative, "LATIN SMALL LETTER L WITH BELT"),
    entry("s", "\u{0073}", VoicelessFricative, "LATIN SMALL LETTER S"),
    entry("rr", "\u{0282}", VoicelessFricative, "LATIN SMALL LETTER S WITH HOOK"),
    entry("gg", "\u{0078}", VoicelessFricative, "LATIN SMALL LETTER X"),
    entry("wh", "\u{0078}\u{02B7}", VoicelessFricative, "LATIN SMALL LETTER X + SMALL W"),
    entry("ghh", "\u{03C7}", VoicelessFricative, "GREEK SMALL LETTER CHI"),
    entry("ghhw", "\u{03C7}\u{02B7}", VoicelessFricative, "GREEK SMALL LETTER CHI + SMALL W"),
    entry("h", "\u{0068}", VoicelessFricative, "LATIN SMALL LETTER H"),
    entry("m", "\u{006D}", VoicedNasal, "LATIN SMALL LETTER M"),
    entry("n", "\u{006E}", VoicedNasal, "LATIN SMALL LETTER N"),
    entry("ng", "\u{014B}", VoicedNasal, "LATIN SMALL LETTER ENG"),
    entry("ngw", "\u{014B}\u{02B7}", VoicedNasal, "LATIN SMALL LETTER ENG + SMALL W"),
    entry("mm", "\u{006D}\u{0325}", VoicelessNasal, "LATIN SMALL LETTER M + RING BELOW"),
    entry("nn", "\u{006E}\u{0325}", VoicelessNasal, "LATIN SMALL LETTER N + RING BELOW"),
    entry("ngng", "\u{014B}\u{030A}", VoicelessNasal, "LATIN SMALL LETTER ENG + RING ABOVE"),
    entry(
        "ngngw",
        "\u{014B}\u{030A}\u{02B7}",
        VoicelessNasal,
        "LATIN SMALL LETTER ENG + RING ABOVE + SMALL W",
    ),
];

/// The IPA string for `grapheme`, if it has one.
pub fn phoneme(grapheme: &str) -> Option<&'static str> {
    PHONEMES
        .iter()
        .find(|e| e.grapheme == grapheme)
        .map(|e| e.ipa)
}

/// All phoneme table rows of the given class, in table order.
pub fn phonemes_by_class(class: PhonemeClass) -> Vec<&'static PhonemeEntry> {
    PHONEMES.iter().filter(|e| e.class == class).collect()
}

fn map_tokens(tokens: &[String]) -> Vec<String> {
    let tokens = match tokens.split_last() {
        Some((last, rest)) if last == MARKER => rest,
        _ => tokens,
    };
    tokens
        .iter()
        .map(|t| phoneme(t).map_or_else(|| t.clone(), str::to_string))
        .collect()
}

/// Convert tokens to IPA, one output string per token.
///
/// A trailing [`MARKER`] is dropped first. Tokens without a table entry
/// are copied through.
///
/// # Panics
///
/// Panics with an out-of-bounds message when `tokens` is empty, since
/// there is no final token to check for the marker. Use
/// [`try_convert2ipa`] when the input may be empty.
pub fn convert2ipa(tokens: &[String]) -> Vec<String> {
    if tokens.is_empty() {
        panic!("convert2ipa: index out of bounds, the token sequence is empty");
    }
    map_tokens(tokens)
}

/// Like [`convert2ipa`], but reports an empty sequence as an error.
pub fn try_convert2ipa(tokens: &[String]) -> Result<Vec<String>, PipelineError> {
    if tokens.is_empty() {
        return Err(PipelineError::EmptyTokens);
    }
    Ok(map_tokens(tokens))
}
