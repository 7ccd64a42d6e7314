// Yupik orthography crate: redoubling and IPA transcription of single words.
//
// Turns a word in standard Yupik spelling into its "redoubled" spelling
// (consonant gemination the orthography leaves implicit, written out) and
// into a phonemic IPA transcription. Callers hand over one word at a time;
// there is no file or corpus handling here.
//
// Architecture:
// - `graphemes.rs`: Grapheme inventory, `tokenize()`, `tokens2string()`
// - `redouble.rs`: Consonant classes, doubling table, rule table, `redouble()`
// - `ipa.rs`: Phoneme table, `convert2ipa()` / `try_convert2ipa()`
// - `types.rs`: `ConsonantClass`, `PhonemeClass`, `Transcription`
// - `options.rs`: `TranscribeOptions`, loaded from JSON
// - `error.rs`: `PipelineError`
// - `lib.rs` (this file): `transcribe()` / `transcribe_with()`, which chain
//   the stages and package every intermediate form into a `Transcription`
//
// The stages compose as
// `tokens2string(convert2ipa(redouble(tokenize(word))))`; leave out
// `redouble` to transcribe the surface spelling. Every function is pure and
// reads only `const` tables, so concurrent callers need no coordination.

pub mod error;
pub mod graphemes;
pub mod ipa;
pub mod options;
pub mod redouble;
pub mod types;

// Re-export key items at crate root for convenience.
pub use error::PipelineError;
pub use graphemes::{GRAPHEMES, is_grapheme, join_tokens, tokenize, tokens2string};
pub use ipa::{MARKER, convert2ipa, phoneme, try_convert2ipa};
pub use options::TranscribeOptions;
pub use redouble::{doubled, redouble};
pub use types::{ConsonantClass, PhonemeClass, Transcription};

use log::debug;

/// Transcribe a word with the default options (redoubled, no separator).
pub fn transcribe(word: &str) -> Result<Transcription, PipelineError> {
    transcribe_with(word, &TranscribeOptions::default())
}

/// Run the full pipeline on one word.
///
/// Returns `PipelineError::EmptyWord` if the word has no characters; any
/// other input succeeds, with unknown characters carried through as-is.
pub fn transcribe_with(
    word: &str,
    options: &TranscribeOptions,
) -> Result<Transcription, PipelineError> {
    let graphemes = tokenize(word);
    if graphemes.is_empty() {
        return Err(PipelineError::EmptyWord);
    }

    let redoubled = if options.redouble {
        redouble(graphemes.clone())
    } else {
        graphemes.clone()
    };
    let phonemes = try_convert2ipa(&redoubled)?;

    let transcription = Transcription {
        word: tokens2string(&graphemes),
        orthography: tokens2string(&redoubled),
        ipa: join_tokens(&phonemes, &options.separator),
        graphemes,
        redoubled,
        phonemes,
    };
    debug!(
        "transcribed {:?} -> {:?} -> {:?}",
        transcription.word, transcription.orthography, transcription.ipa
    );
    Ok(transcription)
}
