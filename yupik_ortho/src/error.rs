// Error type for the fallible entry points of the pipeline.
//
// The stages themselves never fail: unknown characters and tokens pass
// through unchanged. The only precondition is that IPA conversion needs at
// least one token to inspect for the trailing marker, so the errors here
// cover the empty cases reached through `try_convert2ipa()` and
// `transcribe_with()`.

use thiserror::Error;

/// Errors reported by the non-panicking pipeline entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// IPA conversion was asked to map an empty token sequence.
    #[error("cannot convert an empty token sequence to IPA")]
    EmptyTokens,

    /// The word to transcribe produced no graphemes.
    #[error("cannot transcribe an empty word")]
    EmptyWord,
}
