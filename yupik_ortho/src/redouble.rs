// Orthographic redoubling: restores the double consonants that standard
// Yupik spelling leaves out.
//
// The orthography writes a voiced fricative or nasal single when its
// voicelessness is already implied by a neighboring stop or voiceless
// fricative (Jacobson 2001, p. 5). Redoubling puts the doubled spelling
// back so the phoneme table can map it directly.
//
// The rewrite is one left-to-right pass over adjacent token pairs. The
// rules in `DOUBLING_RULES` are tried in order and the first match wins;
// a firing rule replaces one side of the pair with its doubled grapheme and
// moves the cursor past both tokens. Because of that 2-step advance, the
// third token of an eligible chain (e.g. `t l n`) is never compared with
// its freshly doubled neighbor, and a second pass over the output can
// double more. That boundary behavior is intentional and covered by tests.
//
// Tables here are read-only constants; `redouble()` only mutates the vector
// the caller hands over.

use log::debug;

use crate::types::ConsonantClass;

/// A singular consonant grapheme and its geminated spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Doubling {
    pub single: &'static str,
    pub doubled: &'static str,
}

/// Every grapheme the rules may double, with its doubled form.
pub const DOUBLINGS: &[Doubling] = &[
    Doubling { single: "l", doubled: "ll" },
    Doubling { single: "r", doubled: "rr" },
    Doubling { single: "g", doubled: "gg" },
    Doubling { single: "gh", doubled: "ghh" },
    Doubling { single: "ghw", doubled: "ghhw" },
    Doubling { single: "n", doubled: "nn" },
    Doubling { single: "m", doubled: "mm" },
    Doubling { single: "ng", doubled: "ngng" },
    Doubling { single: "ngw", doubled: "ngngw" },
];

const DOUBLEABLE_FRICATIVES: &[&str] = &["l", "r", "g", "gh", "ghw"];
const DOUBLEABLE_NASALS: &[&str] = &["n", "m", "ng", "ngw"];
const DOUBLED_FRICATIVES: &[&str] = &["ll", "rr", "gg", "ghh", "ghhw"];
const UNDOUBLEABLE_UNVOICED: &[&str] = &["p", "t", "k", "kw", "q", "qw", "f", "s", "wh"];

/// The doubled spelling of `grapheme`, if the rules can double it.
pub fn doubled(grapheme: &str) -> Option<&'static str> {
    DOUBLINGS
        .iter()
        .find(|d| d.single == grapheme)
        .map(|d| d.doubled)
}

/// Which redoubling class `grapheme` falls in, if any.
pub fn consonant_class(grapheme: &str) -> Option<ConsonantClass> {
    let classes = [
        (DOUBLEABLE_FRICATIVES, ConsonantClass::DoubleableFricative),
        (DOUBLEABLE_NASALS, ConsonantClass::DoubleableNasal),
        (DOUBLED_FRICATIVES, ConsonantClass::DoubledFricative),
        (UNDOUBLEABLE_UNVOICED, ConsonantClass::UndoubleableUnvoiced),
    ];
    classes
        .into_iter()
        .find(|(members, _)| members.contains(&grapheme))
        .map(|(_, class)| class)
}

fn is(grapheme: &str, class: ConsonantClass) -> bool {
    consonant_class(grapheme) == Some(class)
}

/// Which token of a matched pair a rule rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    First,
    Second,
}

/// One context-sensitive doubling rule.
#[derive(Debug, Clone, Copy)]
pub struct DoublingRule {
    /// Short label used in logs and tests (e.g. "1A").
    pub label: &'static str,
    /// Does the rule apply to the pair `(first, second)`?
    pub applies: fn(&str, &str) -> bool,
    /// The side of the pair that gets doubled.
    pub target: Target,
}

/// The doubling rules, in the order they are tried.
pub const DOUBLING_RULES: &[DoublingRule] = &[
    // Fricative before a stop or voiceless fricative.
    DoublingRule {
        label: "1A",
        applies: |first, second| {
            is(first, ConsonantClass::DoubleableFricative)
                && is(second, ConsonantClass::UndoubleableUnvoiced)
        },
        target: Target::First,
    },
    // Fricative after a stop or voiceless fricative.
    DoublingRule {
        label: "1B",
        applies: |first, second| {
            is(first, ConsonantClass::UndoubleableUnvoiced)
                && is(second, ConsonantClass::DoubleableFricative)
        },
        target: Target::Second,
    },
    // Nasal after a stop or voiceless fricative.
    DoublingRule {
        label: "2",
        applies: |first, second| {
            is(first, ConsonantClass::UndoubleableUnvoiced)
                && is(second, ConsonantClass::DoubleableNasal)
        },
        target: Target::Second,
    },
    // Fricative or nasal after a doubled fricative.
    DoublingRule {
        label: "3A",
        applies: |first, second| {
            is(first, ConsonantClass::DoubledFricative)
                && (is(second, ConsonantClass::DoubleableFricative)
                    || is(second, ConsonantClass::DoubleableNasal))
        },
        target: Target::Second,
    },
    // Fricative before `ll`.
    DoublingRule {
        label: "3B",
        applies: |first, second| is(first, ConsonantClass::DoubleableFricative) && second == "ll",
        target: Target::First,
    },
];

/// The first rule that applies to `(first, second)`, if any.
pub fn matching_rule(first: &str, second: &str) -> Option<&'static DoublingRule> {
    DOUBLING_RULES
        .iter()
        .find(|rule| (rule.applies)(first, second))
}

/// Restore doubled consonants in a tokenized word.
///
/// Returns a vector of the same length and order; each token is either kept
/// or replaced by its doubled form. Tokens outside the consonant classes
/// never match a rule and pass through untouched.
pub fn redouble(mut tokens: Vec<String>) -> Vec<String> {
    let mut i = 0;
    while i + 1 < tokens.len() {
        let Some(rule) = matching_rule(&tokens[i], &tokens[i + 1]) else {
            i += 1;
            continue;
        };

        let index = match rule.target {
            Target::First => i,
            Target::Second => i + 1,
        };
        // Every rule target is a doubleable class member, so the lookup hits.
        if let Some(double) = doubled(&tokens[index]) {
            debug!("rule {} at {i}: {} -> {double}", rule.label, tokens[index]);
            tokens[index] = double.to_string();
        }
        i += 2;
    }
    tokens
}
