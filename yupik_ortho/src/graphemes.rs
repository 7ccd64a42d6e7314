// Yupik grapheme inventory, tokenizer, and token serialization.
//
// The inventory is an ordered table: longer or more specific graphemes come
// before the shorter ones that are their prefixes or suffixes (`ngngw`
// before `ngng` before `ng` before `n`). The tokenizer walks the word from
// its end and takes the first inventory entry that is a suffix of what is
// left, so the order doubles as the matching priority. Scanning backward
// keeps clusters such as `ngngw` intact where a forward scan would split
// off `ng` first.
//
// Characters the inventory does not cover become single-character tokens,
// so every step consumes at least one character and the tokens always
// concatenate back to the lower-cased word.

use log::trace;

/// Every grapheme of the orthography, in matching priority order.
pub const GRAPHEMES: &[&str] = &[
    "ngngw", "ngng", "ghhw", "ghh", "ghw", "ngw", "gg", "gh", "kw", "ll", "mm", "ng", "nn", "qw",
    "rr", "wh", "aa", "ii", "uu", "a", "e", "f", "g", "h", "i", "k", "l", "m", "n", "p", "q", "r",
    "s", "t", "u", "v", "w", "y", "z",
];

/// Whether `s` is one of the inventory graphemes.
pub fn is_grapheme(s: &str) -> bool {
    GRAPHEMES.iter().any(|g| *g == s)
}

/// Split a word into graphemes.
///
/// The word is lower-cased first. Matching is greedy from the end of the
/// word, trying inventory entries in priority order; when nothing matches,
/// the last character becomes a token on its own. Empty input gives an
/// empty vector.
pub fn tokenize(word: &str) -> Vec<String> {
    let word = word.to_lowercase();
    let mut tokens = Vec::new();
    let mut rest = word.as_str();

    while !rest.is_empty() {
        let token = match GRAPHEMES.iter().find(|g| rest.ends_with(**g)) {
            Some(grapheme) => *grapheme,
            None => {
                let start = rest.char_indices().next_back().map_or(0, |(i, _)| i);
                let fallback = &rest[start..];
                trace!("no grapheme matches {fallback:?}, keeping it as a single token");
                fallback
            }
        };
        tokens.push(token.to_string());
        rest = &rest[..rest.len() - token.len()];
    }

    // Built back to front.
    tokens.reverse();
    tokens
}

/// Concatenate tokens in order with no separator.
pub fn tokens2string(tokens: &[String]) -> String {
    tokens.concat()
}

/// Concatenate tokens in order, placing `separator` between neighbors.
pub fn join_tokens(tokens: &[String], separator: &str) -> String {
    tokens.join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_inventory_size() {
        assert_eq!(GRAPHEMES.len(), 39);
    }

    #[test]
    fn test_inventory_has_no_empty_or_duplicate_entries() {
        for (i, g) in GRAPHEMES.iter().enumerate() {
            assert!(!g.is_empty(), "Grapheme {i} is empty");
            assert!(
                !GRAPHEMES[i + 1..].contains(g),
                "Grapheme '{g}' appears more than once"
            );
        }
    }

    #[test]
    fn test_inventory_priority_order() {
        // A grapheme must come before every shorter grapheme that is one of
        // its suffixes, otherwise the shorter one would always win.
        for (i, long) in GRAPHEMES.iter().enumerate() {
            for short in &GRAPHEMES[..i] {
                assert!(
                    !(short.len() < long.len() && long.ends_with(short)),
                    "'{short}' shadows '{long}'"
                );
            }
        }
    }

    #[test]
    fn test_is_grapheme() {
        assert!(is_grapheme("ngngw"));
        assert!(is_grapheme("a"));
        assert!(!is_grapheme("b"));
        assert!(!is_grapheme("*"));
        assert!(!is_grapheme(""));
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_longest_match() {
        assert_eq!(tokenize("ngngwaa"), strings(&["ngngw", "aa"]));
    }

    #[test]
    fn test_tokenize_aangkegtat() {
        assert_eq!(
            tokenize("aangkegtat"),
            strings(&["aa", "ng", "k", "e", "g", "t", "a", "t"])
        );
    }

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("AGHHWA"), strings(&["a", "ghhw", "a"]));
    }

    #[test]
    fn test_tokenize_labialized_clusters() {
        assert_eq!(tokenize("qwagh"), strings(&["qw", "a", "gh"]));
        assert_eq!(tokenize("kwiighw"), strings(&["kw", "ii", "ghw"]));
    }

    #[test]
    fn test_tokenize_fallback_characters() {
        assert_eq!(tokenize("a7b"), strings(&["a", "7", "b"]));
        assert_eq!(tokenize("aghw*"), strings(&["a", "ghw", "*"]));
    }

    #[test]
    fn test_tokenize_non_ascii_fallback() {
        // Fallback tokens are whole characters, never partial code units.
        assert_eq!(tokenize("añu"), strings(&["a", "ñ", "u"]));
    }

    #[test]
    fn test_tokenize_reconstructs_word() {
        for word in ["Sivuqaq", "ungipaghaq", "mangteghaq", "x-ray 42"] {
            assert_eq!(tokens2string(&tokenize(word)), word.to_lowercase());
        }
    }

    #[test]
    fn test_tokens2string() {
        assert_eq!(tokens2string(&strings(&["ɑː", "ŋ", "k"])), "ɑːŋk");
        assert_eq!(tokens2string(&[]), "");
    }

    #[test]
    fn test_join_tokens() {
        assert_eq!(join_tokens(&strings(&["ɑː", "ŋ", "k"]), "."), "ɑː.ŋ.k");
        assert_eq!(join_tokens(&strings(&["a"]), "."), "a");
    }
}
