//! Profanity screening for user-submitted text.
//!
//! Comments are rejected outright when they contain a blocked word. The
//! word list is embedded (English plus Brazilian Portuguese) and matched
//! on word boundaries, case-insensitively, so "class" or "assist" never
//! trip the filter.

use std::sync::OnceLock;

use regex::Regex;

/// Embedded blocklist. Matched as whole words only.
const BLOCKED_WORDS: &[&str] = &[
    // English
    "arsehole", "asshole", "bastard", "bitch", "bollocks", "bullshit",
    "cunt", "dick", "dickhead", "douchebag", "fuck", "fucker", "fucking",
    "motherfucker", "nigger", "prick", "pussy", "shit", "slut", "twat",
    "wanker", "whore",
    // Brazilian Portuguese
    "arrombado", "babaca", "boceta", "buceta", "cacete", "caralho",
    "corno", "cuzao", "desgraca", "fdp", "filha da puta", "filho da puta",
    "foder", "merda", "otario", "porra", "puta", "puto", "vadia",
    "viado", "xereca",
];

fn blocklist_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        let alternation = BLOCKED_WORDS
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
            .unwrap_or_else(|e| panic!("invalid profanity blocklist regex: {e}"))
    })
}

/// Whether `text` contains a blocked word.
pub fn has_profanity(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    blocklist_regex().is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_passes() {
        assert!(!has_profanity("A quiet masterpiece, best ending ever."));
        assert!(!has_profanity(""));
    }

    #[test]
    fn test_blocked_word_detected() {
        assert!(has_profanity("this movie is shit"));
        assert!(has_profanity("que filme de merda"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(has_profanity("ABSOLUTE BULLSHIT"));
    }

    #[test]
    fn test_word_boundaries_respected() {
        // Substrings inside ordinary words must not match.
        assert!(!has_profanity("the class assisted the hellenic scholar"));
        assert!(!has_profanity("shitake")); // no boundary after "shit"
    }

    #[test]
    fn test_multi_word_phrase() {
        assert!(has_profanity("seu filho da puta"));
    }
}
