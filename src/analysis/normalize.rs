//! Text normalization and heading heuristics over plain strings.

use regex::Regex;
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;

/// Common English function words.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "from", "about",
    "into", "through", "during", "before", "after", "above", "below", "up", "down", "out", "off",
    "over", "under", "again", "further", "then", "once",
];

/// Check membership in [`STOP_WORDS`].
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Cleans text runs and answers heading-shape questions about them.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    whitespace_regex: Regex,
    heading_regexes: Vec<Regex>,
    decimal_numbering_regex: Regex,
    letter_numbering_regex: Regex,
    roman_numbering_regex: Regex,
    sentence_split_regex: Regex,
    keyword_regex: Regex,
}

impl TextNormalizer {
    /// Compile the normalizer's patterns.
    pub fn new() -> Result<Self> {
        Ok(Self {
            whitespace_regex: Regex::new(r"\s+")?,
            heading_regexes: vec![
                Regex::new(r"^\d+\.")?,
                Regex::new(r"^[A-Z][A-Z\s]*$")?,
                Regex::new(r"^[A-Z][a-z]+(\s[A-Z][a-z]+)*$")?,
                Regex::new(r"^(Chapter|Section|Part)\s+\d+")?,
            ],
            decimal_numbering_regex: Regex::new(r"^(\d+(?:\.\d+)*)\.\s*(.+)$")?,
            letter_numbering_regex: Regex::new(r"^([A-Z])\.\s*(.+)$")?,
            roman_numbering_regex: Regex::new(r"^([IVX]+)\.\s*(.+)$")?,
            sentence_split_regex: Regex::new(r"[.!?]+")?,
            keyword_regex: Regex::new(r"\b[a-zA-Z]{3,}\b")?,
        })
    }

    /// Collapse whitespace, drop control characters, straighten quotes and
    /// dashes.
    pub fn clean_text(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let composed: String = text.trim().nfc().collect();
        let collapsed = self.whitespace_regex.replace_all(&composed, " ");

        collapsed
            .chars()
            .filter(|&c| !is_control(c))
            .map(|c| match c {
                '\u{201C}' | '\u{201D}' => '"',
                '\u{2018}' | '\u{2019}' => '\'',
                '\u{2013}' | '\u{2014}' => '-',
                other => other,
            })
            .collect()
    }

    /// Shape test for a standalone line of text.
    pub fn is_likely_heading(&self, text: &str) -> bool {
        let text = text.trim();
        if text.chars().count() < 3 {
            return false;
        }

        if self.heading_regexes.iter().any(|re| re.is_match(text)) {
            return true;
        }

        let words: Vec<&str> = text.split_whitespace().collect();
        if !(2..=12).contains(&words.len()) {
            return false;
        }

        if text.ends_with(['.', '!', '?']) {
            return false;
        }

        let content_words = words
            .iter()
            .filter(|w| !is_stop_word(&w.to_lowercase()))
            .count();
        content_words as f32 >= words.len() as f32 * 0.5
    }

    /// Split a numbering prefix off heading text.
    ///
    /// Returns the inferred depth (number of decimal components, 2 for a
    /// capital letter, 1 for a Roman numeral) and the remaining text.
    pub fn extract_numbering(&self, text: &str) -> (Option<usize>, String) {
        if let Some(caps) = self.decimal_numbering_regex.captures(text) {
            let level = caps[1].split('.').count();
            return (Some(level), caps[2].to_string());
        }

        if let Some(caps) = self.letter_numbering_regex.captures(text) {
            return (Some(2), caps[2].to_string());
        }

        if let Some(caps) = self.roman_numbering_regex.captures(text) {
            return (Some(1), caps[2].to_string());
        }

        (None, text.to_string())
    }

    /// Rough reading complexity: longer words and sentences score higher.
    pub fn text_complexity(&self, text: &str) -> f32 {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return 0.0;
        }

        let avg_word_length =
            words.iter().map(|w| w.chars().count()).sum::<usize>() as f32 / words.len() as f32;
        let sentences = self.sentence_split_regex.split(text).count().max(1);
        let words_per_sentence = words.len() as f32 / sentences as f32;

        avg_word_length * 0.5 + words_per_sentence * 0.3
    }

    /// Split on sentence punctuation, keeping pieces longer than 3 chars.
    pub fn split_into_sentences(&self, text: &str) -> Vec<String> {
        self.sentence_split_regex
            .split(text)
            .map(str::trim)
            .filter(|s| s.chars().count() > 3)
            .map(str::to_string)
            .collect()
    }

    /// Most frequent non-stop-words of three or more ASCII letters.
    pub fn extract_keywords(&self, text: &str, top_k: usize) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();

        for m in self.keyword_regex.find_iter(&lowered) {
            let word = m.as_str();
            if is_stop_word(word) {
                continue;
            }
            let count = counts.entry(word).or_insert(0);
            if *count == 0 {
                order.push(word);
            }
            *count += 1;
        }

        // Stable sort keeps first-occurrence order among equal counts
        order.sort_by(|a, b| counts[b].cmp(&counts[a]));
        order.into_iter().take(top_k).map(str::to_string).collect()
    }
}

fn is_control(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::new().unwrap()
    }

    #[test]
    fn test_clean_text() {
        let n = normalizer();
        assert_eq!(n.clean_text(""), "");
        assert_eq!(n.clean_text("  Hello \t\n  world  "), "Hello world");
        assert_eq!(n.clean_text("a\u{0007}b"), "ab");
        assert_eq!(
            n.clean_text("\u{201C}Quoted\u{201D} \u{2018}it\u{2019}s\u{2019} 1\u{2013}2\u{2014}3"),
            "\"Quoted\" 'it's' 1-2-3"
        );
    }

    #[test]
    fn test_is_likely_heading() {
        let n = normalizer();
        assert!(n.is_likely_heading("3. Methods"));
        assert!(n.is_likely_heading("RESULTS"));
        assert!(n.is_likely_heading("Related Work"));
        assert!(n.is_likely_heading("Chapter 4 overview"));
        assert!(n.is_likely_heading("Design of the parser"));

        assert!(!n.is_likely_heading("ab"));
        assert!(!n.is_likely_heading("This is a sentence."));
        assert!(!n.is_likely_heading("word"));
        assert!(!n.is_likely_heading("in the of and"));
    }

    #[test]
    fn test_extract_numbering() {
        let n = normalizer();
        assert_eq!(
            n.extract_numbering("1.2.3. Deep Section"),
            (Some(3), "Deep Section".to_string())
        );
        assert_eq!(n.extract_numbering("4. Scope"), (Some(1), "Scope".to_string()));
        assert_eq!(n.extract_numbering("B. Annex"), (Some(2), "Annex".to_string()));
        assert_eq!(n.extract_numbering("IV. Part Four"), (Some(1), "Part Four".to_string()));
        // A single capital is read as a letter marker before a numeral
        assert_eq!(n.extract_numbering("I. First"), (Some(2), "First".to_string()));
        assert_eq!(n.extract_numbering("Plain"), (None, "Plain".to_string()));
    }

    #[test]
    fn test_text_complexity() {
        let n = normalizer();
        assert_eq!(n.text_complexity(""), 0.0);
        // Word lengths 4,5,4,5; the split leaves three pieces
        let score = n.text_complexity("abcd abcd. abcd abcd.");
        assert!((score - (4.5 * 0.5 + 4.0 / 3.0 * 0.3)).abs() < 1e-4);
    }

    #[test]
    fn test_split_into_sentences() {
        let n = normalizer();
        assert_eq!(
            n.split_into_sentences("First one. Ok! Third sentence here?"),
            vec!["First one", "Third sentence here"]
        );
        assert!(n.split_into_sentences("").is_empty());
    }

    #[test]
    fn test_extract_keywords() {
        let n = normalizer();
        let keywords = n.extract_keywords("Parser parser tokens and the grammar, tokens PARSER", 2);
        assert_eq!(keywords, vec!["parser", "tokens"]);
        assert!(n.extract_keywords("", 5).is_empty());
    }
}
