//! Document title selection.
//!
//! Attempts run in order and the first success wins: the metadata title,
//! then the best-scoring run on the first page, then a fixed default.

use std::collections::HashSet;

use crate::model::{Document, Metadata, PageContent, TextRun};

/// Substrings that disqualify a first-page run from being the title.
const TITLE_BLACKLIST: &[&str] = &["page", "abstract", "introduction", "contents", "index"];

/// Function words counted by the title score penalty.
const TITLE_COMMON_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Shortest first-page run considered.
const MIN_TITLE_RUN_CHARS: usize = 5;

/// Metadata titles must be longer than this.
const MIN_METADATA_TITLE_CHARS: usize = 3;

/// Where a selected title came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    /// Document metadata
    Metadata,
    /// Scored run on the first page
    FirstPage,
    /// Configured default
    Default,
}

/// Picks a document title.
#[derive(Debug, Clone)]
pub struct TitleSelector {
    default_title: String,
}

impl TitleSelector {
    /// Create a selector falling back to `default_title`.
    pub fn new(default_title: impl Into<String>) -> Self {
        Self {
            default_title: default_title.into(),
        }
    }

    /// The fallback title.
    pub fn default_title(&self) -> &str {
        &self.default_title
    }

    /// Select the title for a document.
    pub fn select(&self, document: &Document) -> String {
        self.select_with_source(document).0
    }

    /// Select the title and report which attempt produced it.
    pub fn select_with_source(&self, document: &Document) -> (String, TitleSource) {
        metadata_title(&document.metadata)
            .map(|title| (title, TitleSource::Metadata))
            .or_else(|| {
                document
                    .pages
                    .first()
                    .and_then(first_page_title)
                    .map(|title| (title, TitleSource::FirstPage))
            })
            .unwrap_or_else(|| (self.default_title.clone(), TitleSource::Default))
    }
}

/// Trimmed metadata title, if long enough.
pub fn metadata_title(metadata: &Metadata) -> Option<String> {
    let title = metadata.title.as_deref()?.trim();
    if title.chars().count() > MIN_METADATA_TITLE_CHARS {
        Some(title.to_string())
    } else {
        None
    }
}

/// Highest-scoring eligible run on a page. Earlier runs win ties.
pub fn first_page_title(page: &PageContent) -> Option<String> {
    let mut best: Option<(&str, f32)> = None;

    for run in page.runs() {
        let text = run.text.trim();
        if text.chars().count() < MIN_TITLE_RUN_CHARS {
            continue;
        }
        let lowered = text.to_lowercase();
        if TITLE_BLACKLIST.iter().any(|word| lowered.contains(word)) {
            continue;
        }

        let score = title_score(text, run);
        if score <= 0.0 {
            continue;
        }
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((text, score));
        }
    }

    best.map(|(text, _)| text.to_string())
}

/// Likelihood that a run is the document title.
pub fn title_score(text: &str, run: &TextRun) -> f32 {
    let mut score = 0.0;

    if run.size > 16.0 {
        score += 3.0;
    } else if run.size > 12.0 {
        score += 2.0;
    } else if run.size > 10.0 {
        score += 1.0;
    }

    if run.is_bold() {
        score += 2.0;
    }

    let word_count = text.split_whitespace().count();
    if (3..=10).contains(&word_count) {
        score += 1.0;
    } else if word_count > 15 {
        score -= 1.0;
    }

    if is_all_upper(text) {
        score += 1.0;
    } else if is_titlecased(text) {
        score += 0.5;
    }

    let lowered = text.to_lowercase();
    let words: HashSet<&str> = lowered.split_whitespace().collect();
    let common = words
        .iter()
        .filter(|w| TITLE_COMMON_WORDS.contains(w))
        .count();
    if common as f32 > words.len() as f32 * 0.5 {
        score -= 0.5;
    }

    score
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

/// At least one cased character and no lowercase ones.
fn is_all_upper(text: &str) -> bool {
    text.chars().any(is_cased) && !text.chars().any(char::is_lowercase)
}

/// Every cased run starts with one uppercase letter followed by lowercase.
fn is_titlecased(text: &str) -> bool {
    let mut prev_cased = false;
    let mut seen_cased = false;

    for c in text.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            seen_cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            seen_cased = true;
        } else {
            prev_cased = false;
        }
    }
    seen_cased
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(runs: Vec<TextRun>) -> PageContent {
        let mut page = PageContent::new(1);
        for run in runs {
            page.add_line(vec![run]);
        }
        page
    }

    #[test]
    fn test_metadata_title_wins() {
        let mut doc = Document::new();
        doc.metadata = Metadata::with_title("  Annual Report 2024 ");
        doc.add_page(page_of(vec![TextRun::bold("SOMETHING ELSE ENTIRELY", 30.0)]));

        let selector = TitleSelector::new("Document Title");
        let (title, source) = selector.select_with_source(&doc);
        assert_eq!(title, "Annual Report 2024");
        assert_eq!(source, TitleSource::Metadata);
    }

    #[test]
    fn test_short_metadata_title_ignored() {
        assert_eq!(metadata_title(&Metadata::with_title(" abc ")), None);
        assert_eq!(metadata_title(&Metadata::with_title("abcd")), Some("abcd".to_string()));
        assert_eq!(metadata_title(&Metadata::default()), None);
    }

    #[test]
    fn test_first_page_scoring() {
        let page = page_of(vec![
            TextRun::new("small body text here", 9.0),
            TextRun::bold("Quarterly Results Overview", 20.0),
            TextRun::new("A Larger But Plain Line", 20.0),
        ]);
        assert_eq!(
            first_page_title(&page),
            Some("Quarterly Results Overview".to_string())
        );
    }

    #[test]
    fn test_blacklist_and_short_runs() {
        let page = page_of(vec![
            TextRun::bold("Table of Contents", 24.0),
            TextRun::bold("Page 1", 24.0),
            TextRun::bold("Tiny", 24.0),
        ]);
        assert_eq!(first_page_title(&page), None);
    }

    #[test]
    fn test_ties_keep_first() {
        let page = page_of(vec![
            TextRun::new("First Candidate Line", 14.0),
            TextRun::new("Second Candidate Line", 14.0),
        ]);
        assert_eq!(first_page_title(&page), Some("First Candidate Line".to_string()));
    }

    #[test]
    fn test_non_positive_score_rejected() {
        // No size, bold, length or case bonus; stop-word penalty applies
        let page = page_of(vec![TextRun::new("of the", 8.0)]);
        assert_eq!(first_page_title(&page), None);
    }

    #[test]
    fn test_title_score_components() {
        let run = TextRun::bold("THE GRAND PLAN", 18.0);
        // 3 size + 2 bold + 1 length + 1 upper
        assert_eq!(title_score("THE GRAND PLAN", &run), 7.0);

        let run = TextRun::new("of the and a", 11.0);
        // 1 size + 1 length - 0.5 common words
        assert_eq!(title_score("of the and a", &run), 1.5);
    }

    #[test]
    fn test_case_predicates() {
        assert!(is_all_upper("ABC 123"));
        assert!(!is_all_upper("123"));
        assert!(!is_all_upper("ABc"));

        assert!(is_titlecased("Hello World"));
        assert!(is_titlecased("Hello 2World"));
        assert!(!is_titlecased("Hello world"));
        assert!(!is_titlecased("HEllo"));
        assert!(!is_titlecased("123"));
    }

    #[test]
    fn test_default_title() {
        let selector = TitleSelector::new("Document Title");
        let (title, source) = selector.select_with_source(&Document::new());
        assert_eq!(title, "Document Title");
        assert_eq!(source, TitleSource::Default);
    }
}
