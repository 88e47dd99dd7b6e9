//! Heading candidate generation.
//!
//! Two independent strategies feed one pool per page: lines set in a font
//! noticeably larger than the page average, and plain-text lines whose shape
//! matches the pattern catalog. Font candidates come first in the pool.

use crate::model::PageContent;

use super::fonts::{FontStatistics, HEADING_SIZE_RATIO};
use super::patterns::PatternCatalog;

/// Minimum heading length in characters.
pub const MIN_HEADING_CHARS: usize = 3;

/// Points above the page average that also qualify a line.
pub const SIZE_DELTA: f32 = 2.0;

/// Cap on the size-ratio part of a font candidate's confidence.
pub const MAX_SIZE_CONFIDENCE: f32 = 3.0;

/// Confidence added for bold lines and for early digits.
pub const CONFIDENCE_BONUS: f32 = 0.5;

/// Base confidence of a pattern match.
pub const PATTERN_CONFIDENCE: f32 = 1.0;

/// How many leading characters are checked for digits.
const DIGIT_WINDOW: usize = 10;

/// Which strategy produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    /// Font size/weight analysis
    Font,
    /// Text pattern matching
    Pattern,
}

/// A provisional heading.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Heading text
    pub text: String,
    /// Heuristic score; higher wins
    pub confidence: f32,
    /// Line font size (font candidates only)
    pub font_size: Option<f32>,
    /// Producing strategy
    pub source: CandidateSource,
    /// Page the candidate was found on
    pub page: u32,
}

impl Candidate {
    /// Create a font-based candidate.
    pub fn font(text: impl Into<String>, confidence: f32, font_size: f32, page: u32) -> Self {
        Self {
            text: text.into(),
            confidence,
            font_size: Some(font_size),
            source: CandidateSource::Font,
            page,
        }
    }

    /// Create a pattern-based candidate.
    pub fn pattern(text: impl Into<String>, confidence: f32, page: u32) -> Self {
        Self {
            text: text.into(),
            confidence,
            font_size: None,
            source: CandidateSource::Pattern,
            page,
        }
    }
}

/// Produces heading candidates for a page.
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    catalog: PatternCatalog,
}

impl CandidateGenerator {
    /// Create a generator over a pattern catalog.
    pub fn new(catalog: PatternCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog used for pattern matching.
    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Font candidates followed by pattern candidates.
    pub fn page_candidates(&self, page: &PageContent) -> Vec<Candidate> {
        let mut candidates = self.font_candidates(page);
        let font_count = candidates.len();
        candidates.extend(self.pattern_candidates(page));

        log::debug!(
            "Page {}: {} font candidates, {} pattern candidates",
            page.number,
            font_count,
            candidates.len() - font_count
        );
        candidates
    }

    /// Lines whose size stands out against the page average.
    pub fn font_candidates(&self, page: &PageContent) -> Vec<Candidate> {
        let invalid = page.runs().filter(|r| !r.has_valid_size()).count();
        if invalid > 0 {
            log::warn!("Page {}: skipping {} runs without a usable font size", page.number, invalid);
        }

        let stats = FontStatistics::from_runs(page.runs().filter(|r| r.has_valid_size()));
        if stats.is_empty() {
            return Vec::new();
        }
        let avg_size = stats.avg_size;

        let mut candidates = Vec::new();
        for line in page.lines() {
            let merged = line.merged();
            if merged.text.chars().count() < MIN_HEADING_CHARS {
                continue;
            }

            let size_ratio = if avg_size > 0.0 {
                merged.size / avg_size
            } else {
                1.0
            };

            if size_ratio >= HEADING_SIZE_RATIO || merged.size >= avg_size + SIZE_DELTA {
                let mut confidence = size_ratio.min(MAX_SIZE_CONFIDENCE);
                if merged.is_bold() {
                    confidence += CONFIDENCE_BONUS;
                }
                candidates.push(Candidate::font(
                    merged.text,
                    confidence,
                    merged.size,
                    page.number,
                ));
            }
        }
        candidates
    }

    /// Plain-text lines matching the pattern catalog.
    pub fn pattern_candidates(&self, page: &PageContent) -> Vec<Candidate> {
        let text = page.text();
        let mut candidates = Vec::new();

        for line in text.split('\n') {
            let line = line.trim();
            if line.chars().count() < MIN_HEADING_CHARS {
                continue;
            }

            let Some(found) = self.catalog.first_match(line) else {
                continue;
            };
            if found.text.chars().count() < MIN_HEADING_CHARS {
                continue;
            }

            let mut confidence = PATTERN_CONFIDENCE;
            if line.chars().take(DIGIT_WINDOW).any(|c| c.is_ascii_digit()) {
                confidence += CONFIDENCE_BONUS;
            }
            candidates.push(Candidate::pattern(found.text, confidence, page.number));
        }
        candidates
    }
}
