//! Heading pattern catalog.
//!
//! Patterns are kept in a fixed order: structural shapes first (numbering,
//! capitals, markers), then one leading-character matcher per script so
//! that non-Latin lines are not dropped by the Latin-only shapes. The first
//! pattern that matches a line decides its heading text.

use regex::Regex;

use crate::error::Result;

/// Pattern family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternCategory {
    /// Numbering, capitals and list markers
    Structural,
    /// Leading characters of a non-Latin script
    Script,
}

/// Built-in structural patterns, in match order.
const STRUCTURAL_PATTERNS: &[(&str, &str)] = &[
    ("numbered", r"^\d+\.\s+(.+)$"),
    ("numbered-2", r"^\d+\.\d+\s+(.+)$"),
    ("numbered-3", r"^\d+\.\d+\.\d+\s+(.+)$"),
    ("all-caps", r"^[A-Z][A-Z\s]+$"),
    ("roman", r"^[IVX]+\.\s+(.+)$"),
    ("letter", r"^[A-Z]\.\s+(.+)$"),
    ("paren-letter", r"^\([a-z]\)\s+(.+)$"),
    ("bullet", r"^•\s+(.+)$"),
    ("dash", r"^-\s+(.+)$"),
];

/// Built-in script patterns, in match order.
const SCRIPT_PATTERNS: &[(&str, &str)] = &[
    ("cjk", r"^[\x{4E00}-\x{9FFF}]+"),
    ("hiragana", r"^[\x{3040}-\x{309F}]+"),
    ("katakana", r"^[\x{30A0}-\x{30FF}]+"),
    ("hebrew", r"^[\x{0590}-\x{05FF}]+"),
    ("arabic", r"^[\x{0600}-\x{06FF}]+"),
    ("devanagari", r"^[\x{0900}-\x{097F}]+"),
    ("bengali", r"^[\x{0980}-\x{09FF}]+"),
    ("gurmukhi", r"^[\x{0A00}-\x{0A7F}]+"),
    ("gujarati", r"^[\x{0A80}-\x{0AFF}]+"),
    ("oriya", r"^[\x{0B00}-\x{0B7F}]+"),
    ("tamil", r"^[\x{0B80}-\x{0BFF}]+"),
    ("telugu", r"^[\x{0C00}-\x{0C7F}]+"),
    ("kannada", r"^[\x{0C80}-\x{0CFF}]+"),
    ("malayalam", r"^[\x{0D00}-\x{0D7F}]+"),
    ("thai", r"^[\x{0E00}-\x{0E7F}]+"),
    ("lao", r"^[\x{0E80}-\x{0EFF}]+"),
    ("hangul-jamo", r"^[\x{1100}-\x{11FF}]+"),
    ("hangul", r"^[\x{AC00}-\x{D7AF}]+"),
    ("cyrillic", r"^[\x{0400}-\x{04FF}]+"),
    ("greek", r"^[\x{0370}-\x{03FF}]+"),
];

/// A compiled matcher plus how to pull heading text out of a match.
#[derive(Debug, Clone)]
pub struct HeadingPattern {
    /// Short identifier
    pub name: String,
    /// Pattern family
    pub category: PatternCategory,
    regex: Regex,
}

impl HeadingPattern {
    /// Compile a pattern.
    pub fn new(name: impl Into<String>, category: PatternCategory, pattern: &str) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            category,
            regex: Regex::new(pattern)?,
        })
    }

    /// The source regex.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Heading text for a matching line: the first group trimmed, or the
    /// whole line when the pattern has no group.
    pub fn extract(&self, line: &str) -> Option<String> {
        let caps = self.regex.captures(line)?;
        let text = match caps.get(1) {
            Some(group) => group.as_str().trim(),
            None => line.trim(),
        };
        Some(text.to_string())
    }
}

/// Result of running the catalog over a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch<'a> {
    /// Name of the pattern that matched
    pub pattern: &'a str,
    /// Family of the pattern that matched
    pub category: PatternCategory,
    /// Extracted heading text
    pub text: String,
}

/// Ordered set of heading patterns.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: Vec<HeadingPattern>,
}

impl PatternCatalog {
    /// Compile the built-in catalog.
    pub fn new() -> Result<Self> {
        Self::with_extra::<&str>(&[])
    }

    /// Compile the built-in catalog with extra structural patterns inserted
    /// after the built-in structural ones.
    pub fn with_extra<S: AsRef<str>>(extra: &[S]) -> Result<Self> {
        let mut patterns =
            Vec::with_capacity(STRUCTURAL_PATTERNS.len() + extra.len() + SCRIPT_PATTERNS.len());

        for (name, pattern) in STRUCTURAL_PATTERNS {
            patterns.push(HeadingPattern::new(*name, PatternCategory::Structural, pattern)?);
        }
        for (i, pattern) in extra.iter().enumerate() {
            patterns.push(HeadingPattern::new(
                format!("custom-{}", i + 1),
                PatternCategory::Structural,
                pattern.as_ref(),
            )?);
        }
        for (name, pattern) in SCRIPT_PATTERNS {
            patterns.push(HeadingPattern::new(*name, PatternCategory::Script, pattern)?);
        }

        Ok(Self { patterns })
    }

    /// Patterns in match order.
    pub fn patterns(&self) -> &[HeadingPattern] {
        &self.patterns
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// First pattern that matches the line, with its extracted text.
    pub fn first_match(&self, line: &str) -> Option<PatternMatch<'_>> {
        self.patterns.iter().find_map(|p| {
            p.extract(line).map(|text| PatternMatch {
                pattern: p.name.as_str(),
                category: p.category,
                text,
            })
        })
    }
}
