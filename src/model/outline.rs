//! Outline output types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Inferred heading depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading
    H1,
    /// Second-level heading
    H2,
    /// Third-level heading
    H3,
}

impl HeadingLevel {
    /// One step deeper; H3 stays H3.
    pub fn demoted(self) -> Self {
        match self {
            HeadingLevel::H1 => HeadingLevel::H2,
            HeadingLevel::H2 | HeadingLevel::H3 => HeadingLevel::H3,
        }
    }

    /// Numeric depth (1..=3).
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// The serialized label.
    pub fn as_str(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        }
    }

    /// Parse a serialized label.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "H1" => Some(HeadingLevel::H1),
            "H2" => Some(HeadingLevel::H2),
            "H3" => Some(HeadingLevel::H3),
            _ => None,
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A leveled heading tied to a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level
    pub level: HeadingLevel,
    /// Heading text
    pub text: String,
    /// Page number (1-indexed)
    pub page: u32,
}

impl Heading {
    /// Create a new heading.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// Document title plus headings in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    /// Document title
    pub title: String,
    /// Headings sorted ascending by page
    pub outline: Vec<Heading>,
}

impl Outline {
    /// Create an outline.
    pub fn new(title: impl Into<String>, outline: Vec<Heading>) -> Self {
        Self {
            title: title.into(),
            outline,
        }
    }

    /// An outline with a title and no headings.
    pub fn title_only(title: impl Into<String>) -> Self {
        Self::new(title, Vec::new())
    }

    /// Substitute outline for a document that could not be read.
    ///
    /// The title is the file stem with underscores turned into spaces and
    /// every word title-cased; `default_title` is used when no stem remains.
    pub fn fallback_for_path(path: &Path, default_title: &str) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().replace('_', " "))
            .unwrap_or_default();
        let title = title_case(&stem);
        if title.trim().is_empty() {
            Self::title_only(default_title)
        } else {
            Self::title_only(title)
        }
    }

    /// Number of headings.
    pub fn len(&self) -> usize {
        self.outline.len()
    }

    /// Check if there are no headings.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    /// Count headings at a level.
    pub fn count_level(&self, level: HeadingLevel) -> usize {
        self.outline.iter().filter(|h| h.level == level).count()
    }
}

/// Upper-case the first cased letter of every word, lower-case the rest.
///
/// A "word" restarts after any character that has no case, so `"2nd_draft"`
/// becomes `"2Nd Draft"` once underscores are spaces.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;
    for c in text.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }
    out
}
