//! Heading level assignment.
//!
//! Candidates are visited in (confidence, font size) order, highest first.
//! Explicit decimal numbering decides the level outright; otherwise the
//! candidate's font size is looked up in a [`FontSizeLevelMap`] that grows as
//! new sizes appear. A size larger than every size seen so far becomes H1
//! and pushes every other size one level down. Levels already handed out are
//! not revisited, so the outcome depends on visiting order.

use regex::Regex;
use std::cmp::Ordering;

use crate::error::Result;
use crate::model::{Heading, HeadingLevel};

use super::candidates::Candidate;
use super::fonts::DEFAULT_FONT_SIZE;

/// Per-document memo of font size to heading level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontSizeLevelMap {
    entries: Vec<(f32, HeadingLevel)>,
}

impl FontSizeLevelMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Level recorded for an exact size.
    pub fn get(&self, size: f32) -> Option<HeadingLevel> {
        self.entries
            .iter()
            .find(|(s, _)| *s == size)
            .map(|(_, level)| *level)
    }

    /// Number of distinct sizes recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no size has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest recorded size.
    pub fn largest(&self) -> Option<f32> {
        self.entries.iter().map(|(s, _)| *s).reduce(f32::max)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (f32, HeadingLevel)> + '_ {
        self.entries.iter().copied()
    }

    /// Resolve the level for a size, recording new sizes.
    pub fn level_for(&mut self, size: f32) -> HeadingLevel {
        if let Some(level) = self.get(size) {
            return level;
        }

        let Some(largest) = self.largest() else {
            self.entries.push((size, HeadingLevel::H1));
            return HeadingLevel::H1;
        };

        if size >= largest {
            for (_, level) in self.entries.iter_mut() {
                *level = level.demoted();
            }
            self.entries.push((size, HeadingLevel::H1));
            log::debug!("Font size {} promoted to H1, {} sizes demoted", size, self.entries.len() - 1);
            return HeadingLevel::H1;
        }

        let level = if self.entries.len() == 1 {
            HeadingLevel::H2
        } else {
            HeadingLevel::H3
        };
        self.entries.push((size, level));
        level
    }
}

/// Order candidates for level assignment: confidence, then font size
/// (absent sizes count as 12), both descending. Ties keep their order.
pub fn sort_for_assignment(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        let size_a = a.font_size.unwrap_or(DEFAULT_FONT_SIZE);
        let size_b = b.font_size.unwrap_or(DEFAULT_FONT_SIZE);
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
            .then(size_b.partial_cmp(&size_a).unwrap_or(Ordering::Equal))
    });
}

/// Turns ranked candidates into leveled headings.
#[derive(Debug, Clone)]
pub struct HierarchyAssigner {
    three_level: Regex,
    two_level: Regex,
    one_level: Regex,
}

impl HierarchyAssigner {
    /// Compile the numbering patterns.
    pub fn new() -> Result<Self> {
        Ok(Self {
            three_level: Regex::new(r"^\d+\.\d+\.\d+\s")?,
            two_level: Regex::new(r"^\d+\.\d+\s")?,
            one_level: Regex::new(r"^\d+\.\s")?,
        })
    }

    /// Level implied by a decimal numbering prefix, if any.
    pub fn numbering_level(&self, text: &str) -> Option<HeadingLevel> {
        if self.three_level.is_match(text) {
            Some(HeadingLevel::H3)
        } else if self.two_level.is_match(text) {
            Some(HeadingLevel::H2)
        } else if self.one_level.is_match(text) {
            Some(HeadingLevel::H1)
        } else {
            None
        }
    }

    /// Level for one candidate, consulting and updating `levels` only when
    /// the text carries no numbering.
    pub fn level_of(&self, candidate: &Candidate, levels: &mut FontSizeLevelMap) -> HeadingLevel {
        self.numbering_level(&candidate.text).unwrap_or_else(|| {
            levels.level_for(candidate.font_size.unwrap_or(DEFAULT_FONT_SIZE))
        })
    }

    /// Assign levels and return headings sorted by page.
    ///
    /// Headings on the same page keep the assignment order.
    pub fn assign(&self, mut candidates: Vec<Candidate>, levels: &mut FontSizeLevelMap) -> Vec<Heading> {
        sort_for_assignment(&mut candidates);

        let mut headings: Vec<Heading> = candidates
            .into_iter()
            .map(|candidate| {
                let level = self.level_of(&candidate, levels);
                Heading::new(level, candidate.text, candidate.page)
            })
            .collect();

        headings.sort_by_key(|h| h.page);
        headings
    }
}
