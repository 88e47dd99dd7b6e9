//! Outline inference engine.
//!
//! [`OutlineExtractor`] drives the pipeline: per-page candidate generation,
//! deduplication, level assignment, and title selection.
//!
//! # Example
//!
//! ```
//! use docoutline::analysis::OutlineExtractor;
//! use docoutline::model::{Document, PageContent, TextRun};
//!
//! let mut page = PageContent::new(1);
//! page.add_line(vec![TextRun::bold("Quarterly Review", 24.0)]);
//! page.add_line(vec![TextRun::new("Revenue grew in every region.", 10.0)]);
//!
//! let mut doc = Document::new();
//! doc.add_page(page);
//!
//! let outline = OutlineExtractor::new()?.extract(&doc);
//! assert_eq!(outline.title, "Quarterly Review");
//! # Ok::<(), docoutline::Error>(())
//! ```

mod candidates;
mod dedup;
mod fonts;
mod hierarchy;
mod normalize;
mod options;
mod patterns;
mod title;

pub use candidates::{
    Candidate, CandidateGenerator, CandidateSource, CONFIDENCE_BONUS, MAX_SIZE_CONFIDENCE,
    MIN_HEADING_CHARS, PATTERN_CONFIDENCE, SIZE_DELTA,
};
pub use dedup::{deduplicate, rank_by_confidence, MAX_HEADING_CHARS};
pub use fonts::{
    font_hierarchy, is_heading_font, FontStatistics, DEFAULT_FONT_SIZE, HEADING_SIZE_RATIO,
};
pub use hierarchy::{sort_for_assignment, FontSizeLevelMap, HierarchyAssigner};
pub use normalize::{is_stop_word, TextNormalizer, STOP_WORDS};
pub use options::{DedupScope, ErrorMode, ExtractOptions, DEFAULT_TITLE};
pub use patterns::{HeadingPattern, PatternCatalog, PatternCategory, PatternMatch};
pub use title::{first_page_title, metadata_title, title_score, TitleSelector, TitleSource};

use std::borrow::Cow;

use crate::error::Result;
use crate::model::{Document, Heading, Outline};

/// Infers a title and heading outline from a document.
#[derive(Debug, Clone)]
pub struct OutlineExtractor {
    options: ExtractOptions,
    generator: CandidateGenerator,
    hierarchy: HierarchyAssigner,
    normalizer: TextNormalizer,
    title_selector: TitleSelector,
}

impl OutlineExtractor {
    /// Create an extractor with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(ExtractOptions::default())
    }

    /// Create an extractor with custom options.
    ///
    /// Fails if one of `options.extra_patterns` does not compile.
    pub fn with_options(options: ExtractOptions) -> Result<Self> {
        let catalog = PatternCatalog::with_extra(&options.extra_patterns)?;
        Ok(Self {
            generator: CandidateGenerator::new(catalog),
            hierarchy: HierarchyAssigner::new()?,
            normalizer: TextNormalizer::new()?,
            title_selector: TitleSelector::new(options.default_title.clone()),
            options,
        })
    }

    /// The options this extractor was built with.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// The text normalizer used for output cleaning.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Extract the full outline.
    pub fn extract(&self, document: &Document) -> Outline {
        let document = numbered(document);

        let title = self.extract_title(&document);
        let headings = self.extract_headings(&document);

        log::info!("Extracted {} headings", headings.len());
        Outline::new(title, headings)
    }

    /// Select the document title.
    pub fn extract_title(&self, document: &Document) -> String {
        let (title, source) = self.title_selector.select_with_source(document);
        match source {
            TitleSource::Metadata => log::info!("Title taken from metadata: {}", title),
            TitleSource::FirstPage => log::info!("Title taken from first page: {}", title),
            TitleSource::Default => log::info!("No title found, using default"),
        }

        if self.options.clean_text {
            let cleaned = self.normalizer.clean_text(&title);
            if !cleaned.is_empty() {
                return cleaned;
            }
        }
        title
    }

    /// Extract leveled headings sorted by page.
    pub fn extract_headings(&self, document: &Document) -> Vec<Heading> {
        let document = numbered(document);

        let unique: Vec<Candidate> = match self.options.dedup_scope {
            DedupScope::Document => {
                let pool: Vec<Candidate> = document
                    .pages
                    .iter()
                    .flat_map(|page| self.generator.page_candidates(page))
                    .collect();
                deduplicate(pool)
            }
            DedupScope::Page => document
                .pages
                .iter()
                .flat_map(|page| deduplicate(self.generator.page_candidates(page)))
                .collect(),
        };

        let mut levels = FontSizeLevelMap::new();
        let mut headings = self.hierarchy.assign(unique, &mut levels);
        log::debug!("Font size levels: {:?}", levels.iter().collect::<Vec<_>>());

        if self.options.clean_text {
            for heading in headings.iter_mut() {
                heading.text = self.normalizer.clean_text(&heading.text);
            }
            headings.retain(|h| !h.text.is_empty());
        }
        headings
    }
}

/// Borrow the document as-is, or a copy with positional page numbers when
/// some page arrived unnumbered.
fn numbered(document: &Document) -> Cow<'_, Document> {
    if document.pages.iter().all(|p| p.number > 0) {
        Cow::Borrowed(document)
    } else {
        let mut owned = document.clone();
        owned.number_pages();
        Cow::Owned(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingLevel, Metadata, PageContent, TextRun};

    fn body(page: &mut PageContent, count: usize) {
        for _ in 0..count {
            page.add_line(vec![TextRun::new("ordinary body text line", 10.0)]);
        }
    }

    #[test]
    fn test_empty_document() {
        let outline = OutlineExtractor::new().unwrap().extract(&Document::new());
        assert_eq!(outline.title, DEFAULT_TITLE);
        assert!(outline.is_empty());
    }

    #[test]
    fn test_custom_default_title() {
        let extractor =
            OutlineExtractor::with_options(ExtractOptions::new().with_default_title("Untitled"))
                .unwrap();
        assert_eq!(extractor.extract(&Document::new()).title, "Untitled");
    }

    #[test]
    fn test_invalid_extra_pattern() {
        let options = ExtractOptions::new().with_extra_pattern("([");
        assert!(OutlineExtractor::with_options(options).is_err());
    }

    #[test]
    fn test_unnumbered_pages_get_positions() {
        let mut doc = Document::new();
        doc.pages.push(PageContent::new(0).with_plain_text("body"));
        doc.pages.push(PageContent::new(0).with_plain_text("1. Scope"));

        let outline = OutlineExtractor::new().unwrap().extract(&doc);
        assert_eq!(outline.outline, vec![Heading::new(HeadingLevel::H1, "Scope", 2)]);
    }

    #[test]
    fn test_dedup_scope() {
        let mut doc = Document::new();
        doc.add_page(PageContent::new(1).with_plain_text("SUMMARY"));
        doc.add_page(PageContent::new(2).with_plain_text("SUMMARY"));

        let global = OutlineExtractor::new().unwrap().extract(&doc);
        assert_eq!(global.len(), 1);
        assert_eq!(global.outline[0].page, 1);

        let per_page =
            OutlineExtractor::with_options(ExtractOptions::new().per_page_dedup()).unwrap();
        assert_eq!(per_page.extract(&doc).len(), 2);
    }

    #[test]
    fn test_clean_text_option() {
        let mut doc = Document::new();
        doc.metadata = Metadata::with_title("The \u{201C}Plan\u{201D}");
        doc.add_page(PageContent::new(1).with_plain_text("1. Goals \u{2013} 2025"));

        let plain = OutlineExtractor::new().unwrap().extract(&doc);
        assert_eq!(plain.outline[0].text, "Goals \u{2013} 2025");

        let cleaned = OutlineExtractor::with_options(ExtractOptions::new().with_clean_text(true))
            .unwrap()
            .extract(&doc);
        assert_eq!(cleaned.title, "The \"Plan\"");
        assert_eq!(cleaned.outline[0].text, "Goals - 2025");
    }

    #[test]
    fn test_font_headings_on_page() {
        let mut page = PageContent::new(1);
        page.add_line(vec![TextRun::new("Background", 18.0)]);
        body(&mut page, 8);
        let mut doc = Document::new();
        doc.add_page(page.with_plain_text("Background\nordinary body text line"));

        let outline = OutlineExtractor::new().unwrap().extract(&doc);
        assert_eq!(outline.len(), 1);
        assert_eq!(outline.outline[0], Heading::new(HeadingLevel::H1, "Background", 1));
    }
}
