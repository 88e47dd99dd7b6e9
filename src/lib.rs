//! # docoutline
//!
//! Document outline inference for Rust.
//!
//! This library infers a title and an H1/H2/H3 heading outline from page
//! text annotated with font sizes and style flags, as produced by a PDF
//! layout extractor.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docoutline::{extract_file, render, ExtractOptions};
//!
//! fn main() -> docoutline::Result<()> {
//!     // Read a page dump and infer its outline
//!     let outline = extract_file("report.json", &ExtractOptions::default())?;
//!
//!     // Serialize it
//!     let json = render::to_json(&outline, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Font analysis**: lines set noticeably larger than the page average
//! - **Pattern matching**: numbering, capitals, list markers, and leading
//!   characters of 20 non-Latin scripts
//! - **Adaptive levels**: font sizes are mapped to H1/H2/H3 as they appear,
//!   with demotion when a larger size shows up
//! - **Batch processing**: parallel over documents with Rayon, with
//!   per-document fallback outlines

pub mod analysis;
pub mod batch;
pub mod error;
pub mod model;
pub mod reader;
pub mod render;

// Re-export commonly used types
pub use analysis::{DedupScope, ErrorMode, ExtractOptions, OutlineExtractor};
pub use batch::{extract_batch, BatchItem, BatchProcessor};
pub use error::{Error, Result};
pub use model::{
    validate_json, Document, Heading, HeadingLevel, Metadata, Outline, PageContent, TextBlock,
    TextLine, TextRun, ValidationWarning,
};
pub use reader::{DocumentReader, JsonReader, ReaderRegistry};
pub use render::JsonFormat;

use std::path::Path;

/// Infer the outline of an in-memory document with default options.
///
/// # Example
///
/// ```
/// use docoutline::{extract_outline, Document, PageContent};
///
/// let mut doc = Document::new();
/// doc.add_page(PageContent::new(2).with_plain_text("1. Introduction"));
///
/// let outline = extract_outline(&doc)?;
/// assert_eq!(outline.outline[0].text, "Introduction");
/// assert_eq!(outline.outline[0].page, 2);
/// # Ok::<(), docoutline::Error>(())
/// ```
pub fn extract_outline(document: &Document) -> Result<Outline> {
    Ok(OutlineExtractor::new()?.extract(document))
}

/// Read a document with the default readers and infer its outline.
///
/// # Example
///
/// ```no_run
/// use docoutline::{extract_file, ExtractOptions};
///
/// let options = ExtractOptions::new().per_page_dedup();
/// let outline = extract_file("report.json", &options).unwrap();
/// println!("{}: {} headings", outline.title, outline.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> Result<Outline> {
    let document = ReaderRegistry::with_defaults().read(path.as_ref())?;
    Ok(OutlineExtractor::with_options(options.clone())?.extract(&document))
}

/// Like [`extract_file`], but any failure yields an empty outline titled
/// after the file name.
pub fn extract_file_or_fallback<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> Outline {
    let path = path.as_ref();
    match extract_file(path, options) {
        Ok(outline) => outline,
        Err(e) => {
            log::warn!("Failed to process {}: {}", path.display(), e);
            Outline::fallback_for_path(path, &options.default_title)
        }
    }
}

/// Builder for reading documents and inferring outlines.
///
/// # Example
///
/// ```no_run
/// use docoutline::DocOutline;
///
/// let json = DocOutline::new()
///     .per_page_dedup()
///     .with_clean_text()
///     .extract("report.json")?
///     .to_json(docoutline::JsonFormat::Compact)?;
/// # Ok::<(), docoutline::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocOutline {
    options: ExtractOptions,
}

impl DocOutline {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deduplicate each page independently.
    pub fn per_page_dedup(mut self) -> Self {
        self.options = self.options.per_page_dedup();
        self
    }

    /// Normalize whitespace, quotes and dashes in the output.
    pub fn with_clean_text(mut self) -> Self {
        self.options = self.options.with_clean_text(true);
        self
    }

    /// Set the fallback title.
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.options = self.options.with_default_title(title);
        self
    }

    /// Add a structural heading pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.options = self.options.with_extra_pattern(pattern);
        self
    }

    /// The accumulated options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Read a file and infer its outline.
    pub fn extract<P: AsRef<Path>>(self, path: P) -> Result<DocOutlineResult> {
        let document = ReaderRegistry::with_defaults().read(path.as_ref())?;
        self.extract_document(document)
    }

    /// Infer the outline of an in-memory document.
    pub fn extract_document(self, document: Document) -> Result<DocOutlineResult> {
        let outline = OutlineExtractor::with_options(self.options)?.extract(&document);
        Ok(DocOutlineResult { document, outline })
    }
}

/// A document together with its inferred outline.
#[derive(Debug, Clone)]
pub struct DocOutlineResult {
    /// The source document
    pub document: Document,
    /// The inferred outline
    pub outline: Outline,
}

impl DocOutlineResult {
    /// Serialize the outline to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.outline, format)
    }

    /// Validation advisories for the outline.
    pub fn warnings(&self) -> Vec<ValidationWarning> {
        self.outline.validate()
    }

    /// Get the outline.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }
}
