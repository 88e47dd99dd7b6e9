//! Document model types.
//!
//! Input types describe what the document reader hands over (metadata and
//! per-page runs); output types describe the inferred outline.

mod document;
mod outline;
mod page;
mod validate;

pub use document::{Document, Metadata};
pub use outline::{title_case, Heading, HeadingLevel, Outline};
pub use page::{MergedLine, PageContent, TextBlock, TextLine, TextRun, FLAG_BOLD};
pub use validate::{validate_json, ValidationWarning};
