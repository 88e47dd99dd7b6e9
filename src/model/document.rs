//! Document-level input types.

use super::PageContent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document as supplied by the reader: metadata plus ordered pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, author, etc.)
    #[serde(default)]
    pub metadata: Metadata,

    /// Pages in the document
    pub pages: Vec<PageContent>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&PageContent> {
        if page_num == 0 {
            return None;
        }
        self.pages.iter().find(|p| p.number == page_num)
    }

    /// Add a page to the document, numbering it if needed.
    pub fn add_page(&mut self, mut page: PageContent) {
        if page.number == 0 {
            page.number = self.pages.len() as u32 + 1;
        }
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Assign positional numbers to pages that arrived without one.
    pub fn number_pages(&mut self) {
        for (i, page) in self.pages.iter_mut().enumerate() {
            if page.number == 0 {
                page.number = i as u32 + 1;
            }
        }
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    #[serde(default)]
    pub title: Option<String>,

    /// Document author
    #[serde(default)]
    pub author: Option<String>,

    /// Document subject
    #[serde(default)]
    pub subject: Option<String>,

    /// Creator application
    #[serde(default)]
    pub creator: Option<String>,

    /// Producer application
    #[serde(default)]
    pub producer: Option<String>,

    /// Creation date
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create metadata carrying only a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}
