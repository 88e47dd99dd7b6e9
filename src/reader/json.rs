//! Reader for JSON page dumps.
//!
//! A page dump is what an upstream layout extractor writes after it has
//! materialized a document: `metadata` plus a `pages` array of blocks, lines
//! and runs. Pages without a number are numbered by position.

use crate::error::{Error, Result};
use crate::model::{Document, Metadata, PageContent};
use serde_json::Value;

use super::DocumentReader;

/// Reads JSON page dumps.
#[derive(Debug, Clone, Default)]
pub struct JsonReader {
    _private: (),
}

impl JsonReader {
    /// Create a new JSON reader.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Parse a dump from a string.
    pub fn parse_str(&self, text: &str) -> Result<Document> {
        let value: Value = serde_json::from_str(text)?;
        self.parse_value(value)
    }

    /// Build a document from an already-parsed dump.
    ///
    /// Only a missing or non-array `pages` fails the whole dump. A page that
    /// does not deserialize becomes an empty page, and unusable metadata
    /// becomes empty metadata, so the rest of the document still counts.
    pub fn parse_value(&self, mut value: Value) -> Result<Document> {
        let pages = match value.get_mut("pages").map(Value::take) {
            Some(Value::Array(pages)) => pages,
            Some(_) => return Err(Error::InvalidInput("`pages` must be an array".into())),
            None => return Err(Error::InvalidInput("missing `pages` array".into())),
        };

        let mut document = Document::new();
        if let Some(metadata) = value.get_mut("metadata").map(Value::take) {
            if !metadata.is_null() {
                document.metadata = serde_json::from_value(metadata).unwrap_or_else(|e| {
                    log::warn!("Ignoring unreadable metadata: {}", e);
                    Metadata::default()
                });
            }
        }

        document.pages = pages
            .into_iter()
            .enumerate()
            .map(|(index, page)| {
                serde_json::from_value::<PageContent>(page).unwrap_or_else(|e| {
                    log::warn!("Page {} is malformed, treating it as empty: {}", index + 1, e);
                    PageContent::default()
                })
            })
            .collect();
        document.number_pages();

        let empty = document.pages.iter().filter(|p| p.is_empty()).count();
        if empty > 0 {
            log::warn!("{} of {} pages carry no text runs", empty, document.pages.len());
        }
        Ok(document)
    }
}

impl DocumentReader for JsonReader {
    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn name(&self) -> &str {
        "json"
    }

    fn read_bytes(&self, bytes: &[u8]) -> Result<Document> {
        let value: Value = serde_json::from_slice(bytes)?;
        self.parse_value(value)
    }
}
