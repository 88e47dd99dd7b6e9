//! Document readers.
//!
//! A reader turns a file into a [`Document`]: metadata plus per-page runs
//! with font size and style flags. Readers are registered by file extension
//! and dispatched through a [`ReaderRegistry`].
//!
//! # Example
//!
//! ```no_run
//! use docoutline::reader::ReaderRegistry;
//! use std::path::Path;
//!
//! fn main() -> docoutline::Result<()> {
//!     let registry = ReaderRegistry::with_defaults();
//!     let doc = registry.read(Path::new("report.json"))?;
//!     println!("{} pages", doc.page_count());
//!     Ok(())
//! }
//! ```

mod json;

pub use json::JsonReader;

use crate::error::{Error, Result};
use crate::model::Document;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for document readers.
///
/// Implement this trait to add support for a new input format.
pub trait DocumentReader: Send + Sync {
    /// Get the supported file extensions for this reader.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["json"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this reader.
    fn name(&self) -> &str;

    /// Read a file at the given path.
    fn read(&self, path: &Path) -> Result<Document> {
        let bytes = std::fs::read(path)?;
        self.read_bytes(&bytes)
    }

    /// Read from bytes.
    fn read_bytes(&self, bytes: &[u8]) -> Result<Document>;

    /// Check if this reader supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for document readers, keyed by extension.
pub struct ReaderRegistry {
    readers: HashMap<String, Arc<dyn DocumentReader>>,
}

impl ReaderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            readers: HashMap::new(),
        }
    }

    /// Create a registry with the built-in readers (JSON page dumps).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(JsonReader::new()));
        registry
    }

    /// Register a reader for all its supported extensions.
    ///
    /// A later registration replaces an earlier one for the same extension.
    pub fn register(&mut self, reader: Arc<dyn DocumentReader>) {
        for ext in reader.supported_extensions() {
            self.readers.insert(ext.to_lowercase(), reader.clone());
        }
    }

    /// Get a reader by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentReader>> {
        self.readers.get(&ext.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.readers.contains_key(&ext.to_lowercase())
    }

    /// Check if a path has a supported extension.
    pub fn supports_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.supports(ext))
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.readers.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Read a file using the reader registered for its extension.
    pub fn read(&self, path: &Path) -> Result<Document> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(format!("{} has no extension", path.display())))?;

        let reader = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))?;

        log::debug!("Reading {} with {} reader", path.display(), reader.name());
        reader.read(path)
    }

    /// Read bytes using the reader registered for `ext`.
    pub fn read_bytes(&self, bytes: &[u8], ext: &str) -> Result<Document> {
        let reader = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))?;

        reader.read_bytes(bytes)
    }
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
