//! Batch outline extraction.
//!
//! Every document is read and analyzed independently, so one bad input
//! never affects its siblings. In lenient mode a failed document gets a
//! fallback outline titled after its file name; in strict mode the first
//! failure (in input order) is returned.

use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::analysis::{ErrorMode, ExtractOptions, OutlineExtractor};
use crate::error::Result;
use crate::model::Outline;
use crate::reader::ReaderRegistry;

/// Outcome for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    /// Input path
    pub path: PathBuf,
    /// Extracted or substituted outline
    pub outline: Outline,
    /// True when `outline` is a fallback for a failed document
    pub recovered: bool,
    /// Failure message for recovered items
    pub error: Option<String>,
}

impl BatchItem {
    fn extracted(path: PathBuf, outline: Outline) -> Self {
        Self {
            path,
            outline,
            recovered: false,
            error: None,
        }
    }

    fn recovered(path: PathBuf, outline: Outline, error: String) -> Self {
        Self {
            path,
            outline,
            recovered: true,
            error: Some(error),
        }
    }
}

/// Reads and analyzes many documents with shared configuration.
pub struct BatchProcessor {
    extractor: OutlineExtractor,
    registry: ReaderRegistry,
}

impl BatchProcessor {
    /// Create a processor with the default readers.
    pub fn new(options: ExtractOptions) -> Result<Self> {
        Ok(Self {
            extractor: OutlineExtractor::with_options(options)?,
            registry: ReaderRegistry::with_defaults(),
        })
    }

    /// Replace the reader registry.
    pub fn with_registry(mut self, registry: ReaderRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The extractor's options.
    pub fn options(&self) -> &ExtractOptions {
        self.extractor.options()
    }

    /// Read and analyze one document.
    pub fn extract(&self, path: &Path) -> Result<Outline> {
        let document = self.registry.read(path)?;
        Ok(self.extractor.extract(&document))
    }

    /// Analyze one document, substituting a fallback outline on failure.
    pub fn extract_or_fallback(&self, path: &Path) -> BatchItem {
        match self.extract(path) {
            Ok(outline) => BatchItem::extracted(path.to_path_buf(), outline),
            Err(e) => {
                log::warn!("Failed to process {}: {}", path.display(), e);
                let fallback = Outline::fallback_for_path(path, &self.options().default_title);
                BatchItem::recovered(path.to_path_buf(), fallback, e.to_string())
            }
        }
    }

    /// Process all paths, keeping input order in the result.
    pub fn run<P: AsRef<Path> + Sync>(&self, paths: &[P]) -> Result<Vec<BatchItem>> {
        let options = self.options();
        log::debug!(
            "Processing {} documents ({})",
            paths.len(),
            if options.parallel { "parallel" } else { "sequential" }
        );

        match options.error_mode {
            ErrorMode::Lenient => {
                let items: Vec<BatchItem> = if options.parallel {
                    paths
                        .par_iter()
                        .map(|p| self.extract_or_fallback(p.as_ref()))
                        .collect()
                } else {
                    paths
                        .iter()
                        .map(|p| self.extract_or_fallback(p.as_ref()))
                        .collect()
                };
                Ok(items)
            }
            ErrorMode::Strict => {
                let results: Vec<Result<BatchItem>> = if options.parallel {
                    paths.par_iter().map(|p| self.strict_item(p.as_ref())).collect()
                } else {
                    paths.iter().map(|p| self.strict_item(p.as_ref())).collect()
                };
                results.into_iter().collect()
            }
        }
    }

    fn strict_item(&self, path: &Path) -> Result<BatchItem> {
        self.extract(path)
            .map(|outline| BatchItem::extracted(path.to_path_buf(), outline))
    }
}

/// Process a batch of documents with the default readers.
pub fn extract_batch<P: AsRef<Path> + Sync>(
    paths: &[P],
    options: &ExtractOptions,
) -> Result<Vec<BatchItem>> {
    BatchProcessor::new(options.clone())?.run(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;

    fn write_dump(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_lenient_recovers() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_dump(
            dir.path(),
            "good.json",
            r#"{"metadata": {"title": "Good Report"}, "pages": []}"#,
        );
        let bad = write_dump(dir.path(), "broken_file.json", "{oops");

        let items = extract_batch(&[good.clone(), bad.clone()], &ExtractOptions::new()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].path, good);
        assert!(!items[0].recovered);
        assert_eq!(items[0].outline.title, "Good Report");

        assert!(items[1].recovered);
        assert_eq!(items[1].outline.title, "Broken File");
        assert!(items[1].outline.is_empty());
        assert!(items[1].error.is_some());
    }

    #[test]
    fn test_strict_propagates_first_error() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_dump(dir.path(), "a.json", r#"{"pages": []}"#);
        let missing = dir.path().join("missing.json");
        let unsupported = write_dump(dir.path(), "c.txt", "plain");

        let options = ExtractOptions::new().strict().sequential();
        let err = extract_batch(&[good, missing, unsupported], &options).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_parallel_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<PathBuf> = (0..12)
            .map(|i| {
                write_dump(
                    dir.path(),
                    &format!("doc{}.json", i),
                    &format!(r#"{{"metadata": {{"title": "Document {}"}}, "pages": []}}"#, i),
                )
            })
            .collect();

        let items = extract_batch(&paths, &ExtractOptions::new()).unwrap();
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.outline.title, format!("Document {}", i));
        }
    }
}
