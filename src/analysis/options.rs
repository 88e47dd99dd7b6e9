//! Extraction options and configuration.

/// Title used when neither metadata nor the first page yields one.
pub const DEFAULT_TITLE: &str = "Document Title";

/// Options for outline extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Where duplicate candidates are collapsed
    pub dedup_scope: DedupScope,

    /// Fallback title
    pub default_title: String,

    /// Run heading texts and the title through `clean_text`
    pub clean_text: bool,

    /// Extra structural patterns, tried after the built-in ones
    pub extra_patterns: Vec<String>,

    /// How batch processing treats per-document failures
    pub error_mode: ErrorMode,

    /// Whether batch processing runs documents in parallel
    pub parallel: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dedup scope.
    pub fn with_dedup_scope(mut self, scope: DedupScope) -> Self {
        self.dedup_scope = scope;
        self
    }

    /// Deduplicate each page's candidates independently.
    pub fn per_page_dedup(mut self) -> Self {
        self.dedup_scope = DedupScope::Page;
        self
    }

    /// Set the fallback title.
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Enable or disable text cleaning of the output.
    pub fn with_clean_text(mut self, clean: bool) -> Self {
        self.clean_text = clean;
        self
    }

    /// Add a structural heading pattern.
    ///
    /// The first capture group, if any, becomes the heading text.
    pub fn with_extra_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.extra_patterns.push(pattern.into());
        self
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Fail a batch on the first unreadable document.
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Substitute fallback outlines for unreadable documents.
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            dedup_scope: DedupScope::Document,
            default_title: DEFAULT_TITLE.to_string(),
            clean_text: false,
            extra_patterns: Vec::new(),
            error_mode: ErrorMode::Lenient,
            parallel: true,
        }
    }
}

/// Where duplicate candidates are collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupScope {
    /// One pass over the candidates of every page
    #[default]
    Document,
    /// A separate pass per page
    Page,
}

/// Error handling mode for batch processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Stop at the first failure
    Strict,
    /// Replace a failed document with a fallback outline and continue
    #[default]
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_options_builder() {
        let options = ExtractOptions::new()
            .per_page_dedup()
            .with_default_title("Untitled")
            .with_clean_text(true)
            .with_extra_pattern(r"^Appendix\s+[A-Z]:\s+(.+)$")
            .strict()
            .sequential();

        assert_eq!(options.dedup_scope, DedupScope::Page);
        assert_eq!(options.default_title, "Untitled");
        assert!(options.clean_text);
        assert_eq!(options.extra_patterns.len(), 1);
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(!options.parallel);
    }

    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert_eq!(options.dedup_scope, DedupScope::Document);
        assert_eq!(options.default_title, DEFAULT_TITLE);
        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(options.parallel);
        assert!(!options.clean_text);
    }
}
