//! Page-level input types.
//!
//! A page arrives already materialized by the document reader: blocks of
//! lines, each line a sequence of runs carrying font size and style flags.

use serde::{Deserialize, Deserializer, Serialize};

/// Bold bit in a run's style flags.
pub const FLAG_BOLD: u32 = 1 << 4;

/// Read an explicit `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A run of text sharing one font size and weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,

    /// Font size in points (0 when the reader had none)
    #[serde(default, alias = "font_size", deserialize_with = "null_as_default")]
    pub size: f32,

    /// Style bitmask (bit 4 = bold)
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: u32,

    /// Font name, when the reader knows it
    #[serde(default, alias = "font_name", skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

impl TextRun {
    /// Create a new run with regular weight.
    pub fn new(text: impl Into<String>, size: f32) -> Self {
        Self {
            text: text.into(),
            size,
            flags: 0,
            font: None,
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>, size: f32) -> Self {
        Self {
            flags: FLAG_BOLD,
            ..Self::new(text, size)
        }
    }

    /// Set the font name.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Set the style flags.
    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    /// Check the bold bit.
    pub fn is_bold(&self) -> bool {
        self.flags & FLAG_BOLD != 0
    }

    /// Whether the size is usable for statistics.
    pub fn has_valid_size(&self) -> bool {
        self.size.is_finite() && self.size > 0.0
    }
}

/// A line of runs in reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    /// Runs on this line
    #[serde(default, alias = "spans", deserialize_with = "null_as_default")]
    pub runs: Vec<TextRun>,
}

impl TextLine {
    /// Create a line from runs.
    pub fn new(runs: Vec<TextRun>) -> Self {
        Self { runs }
    }

    /// Merge the runs: concatenated text, largest size, OR of flags.
    pub fn merged(&self) -> MergedLine {
        let mut merged = MergedLine::default();
        for run in &self.runs {
            merged.text.push_str(&run.text);
            if run.size > merged.size {
                merged.size = run.size;
            }
            merged.flags |= run.flags;
        }
        merged.text = merged.text.trim().to_string();
        merged
    }
}

/// A line after its runs have been merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedLine {
    /// Concatenated, trimmed text
    pub text: String,
    /// Largest run size on the line (0 for an empty line)
    pub size: f32,
    /// Combined style flags
    pub flags: u32,
}

impl MergedLine {
    /// Check the bold bit.
    pub fn is_bold(&self) -> bool {
        self.flags & FLAG_BOLD != 0
    }
}

/// A block of lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Lines in this block
    #[serde(default, deserialize_with = "null_as_default")]
    pub lines: Vec<TextLine>,
}

impl TextBlock {
    /// Create a block from lines.
    pub fn new(lines: Vec<TextLine>) -> Self {
        Self { lines }
    }
}

/// Text and font data of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// Page number (1-indexed); 0 means "assign from position"
    #[serde(default, alias = "page_num")]
    pub number: u32,

    /// Layout blocks
    #[serde(default, deserialize_with = "null_as_default")]
    pub blocks: Vec<TextBlock>,

    /// Plain text of the page, one line per `\n`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
}

impl PageContent {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            ..Default::default()
        }
    }

    /// Add a block.
    pub fn add_block(&mut self, block: TextBlock) {
        self.blocks.push(block);
    }

    /// Add a single-line block made of the given runs.
    pub fn add_line(&mut self, runs: Vec<TextRun>) {
        self.blocks.push(TextBlock::new(vec![TextLine::new(runs)]));
    }

    /// Set the plain text explicitly.
    pub fn with_plain_text(mut self, text: impl Into<String>) -> Self {
        self.plain_text = Some(text.into());
        self
    }

    /// Iterate every line on the page.
    pub fn lines(&self) -> impl Iterator<Item = &TextLine> {
        self.blocks.iter().flat_map(|b| b.lines.iter())
    }

    /// Iterate every run on the page.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.lines().flat_map(|l| l.runs.iter())
    }

    /// Merged lines in reading order.
    pub fn merged_lines(&self) -> Vec<MergedLine> {
        self.lines().map(TextLine::merged).collect()
    }

    /// Plain text, derived from the merged lines when the reader gave none.
    pub fn text(&self) -> String {
        match self.plain_text {
            Some(ref text) => text.clone(),
            None => self
                .merged_lines()
                .into_iter()
                .map(|l| l.text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Check if the page has no runs.
    pub fn is_empty(&self) -> bool {
        self.runs().next().is_none()
    }
}
