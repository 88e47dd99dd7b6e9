//! Font statistics for heading detection.

use crate::model::{TextRun, FLAG_BOLD};

/// Size used for every numeric statistic when a page has no runs.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Size ratio over the page average that marks a heading font.
pub const HEADING_SIZE_RATIO: f32 = 1.2;

/// Font size distribution over one page's runs.
#[derive(Debug, Clone, PartialEq)]
pub struct FontStatistics {
    /// Every observed size, in run order
    pub sizes: Vec<f32>,
    /// Font name per run ("default" when unknown)
    pub names: Vec<String>,
    /// Style flags per run
    pub flags: Vec<u32>,
    /// Mean size
    pub avg_size: f32,
    /// Largest size
    pub max_size: f32,
    /// Smallest size
    pub min_size: f32,
}

impl Default for FontStatistics {
    fn default() -> Self {
        Self {
            sizes: Vec::new(),
            names: Vec::new(),
            flags: Vec::new(),
            avg_size: DEFAULT_FONT_SIZE,
            max_size: DEFAULT_FONT_SIZE,
            min_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl FontStatistics {
    /// Collect statistics over runs.
    pub fn from_runs<'a, I>(runs: I) -> Self
    where
        I: IntoIterator<Item = &'a TextRun>,
    {
        let mut stats = Self::default();
        for run in runs {
            stats.add_run(run);
        }
        stats.analyze();
        stats
    }

    /// Add a run observation.
    pub fn add_run(&mut self, run: &TextRun) {
        self.sizes.push(run.size);
        self.names
            .push(run.font.clone().unwrap_or_else(|| "default".to_string()));
        self.flags.push(run.flags);
    }

    /// Recompute avg/max/min from the collected sizes.
    pub fn analyze(&mut self) {
        if self.sizes.is_empty() {
            self.avg_size = DEFAULT_FONT_SIZE;
            self.max_size = DEFAULT_FONT_SIZE;
            self.min_size = DEFAULT_FONT_SIZE;
            return;
        }

        let sum: f32 = self.sizes.iter().sum();
        self.avg_size = sum / self.sizes.len() as f32;
        self.max_size = self.sizes.iter().copied().fold(f32::MIN, f32::max);
        self.min_size = self.sizes.iter().copied().fold(f32::MAX, f32::min);
    }

    /// Whether no runs were observed.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Heading test against this page's average size.
    pub fn is_heading_font(&self, font_size: f32, flags: u32) -> bool {
        is_heading_font(font_size, flags, self.avg_size, HEADING_SIZE_RATIO)
    }

    /// Rank the three largest distinct sizes on this page.
    pub fn hierarchy(&self) -> Vec<(f32, u8)> {
        font_hierarchy(&self.sizes)
    }
}

/// Large enough relative to `avg_size`, or bold.
pub fn is_heading_font(font_size: f32, flags: u32, avg_size: f32, threshold: f32) -> bool {
    let size_ratio = if avg_size > 0.0 {
        font_size / avg_size
    } else {
        1.0
    };
    size_ratio >= threshold || flags & FLAG_BOLD != 0
}

/// Map the three largest distinct sizes to ranks 1..=3, largest first.
///
/// Smaller sizes get no rank.
pub fn font_hierarchy(sizes: &[f32]) -> Vec<(f32, u8)> {
    let mut unique: Vec<f32> = Vec::new();
    for &size in sizes {
        if !unique.contains(&size) {
            unique.push(size);
        }
    }
    unique.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    unique
        .into_iter()
        .take(3)
        .zip(1u8..)
        .collect()
}
