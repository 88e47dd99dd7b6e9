//! Boundary validation of outlines.
//!
//! Every finding is an advisory: callers report warnings and still write
//! the outline.

use super::{HeadingLevel, Outline};
use serde_json::Value;
use std::fmt;

/// A single validation advisory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Title missing, not a string, or shorter than 3 characters
    ShortTitle,
    /// `outline` is not an array
    OutlineNotArray,
    /// Item is not an object
    ItemNotObject(usize),
    /// Item level outside H1..H3
    InvalidLevel(usize),
    /// Item text missing or empty
    EmptyText(usize),
    /// Item page missing or not a positive integer
    InvalidPage(usize),
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::ShortTitle => {
                write!(f, "Title must be a non-empty string with at least 3 characters")
            }
            ValidationWarning::OutlineNotArray => write!(f, "Outline must be an array"),
            ValidationWarning::ItemNotObject(i) => write!(f, "Outline item {} must be an object", i),
            ValidationWarning::InvalidLevel(i) => {
                write!(f, "Item {}: level must be H1, H2, or H3", i)
            }
            ValidationWarning::EmptyText(i) => {
                write!(f, "Item {}: text must be a non-empty string", i)
            }
            ValidationWarning::InvalidPage(i) => {
                write!(f, "Item {}: page must be a positive integer", i)
            }
        }
    }
}

fn title_too_short(title: &str) -> bool {
    title.trim().chars().count() < 3
}

impl Outline {
    /// Check the outline against the output contract.
    pub fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        if title_too_short(&self.title) {
            warnings.push(ValidationWarning::ShortTitle);
        }
        for (i, heading) in self.outline.iter().enumerate() {
            if heading.text.is_empty() {
                warnings.push(ValidationWarning::EmptyText(i));
            }
            if heading.page < 1 {
                warnings.push(ValidationWarning::InvalidPage(i));
            }
        }
        warnings
    }
}

/// Check an arbitrary JSON value against the output contract.
pub fn validate_json(value: &Value) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    match value.get("title").and_then(Value::as_str) {
        Some(title) if !title_too_short(title) => {}
        _ => warnings.push(ValidationWarning::ShortTitle),
    }

    let items = match value.get("outline") {
        None => return warnings,
        Some(Value::Array(items)) => items,
        Some(_) => {
            warnings.push(ValidationWarning::OutlineNotArray);
            return warnings;
        }
    };

    for (i, item) in items.iter().enumerate() {
        let Some(obj) = item.as_object() else {
            warnings.push(ValidationWarning::ItemNotObject(i));
            continue;
        };

        let level_ok = obj
            .get("level")
            .and_then(Value::as_str)
            .and_then(HeadingLevel::parse)
            .is_some();
        if !level_ok {
            warnings.push(ValidationWarning::InvalidLevel(i));
        }

        let text_ok = obj
            .get("text")
            .and_then(Value::as_str)
            .is_some_and(|t| !t.is_empty());
        if !text_ok {
            warnings.push(ValidationWarning::EmptyText(i));
        }

        let page_ok = obj
            .get("page")
            .and_then(Value::as_i64)
            .is_some_and(|p| p >= 1);
        if !page_ok {
            warnings.push(ValidationWarning::InvalidPage(i));
        }
    }

    warnings
}
