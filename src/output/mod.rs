// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rendering of suggested labels.
//!
//! Every format renders to a `String`; printing is left to the caller.

mod csv;
mod json;
mod list;
mod table;
mod txt;

pub use json::{JsonLabel, JsonReport, JsonSummary};

use crate::labels::{LabelSuggestion, SuggestedLabels};
use std::fmt;
use std::str::FromStr;

/// Supported output encodings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
    List,
    Txt,
    Csv,
}

impl OutputFormat {
    /// Parse a format name, falling back to JSON for unknown names.
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown output format '{}', using json", name);
            OutputFormat::Json
        })
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "list" => Ok(OutputFormat::List),
            "txt" | "text" => Ok(OutputFormat::Txt),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
            OutputFormat::List => "list",
            OutputFormat::Txt => "txt",
            OutputFormat::Csv => "csv",
        };
        write!(f, "{}", name)
    }
}

/// Render the labels in the given format.
///
/// `with_colors` adds each label's color where the format has room for it.
pub fn render(labels: &SuggestedLabels, format: OutputFormat, with_colors: bool) -> String {
    match format {
        OutputFormat::Json => json::render(labels),
        OutputFormat::Table => table::render(labels, with_colors),
        OutputFormat::List => list::render(labels, with_colors),
        OutputFormat::Txt => txt::render(labels, with_colors),
        OutputFormat::Csv => csv::render(labels, with_colors),
    }
}

/// Namespaces in display order; anything else goes last.
const GROUP_ORDER: &[&str] = &["size", "type", "scope", "release"];

/// Ranked labels grouped by namespace, groups in display order.
pub(crate) fn grouped(labels: &SuggestedLabels) -> Vec<(String, Vec<&LabelSuggestion>)> {
    let mut groups: Vec<(String, Vec<&LabelSuggestion>)> = Vec::new();

    for label in labels.ranked() {
        let namespace = label.namespace();
        match groups.iter_mut().find(|(name, _)| name == namespace) {
            Some((_, members)) => members.push(label),
            None => groups.push((namespace.to_string(), vec![label])),
        }
    }

    groups.sort_by_key(|(name, _)| {
        GROUP_ORDER
            .iter()
            .position(|g| g == name)
            .unwrap_or(GROUP_ORDER.len())
    });
    groups
}

/// Capitalized group heading, e.g. `type` becomes `Type`.
pub(crate) fn heading(namespace: &str) -> String {
    let mut chars = namespace.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
