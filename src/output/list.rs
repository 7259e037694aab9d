// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Grouped, human-readable list.

use console::style;

use crate::labels::{ConfidenceLevel, LabelSuggestion, SuggestedLabels};

use super::{grouped, heading};

fn confidence(label: &LabelSuggestion) -> String {
    let text = format!("{}%", label.confidence);
    match label.level() {
        ConfidenceLevel::High => style(text).green().to_string(),
        ConfidenceLevel::Medium => style(text).yellow().to_string(),
        ConfidenceLevel::Low => style(text).red().to_string(),
    }
}

pub(super) fn render(labels: &SuggestedLabels, with_colors: bool) -> String {
    let mut out = Vec::new();

    if labels.is_empty() {
        out.push("No labels suggested.".to_string());
    }

    for (namespace, members) in grouped(labels) {
        out.push(style(format!("{}:", heading(&namespace))).bold().to_string());
        for label in members {
            let color = if with_colors {
                format!(" {}", style(format!("#{}", label.color)).dim())
            } else {
                String::new()
            };
            out.push(format!(
                "  • {} ({}){} - {}",
                style(&label.name).cyan(),
                confidence(label),
                color,
                label.description
            ));
            if let Some(ref evidence) = label.evidence {
                out.push(format!("      {}", style(evidence).dim()));
            }
        }
        out.push(String::new());
    }

    let flags: Vec<&str> = labels
        .flags
        .entries()
        .iter()
        .filter(|(_, _, set)| *set)
        .map(|(_, title, _)| *title)
        .collect();
    if !flags.is_empty() {
        if labels.is_empty() {
            out.push(String::new());
        }
        out.push(style("Flags:").bold().to_string());
        for title in flags {
            out.push(format!("  {} {}", style("⚠").yellow(), title));
        }
    }

    out.join("\n").trim_end().to_string()
}
