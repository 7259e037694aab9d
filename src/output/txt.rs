// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Plain-text report, free of terminal styling.

use crate::labels::{ConfidenceLevel, SuggestedLabels};

use super::{grouped, heading};

const RULE: &str = "========================================";

pub(super) fn render(labels: &SuggestedLabels, with_colors: bool) -> String {
    let mut out = vec![
        "SUGGESTED LABELS".to_string(),
        RULE.to_string(),
        String::new(),
    ];

    if labels.is_empty() {
        out.push("No labels suggested.".to_string());
        out.push(String::new());
    }

    for (namespace, members) in grouped(labels) {
        out.push(format!("{}:", heading(&namespace).to_uppercase()));
        for label in members {
            let color = if with_colors {
                format!(" [#{}]", label.color)
            } else {
                String::new()
            };
            out.push(format!(
                "  - {} ({}%){}: {}",
                label.name, label.confidence, color, label.description
            ));
            if let Some(ref evidence) = label.evidence {
                out.push(format!("      evidence: {}", evidence));
            }
        }
        out.push(String::new());
    }

    out.push("ADDITIONAL FLAGS:".to_string());
    for (_, title, set) in labels.flags.entries() {
        out.push(format!("  - {}: {}", title, if set { "yes" } else { "no" }));
    }
    out.push(String::new());

    let ranked = labels.ranked();
    let count = |level: ConfidenceLevel| ranked.iter().filter(|l| l.level() == level).count();
    out.push("SUMMARY:".to_string());
    out.push(format!("  Total labels: {}", ranked.len()));
    out.push(format!("  High confidence: {}", count(ConfidenceLevel::High)));
    out.push(format!("  Medium confidence: {}", count(ConfidenceLevel::Medium)));
    out.push(format!("  Low confidence: {}", count(ConfidenceLevel::Low)));

    out.join("\n")
}
