// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! JSON report.

use serde::{Deserialize, Serialize};

use crate::labels::{ConfidenceLevel, LabelFlags, LabelSuggestion, SuggestedLabels};

/// The serialized form of a suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport {
    pub labels: Vec<JsonLabel>,
    pub flags: LabelFlags,
    pub summary: JsonSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonLabel {
    pub name: String,
    pub color: String,
    pub description: String,
    pub confidence: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

/// Label counts per confidence level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSummary {
    pub total_labels: usize,
    pub high_confidence: usize,
    pub medium_confidence: usize,
    pub low_confidence: usize,
}

impl JsonLabel {
    fn from_suggestion(label: &LabelSuggestion) -> Self {
        Self {
            name: label.name.clone(),
            color: label.color.clone(),
            description: label.description.clone(),
            confidence: label.confidence,
            evidence: label.evidence.clone(),
        }
    }
}

impl JsonReport {
    /// Build the report, labels ranked by confidence.
    pub fn new(labels: &SuggestedLabels) -> Self {
        let ranked = labels.ranked();
        let mut summary = JsonSummary {
            total_labels: ranked.len(),
            ..JsonSummary::default()
        };
        for label in &ranked {
            match label.level() {
                ConfidenceLevel::High => summary.high_confidence += 1,
                ConfidenceLevel::Medium => summary.medium_confidence += 1,
                ConfidenceLevel::Low => summary.low_confidence += 1,
            }
        }

        Self {
            labels: ranked
                .into_iter()
                .map(JsonLabel::from_suggestion)
                .collect(),
            flags: labels.flags,
            summary,
        }
    }
}

/// Colors are always part of the report.
pub(super) fn render(labels: &SuggestedLabels) -> String {
    let report = JsonReport::new(labels);
    // Plain data with string keys always serializes.
    serde_json::to_string_pretty(&report).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::fixtures;

    #[test]
    fn test_round_trip() {
        let labels = fixtures::bug_fix();
        let parsed: JsonReport = serde_json::from_str(&render(&labels)).unwrap();

        let names: Vec<&str> = parsed.labels.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["size:small", "release:patch", "type:bug"]);
        let confidences: Vec<u8> = parsed.labels.iter().map(|l| l.confidence).collect();
        assert_eq!(confidences, vec![85, 75, 60]);
        assert_eq!(parsed.flags, labels.flags);
        assert_eq!(parsed.labels[2].evidence.as_deref(), Some("abc1234 fix: bug"));
    }

    #[test]
    fn test_colors_are_included() {
        let parsed: JsonReport = serde_json::from_str(&render(&fixtures::bug_fix())).unwrap();
        assert_eq!(parsed.labels[0].color, "3cbf00");
    }

    #[test]
    fn test_camel_case_keys_and_summary() {
        let rendered = render(&fixtures::bug_fix());
        assert!(rendered.contains("\"testsNeeded\": true"));
        assert!(rendered.contains("\"readmeNeedUpdate\": false"));

        let parsed: JsonReport = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            parsed.summary,
            JsonSummary {
                total_labels: 3,
                high_confidence: 1,
                medium_confidence: 2,
                low_confidence: 0,
            }
        );
    }

    #[test]
    fn test_empty_report() {
        let parsed: JsonReport =
            serde_json::from_str(&render(&SuggestedLabels::default())).unwrap();
        assert!(parsed.labels.is_empty());
        assert_eq!(parsed.summary.total_labels, 0);
    }
}
