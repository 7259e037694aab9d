// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Label suggestion types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest possible confidence score.
pub const MAX_CONFIDENCE: u8 = 100;

/// A single suggested label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSuggestion {
    /// Namespaced name, e.g. `size:small`.
    pub name: String,
    /// Six-digit hex color without the leading `#`.
    pub color: String,
    /// Human-readable explanation.
    pub description: String,
    /// Heuristic score in `0..=100`.
    pub confidence: u8,
    /// The commit that triggered the suggestion, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

impl LabelSuggestion {
    /// Create a suggestion, clamping the confidence to `0..=100`.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        description: impl Into<String>,
        confidence: u32,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            description: description.into(),
            confidence: confidence.min(MAX_CONFIDENCE as u32) as u8,
            evidence: None,
        }
    }

    /// Attach the evidence for this suggestion.
    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }

    /// The part of the name before the first `:`.
    pub fn namespace(&self) -> &str {
        match self.name.split_once(':') {
            Some((namespace, _)) => namespace,
            None => "other",
        }
    }

    /// Confidence bucket used by summaries and coloring.
    pub fn level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_score(self.confidence)
    }
}

impl fmt::Display for LabelSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.name, self.confidence)
    }
}

/// Confidence buckets: high from 80, medium from 60, low below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ConfidenceLevel::High,
            60..=79 => ConfidenceLevel::Medium,
            _ => ConfidenceLevel::Low,
        }
    }
}

/// Boolean signals that accompany the labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelFlags {
    pub breaking_change: bool,
    pub dependencies: bool,
    pub documentation_needed: bool,
    pub tests_needed: bool,
    pub readme_need_update: bool,
    pub hotfix: bool,
}

impl LabelFlags {
    /// Each flag with its pseudo-label name and a human-readable title.
    pub fn entries(&self) -> [(&'static str, &'static str, bool); 6] {
        [
            ("breaking-change", "Breaking change", self.breaking_change),
            ("dependencies-updated", "Dependencies updated", self.dependencies),
            (
                "documentation-needed",
                "Documentation needed",
                self.documentation_needed,
            ),
            ("tests-needed", "Tests needed", self.tests_needed),
            ("readme-need-update", "README needs update", self.readme_need_update),
            ("hotfix", "Hotfix branch", self.hotfix),
        ]
    }

    /// Pseudo-label names of the flags that are set.
    pub fn pseudo_labels(&self) -> Vec<&'static str> {
        self.entries()
            .iter()
            .filter(|(_, _, set)| *set)
            .map(|(name, _, _)| *name)
            .collect()
    }
}

/// The complete suggestion for one comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestedLabels {
    /// Exactly one size label unless nothing changed.
    pub size: Option<LabelSuggestion>,
    /// Change types, possibly several.
    pub types: Vec<LabelSuggestion>,
    /// Affected areas, possibly several.
    pub scopes: Vec<LabelSuggestion>,
    /// The single release impact label.
    pub release: Vec<LabelSuggestion>,
    pub flags: LabelFlags,
}

impl SuggestedLabels {
    /// All labels ordered by descending confidence.
    ///
    /// Labels are gathered as size, types, scopes, release and the sort is
    /// stable, so ties keep that order.
    pub fn ranked(&self) -> Vec<&LabelSuggestion> {
        let mut labels: Vec<&LabelSuggestion> = self
            .size
            .iter()
            .chain(self.types.iter())
            .chain(self.scopes.iter())
            .chain(self.release.iter())
            .collect();
        labels.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        labels
    }

    /// Total number of labels.
    pub fn len(&self) -> usize {
        self.size.iter().count() + self.types.len() + self.scopes.len() + self.release.len()
    }

    /// Whether no label was suggested.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
