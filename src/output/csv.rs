// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Single-line comma separated output.

use crate::labels::SuggestedLabels;

pub(super) fn render(labels: &SuggestedLabels, with_colors: bool) -> String {
    let mut tokens: Vec<String> = labels
        .ranked()
        .iter()
        .map(|l| {
            if with_colors {
                format!("{}:{}", l.name, l.color)
            } else {
                l.name.clone()
            }
        })
        .collect();

    tokens.extend(labels.flags.pseudo_labels().iter().map(|s| s.to_string()));
    tokens.join(",")
}
