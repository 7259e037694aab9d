// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Column-aligned table.

use console::{measure_text_width, pad_str, style, truncate_str, Alignment};

use crate::labels::SuggestedLabels;

/// Widest a description or evidence cell may get before truncation.
const MAX_CELL_WIDTH: usize = 48;

pub(super) fn render(labels: &SuggestedLabels, with_colors: bool) -> String {
    let mut headers = vec!["Label", "Type", "Confidence", "Description", "Evidence"];
    if with_colors {
        headers.push("Color");
    }

    let rows: Vec<Vec<String>> = labels
        .ranked()
        .iter()
        .map(|l| {
            let mut row = vec![
                l.name.clone(),
                l.namespace().to_string(),
                format!("{}%", l.confidence),
                l.description.clone(),
                l.evidence.clone().unwrap_or_else(|| "-".to_string()),
            ];
            if with_colors {
                row.push(format!("#{}", l.color));
            }
            row
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| measure_text_width(&row[i]))
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
                .min(MAX_CELL_WIDTH)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let cell = truncate_str(cell, *width, "…");
                pad_str(&cell, *width, Alignment::Left, None).into_owned()
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = Vec::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    out.push(style(line(header_cells.as_slice())).bold().to_string());
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );

    if rows.is_empty() {
        out.push("No labels suggested.".to_string());
    }
    for row in &rows {
        out.push(line(row.as_slice()));
    }

    out.push(String::new());
    out.push(style("Flags").bold().to_string());
    for (_, title, set) in labels.flags.entries() {
        let mark = if set {
            style("yes").yellow().to_string()
        } else {
            style("no").dim().to_string()
        };
        out.push(format!("  {}  {}", pad_str(title, 22, Alignment::Left, None), mark));
    }

    out.join("\n")
}
