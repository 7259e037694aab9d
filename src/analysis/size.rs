// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Size classification.

use crate::config::SizeThresholds;
use crate::labels::LabelSuggestion;

use super::context::AnalysisContext;

/// Pick exactly one of `size:small`, `size:medium` or `size:large`.
///
/// Small requires both fewer lines than the small limit and no more files
/// than the small file limit; medium likewise with the medium limits.
pub fn size_label(ctx: &AnalysisContext, thresholds: &SizeThresholds) -> LabelSuggestion {
    let total = ctx.total_lines();
    let files = ctx.file_count();
    let totals = format!(
        "{} lines changed (+{} -{}) across {} file{}",
        total,
        ctx.added_lines,
        ctx.deleted_lines,
        files,
        if files == 1 { "" } else { "s" }
    );

    if total < thresholds.small_max_lines && files <= thresholds.small_max_files {
        LabelSuggestion::new("size:small", "3cbf00", format!("Small change: {}", totals), 85)
    } else if total < thresholds.medium_max_lines && files <= thresholds.medium_max_files {
        LabelSuggestion::new("size:medium", "fbca04", format!("Medium change: {}", totals), 75)
    } else {
        LabelSuggestion::new("size:large", "b60205", format!("Large change: {}", totals), 90)
    }
}
