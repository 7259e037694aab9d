// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Label suggestion data model.

mod suggestion;

pub use suggestion::{
    ConfidenceLevel, LabelFlags, LabelSuggestion, SuggestedLabels, MAX_CONFIDENCE,
};
