// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Label suggestion pipeline.
//!
//! Branch resolution, diff extraction and analysis run strictly in that
//! order for a single invocation.

mod pipeline;

pub use pipeline::{suggest_labels, SuggestOptions, SuggestOutcome};
