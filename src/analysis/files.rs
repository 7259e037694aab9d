// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Path classification shared by the analyzers.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    /// Paths that look like tests, matched against the lowercased path.
    static ref TEST_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(^|/)(tests?|__tests__|specs?|e2e)/").unwrap(),
        Regex::new(r"\.(test|spec)\.[a-z0-9]+$").unwrap(),
        Regex::new(r"_(test|spec)\.[a-z0-9]+$").unwrap(),
        Regex::new(r"(^|/)test_[^/]+\.py$").unwrap(),
    ];
}

/// Extensions treated as source code.
const SOURCE_EXTENSIONS: &[&str] = &[
    "js", "jsx", "mjs", "cjs", "ts", "tsx", "vue", "svelte", "py", "rb", "go", "rs", "java", "kt",
    "kts", "scala", "php", "cs", "c", "h", "cc", "cpp", "hpp", "swift", "m", "dart", "ex", "exs",
];

/// Extensions treated as documentation.
const DOC_EXTENSIONS: &[&str] = &["md", "mdx", "rst", "txt", "adoc"];

fn extension(path: &str) -> String {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Whether the path has a recognised source extension.
pub fn is_source_file(path: &str) -> bool {
    SOURCE_EXTENSIONS.contains(&extension(path).as_str())
}

/// Whether the path looks like a test by name or location.
pub fn is_test_file(path: &str) -> bool {
    let lower = path.to_lowercase();
    TEST_PATTERNS.iter().any(|re| re.is_match(&lower))
}

/// Whether the path looks like documentation.
pub fn is_doc_file(path: &str) -> bool {
    DOC_EXTENSIONS.contains(&extension(path).as_str()) || path.to_lowercase().contains("doc")
}

/// Whether the path is a Markdown file.
pub fn is_markdown(path: &str) -> bool {
    extension(path) == "md"
}

/// Whether the path refers to a README.
pub fn is_readme(path: &str) -> bool {
    path.to_lowercase().contains("readme")
}
