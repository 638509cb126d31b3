//! Exclusion matching for bundle creation.
//!
//! Matching is a plain literal substring test, preserved exactly from the
//! original archiver: a pattern like `build` also excludes a directory named
//! `rebuild-scripts`. That imprecision is accepted behavior, not a bug.

use std::path::Path;

/// Returns true if `candidate` contains any of the exclusion substrings.
///
/// # Examples
///
/// ```
/// use srcpack_core::filters;
///
/// let patterns = vec!["node_modules".to_string(), ".git".to_string()];
/// assert!(filters::matches_any("node_modules", &patterns));
/// assert!(filters::matches_any("src/.github/workflows", &patterns));
/// assert!(!filters::matches_any("src/main.rs", &patterns));
/// ```
#[must_use]
pub fn matches_any(candidate: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|p| candidate.contains(p.as_str()))
}

/// Directory pruning test: matches the bare directory name only.
///
/// Used while traversing so that descendants of an excluded directory are
/// never visited.
#[must_use]
pub fn should_prune_dir(name: &str, patterns: &[String]) -> bool {
    matches_any(name, patterns)
}

/// File skip test: matches the stringified full path, not just the filename.
///
/// Non-UTF-8 paths are matched through their lossy representation; the
/// exclusion list itself is plain ASCII.
#[must_use]
pub fn should_skip_file(path: &Path, patterns: &[String]) -> bool {
    matches_any(&path.to_string_lossy(), patterns)
}
