//! Bundle operation reporting.

use std::time::Duration;

/// Statistics about one bundle build.
///
/// # Examples
///
/// ```
/// use srcpack_core::BundleReport;
///
/// let mut report = BundleReport::default();
/// report.files_added = 10;
/// assert!(!report.has_warnings());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BundleReport {
    /// Number of files written into the archive.
    pub files_added: usize,

    /// Number of configured inputs skipped because they were absent.
    pub inputs_skipped: usize,

    /// Number of entries skipped because their destination path was already
    /// taken.
    pub duplicates_skipped: usize,

    /// Total uncompressed bytes written.
    pub bytes_written: u64,

    /// Duration of the build.
    pub duration: Duration,

    /// Warnings generated during the build.
    pub warnings: Vec<String>,
}

impl BundleReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
