//! Configuration for bundle operations.

use crate::BundleError;
use crate::Result;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

/// Default project directory the production deployment archives.
pub const DEFAULT_PROJECT_DIR: &str = "/app";

/// Default top-level directory name inside the archive (and the download
/// filename stem).
pub const DEFAULT_ARCHIVE_ROOT: &str = "sandbox-developers-aws";

/// Default exclusion substrings, carried verbatim from the original
/// configuration.
///
/// Matching is a literal substring test, so the glob-looking `*.pyc` and
/// `*.log` entries never match a real path: loose `.pyc` and `.log` files
/// are in fact included. Preserved exactly for compatibility, dead
/// patterns and all.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    "node_modules",
    "__pycache__",
    ".git",
    "build",
    "dist",
    ".env",
    "venv",
    ".DS_Store",
    "*.pyc",
    "*.log",
];

/// A directory whose contents are recursively included in the archive,
/// subject to exclusion filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRoot {
    /// Filesystem path of the directory.
    pub path: PathBuf,

    /// Archive path segment its contents are nested under
    /// (`<top>/<prefix>/<relative>`).
    pub prefix: String,
}

impl SourceRoot {
    /// Creates a new source root.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            prefix: prefix.into(),
        }
    }
}

/// A single file copied verbatim into the archive at a fixed destination,
/// bypassing exclusion filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandaloneFile {
    /// Filesystem path of the source file.
    pub source: PathBuf,

    /// Destination path inside the archive, relative to the top-level
    /// directory.
    pub dest: String,
}

impl StandaloneFile {
    /// Creates a new standalone file mapping.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }
}

/// Policy for configured inputs that do not exist on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Missing inputs contribute nothing; the build still succeeds.
    #[default]
    Skip,

    /// Missing inputs fail the build with `SourceNotFound`.
    Error,
}

/// Configuration for building a project bundle.
///
/// The default value carries the production layout as literals; use
/// [`BundleConfig::rooted_at`] to rebase the same layout under another
/// directory (for example a temporary directory in tests).
///
/// # Examples
///
/// ```
/// use srcpack_core::BundleConfig;
///
/// let config = BundleConfig::default().with_compression_level(9);
/// assert_eq!(config.archive_root, "sandbox-developers-aws");
/// ```
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// Top-level directory name all entries are rooted under.
    pub archive_root: String,

    /// Source-root directories to traverse.
    pub roots: Vec<SourceRoot>,

    /// Standalone files copied in unfiltered.
    pub standalone_files: Vec<StandaloneFile>,

    /// Literal substrings that exclude directories (by bare name) and files
    /// (by full path string).
    pub exclude_patterns: Vec<String>,

    /// Deflate compression level (1-9). `None` uses the writer default.
    pub compression_level: Option<u8>,

    /// What to do when a configured root or standalone file is absent.
    pub missing_policy: MissingPolicy,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self::rooted_at(DEFAULT_PROJECT_DIR)
    }
}

impl BundleConfig {
    /// Creates the standard project layout rebased under `project_dir`:
    /// `frontend/` and `backend/` source roots plus the root-level
    /// `README.md`, `.gitignore`, `LICENSE`, and `docker-compose.yml`.
    #[must_use]
    pub fn rooted_at(project_dir: impl AsRef<Path>) -> Self {
        let dir = project_dir.as_ref();
        Self {
            archive_root: DEFAULT_ARCHIVE_ROOT.to_string(),
            roots: vec![
                SourceRoot::new(dir.join("frontend"), "frontend"),
                SourceRoot::new(dir.join("backend"), "backend"),
            ],
            standalone_files: vec![
                StandaloneFile::new(dir.join("README.md"), "README.md"),
                StandaloneFile::new(dir.join(".gitignore"), ".gitignore"),
                StandaloneFile::new(dir.join("LICENSE"), "LICENSE"),
                StandaloneFile::new(dir.join("docker-compose.yml"), "docker-compose.yml"),
            ],
            exclude_patterns: DEFAULT_EXCLUDE_PATTERNS
                .iter()
                .map(ToString::to_string)
                .collect(),
            compression_level: Some(6),
            missing_policy: MissingPolicy::Skip,
        }
    }

    /// Creates an empty configuration with the given top-level name.
    #[must_use]
    pub fn new(archive_root: impl Into<String>) -> Self {
        Self {
            archive_root: archive_root.into(),
            roots: Vec::new(),
            standalone_files: Vec::new(),
            exclude_patterns: Vec::new(),
            compression_level: Some(6),
            missing_policy: MissingPolicy::Skip,
        }
    }

    /// Sets the source roots.
    #[must_use]
    pub fn with_roots(mut self, roots: Vec<SourceRoot>) -> Self {
        self.roots = roots;
        self
    }

    /// Adds a source root.
    #[must_use]
    pub fn with_root(mut self, root: SourceRoot) -> Self {
        self.roots.push(root);
        self
    }

    /// Sets the standalone files.
    #[must_use]
    pub fn with_standalone_files(mut self, files: Vec<StandaloneFile>) -> Self {
        self.standalone_files = files;
        self
    }

    /// Adds a standalone file.
    #[must_use]
    pub fn with_standalone_file(mut self, file: StandaloneFile) -> Self {
        self.standalone_files.push(file);
        self
    }

    /// Sets the exclusion substrings.
    #[must_use]
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    /// Sets the compression level.
    ///
    /// # Panics
    ///
    /// Panics if the level is not in the range 1-9. Use `validate()` for
    /// non-panicking validation.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        assert!((1..=9).contains(&level), "compression level must be 1-9");
        self.compression_level = Some(level);
        self
    }

    /// Sets the missing-input policy.
    #[must_use]
    pub fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.missing_policy = policy;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Compression level is set but not in range 1-9
    /// - Two standalone files share a destination path
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && !(1..=9).contains(&level)
        {
            return Err(BundleError::InvalidCompressionLevel { level });
        }

        let mut seen = HashSet::new();
        for file in &self.standalone_files {
            if !seen.insert(file.dest.as_str()) {
                return Err(BundleError::DuplicateDestination {
                    dest: file.dest.clone(),
                });
            }
        }

        Ok(())
    }
}
