//! In-memory ZIP bundle creation.
//!
//! The bundler walks each configured source root with exclusion filtering,
//! then copies the standalone files in unfiltered, writing everything into a
//! deflate-compressed ZIP held entirely in memory.

use crate::BundleError;
use crate::Result;
use crate::config::BundleConfig;
use crate::config::MissingPolicy;
use crate::report::BundleReport;
use crate::walker::RootWalker;
use std::collections::HashSet;
use std::fs::File;
use std::io::Cursor;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// A completed bundle: the full archive bytes plus build statistics.
#[derive(Debug, Clone)]
pub struct Bundle {
    /// The complete ZIP archive.
    pub bytes: Vec<u8>,

    /// Statistics about the build.
    pub report: BundleReport,
}

/// Builds project bundles from a [`BundleConfig`].
///
/// Each call to [`build`](Self::build) constructs the archive fresh from the
/// current filesystem state; nothing is cached between builds, so concurrent
/// builds are fully independent.
///
/// # Examples
///
/// ```no_run
/// use srcpack_core::BundleConfig;
/// use srcpack_core::ProjectBundler;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let bundler = ProjectBundler::new(BundleConfig::rooted_at("/srv/project"));
/// let bundle = bundler.build()?;
/// std::fs::write("project.zip", &bundle.bytes)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ProjectBundler {
    config: BundleConfig,
}

impl ProjectBundler {
    /// Creates a bundler with the given configuration.
    #[must_use]
    pub fn new(config: BundleConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    /// Builds the archive and returns its full byte content.
    ///
    /// Source roots are walked top-down with exclusion pruning; standalone
    /// files are copied in without filtering. Under the default
    /// [`MissingPolicy::Skip`] an absent input contributes nothing and the
    /// build still succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration fails validation
    /// - A configured input is absent under [`MissingPolicy::Error`]
    /// - Reading a file or writing the archive fails
    pub fn build(&self) -> Result<Bundle> {
        self.config.validate()?;

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let mut report = BundleReport::default();
        let start = std::time::Instant::now();

        let options = match self.config.compression_level {
            Some(level) => SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .compression_level(Some(i64::from(level))),
            None => SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
        };

        // Destination uniqueness guard: roots and standalone files must not
        // collide on the same archive path.
        let mut seen = HashSet::new();
        let mut buffer = vec![0u8; 64 * 1024]; // 64 KB

        for root in &self.config.roots {
            if !root.path.is_dir() {
                self.handle_missing(&root.path, &mut report)?;
                continue;
            }

            let walker = RootWalker::new(
                root,
                &self.config.archive_root,
                &self.config.exclude_patterns,
            );
            for entry in walker.walk() {
                let entry = entry?;
                add_file(
                    &mut zip,
                    &entry.path,
                    &entry.archive_path,
                    &options,
                    &mut seen,
                    &mut report,
                    &mut buffer,
                )?;
            }
        }

        // Standalone files bypass exclusion filtering entirely.
        for file in &self.config.standalone_files {
            if !file.source.is_file() {
                self.handle_missing(&file.source, &mut report)?;
                continue;
            }

            let dest = format!("{}/{}", self.config.archive_root, file.dest);
            add_file(
                &mut zip,
                &file.source,
                &dest,
                &options,
                &mut seen,
                &mut report,
                &mut buffer,
            )?;
        }

        let cursor = zip
            .finish()
            .map_err(|e| std::io::Error::other(format!("failed to finish ZIP archive: {e}")))?;

        report.duration = start.elapsed();

        Ok(Bundle {
            bytes: cursor.into_inner(),
            report,
        })
    }

    /// Applies the configured missing-input policy.
    fn handle_missing(&self, path: &Path, report: &mut BundleReport) -> Result<()> {
        match self.config.missing_policy {
            MissingPolicy::Skip => {
                report.inputs_skipped += 1;
                report.add_warning(format!("Skipped missing input: {}", path.display()));
                Ok(())
            }
            MissingPolicy::Error => Err(BundleError::SourceNotFound {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Writes a single file into the archive under `archive_name`.
///
/// Duplicate destinations are skipped with a warning so no two logical
/// inputs ever produce the same entry path.
fn add_file<W: Write + std::io::Seek>(
    zip: &mut ZipWriter<W>,
    file_path: &Path,
    archive_name: &str,
    options: &SimpleFileOptions,
    seen: &mut HashSet<String>,
    report: &mut BundleReport,
    buffer: &mut [u8],
) -> Result<()> {
    if !seen.insert(archive_name.to_string()) {
        report.duplicates_skipped += 1;
        report.add_warning(format!("Skipped duplicate destination: {archive_name}"));
        return Ok(());
    }

    let mut file = File::open(file_path)?;

    zip.start_file(archive_name, *options)
        .map_err(|e| std::io::Error::other(format!("failed to start file in ZIP: {e}")))?;

    let mut bytes_written = 0u64;
    loop {
        let bytes_read = file.read(buffer)?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])?;
        bytes_written += bytes_read as u64;
    }

    report.files_added += 1;
    report.bytes_written += bytes_written;

    Ok(())
}
