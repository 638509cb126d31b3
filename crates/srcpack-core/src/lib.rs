//! In-memory ZIP bundling of a project source tree.
//!
//! `srcpack-core` builds a downloadable ZIP snapshot of a project: a set of
//! source-root directories (filtered through a fixed list of exclusion
//! substrings) plus a handful of standalone root files, all nested under one
//! top-level archive directory. The whole archive is assembled in memory and
//! returned as a byte buffer.
//!
//! # Examples
//!
//! ```no_run
//! use srcpack_core::BundleConfig;
//! use srcpack_core::ProjectBundler;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BundleConfig::default();
//! let bundle = ProjectBundler::new(config).build()?;
//! println!("{} files, {} bytes", bundle.report.files_added, bundle.bytes.len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod bundle;
pub mod config;
pub mod error;
pub mod filters;
pub mod report;
pub mod walker;

// Re-export main API types
pub use bundle::Bundle;
pub use bundle::ProjectBundler;
pub use config::BundleConfig;
pub use config::MissingPolicy;
pub use config::SourceRoot;
pub use config::StandaloneFile;
pub use error::BundleError;
pub use error::Result;
pub use report::BundleReport;
