//! Errors raised while loading a recipe catalog.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Catalog loading failures.
///
/// Matching itself never fails; only reading the data file can.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The catalog file is not valid TOML or has the wrong shape
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// A recipe entry has an empty or whitespace-only name
    #[error("recipe #{index} has a blank name")]
    BlankName { index: usize },
}
