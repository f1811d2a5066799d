//! Source file to build-directory mappings.

use std::path::{Path, PathBuf};

/// One `-f <src> <relative>` pair: a file to copy and where it lands
/// relative to the build directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMapping {
    /// File to copy from
    pub source: PathBuf,
    /// Destination, relative to the build directory
    pub relative: PathBuf,
}

impl SourceMapping {
    pub fn new(source: impl Into<PathBuf>, relative: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            relative: relative.into(),
        }
    }

    /// Resolve the destination path inside `dir`.
    ///
    /// Follows `Path::join`, so an absolute `relative` replaces `dir`.
    pub fn destination(&self, dir: &Path) -> PathBuf {
        dir.join(&self.relative)
    }
}

impl<S, R> From<(S, R)> for SourceMapping
where
    S: Into<PathBuf>,
    R: Into<PathBuf>,
{
    fn from((source, relative): (S, R)) -> Self {
        Self::new(source, relative)
    }
}
