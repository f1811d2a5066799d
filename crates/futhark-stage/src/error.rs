//! Error types for staging and compiler invocation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a build before the compiler can report on it.
///
/// A compiler that runs and exits non-zero is not an error here; see
/// [`crate::BuildOutcome::CompilerFailed`].
#[derive(Debug, Error)]
pub enum StageError {
    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy {} to {}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is both the source and the destination", .path.display())]
    SameFile { path: PathBuf },

    #[error("failed to start futhark compiler {}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StageError>;
