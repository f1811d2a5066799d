//! Build request and backend identifiers.

use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Backends the Futhark compiler ships with.
pub const KNOWN_BACKENDS: &[&str] = &[
    "c",
    "multicore",
    "ispc",
    "opencl",
    "cuda",
    "hip",
    "wasm",
    "wasm-multicore",
    "python",
    "pyopencl",
];

/// A Futhark backend identifier, passed to the compiler verbatim.
///
/// Identifiers outside [`KNOWN_BACKENDS`] are still accepted; newer
/// compilers may support backends this list does not name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Backend(String);

impl Backend {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the backends in [`KNOWN_BACKENDS`].
    pub fn is_known(&self) -> bool {
        KNOWN_BACKENDS.contains(&self.0.as_str())
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Backend {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Everything needed to run one library build.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// Directory the sources are staged into
    pub dir: PathBuf,
    /// Path to the futhark compiler binary
    pub futhark: PathBuf,
    /// Compilation backend
    pub backend: Backend,
    /// Output basename, passed to `-o`
    pub output: String,
    /// Main source file, relative to `dir`
    pub main: PathBuf,
}

impl BuildRequest {
    pub fn new(
        dir: impl Into<PathBuf>,
        futhark: impl Into<PathBuf>,
        backend: Backend,
        output: impl Into<String>,
        main: impl Into<PathBuf>,
    ) -> Self {
        Self {
            dir: dir.into(),
            futhark: futhark.into(),
            backend,
            output: output.into(),
            main: main.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The main source file resolved against the build directory.
    pub fn main_path(&self) -> PathBuf {
        self.dir.join(&self.main)
    }
}
