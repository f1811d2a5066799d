//! Copying sources into the build directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StageError};
use crate::mapping::SourceMapping;

/// Copy every mapping into `dir`, in order.
///
/// Parent directories are created as needed and existing files are
/// overwritten, so when two mappings share a destination the later one
/// wins. A destination ending in a separator, or naming an existing
/// directory, receives the file under the source's file name. Returns the
/// resolved destination paths in mapping order.
pub fn stage_sources(dir: &Path, mappings: &[SourceMapping]) -> Result<Vec<PathBuf>> {
    let mut staged = Vec::with_capacity(mappings.len());

    for mapping in mappings {
        let mut dst = mapping.destination(dir);

        if let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir_all(parent)?;
        }

        if ends_with_separator(&mapping.relative) {
            create_dir_all(&dst)?;
        }
        if dst.is_dir() {
            if let Some(name) = mapping.source.file_name() {
                dst = dst.join(name);
            }
        }

        if same_file(&mapping.source, &dst) {
            return Err(StageError::SameFile { path: dst });
        }

        let bytes = fs::copy(&mapping.source, &dst).map_err(|source| StageError::Copy {
            from: mapping.source.clone(),
            to: dst.clone(),
            source,
        })?;
        tracing::debug!("staged {} -> {} ({} bytes)", mapping.source.display(), dst.display(), bytes);

        staged.push(dst);
    }

    Ok(staged)
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| StageError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn ends_with_separator(path: &Path) -> bool {
    path.as_os_str()
        .to_string_lossy()
        .ends_with(std::path::is_separator)
}

/// Whether `a` and `b` are the same file on disk, including through links.
#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
