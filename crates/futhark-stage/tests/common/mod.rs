//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use rand::Rng;

/// Serializes tests that write and then exec a script, so a fork in a
/// parallel test cannot hold the script open for writing (ETXTBSY).
static EXEC_LOCK: Mutex<()> = Mutex::new(());

pub fn exec_lock() -> MutexGuard<'static, ()> {
    EXEC_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// A stand-in for the futhark binary that records its arguments and
/// exits with a fixed status.
pub struct FakeFuthark {
    pub program: PathBuf,
    pub args_file: PathBuf,
}

impl FakeFuthark {
    #[cfg(unix)]
    pub fn install(dir: &Path, status: i32) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let program = dir.join("futhark");
        let args_file = dir.join("futhark-args.txt");
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\nexit {}\n",
            args_file.display(),
            status
        );
        fs::write(&program, script).unwrap();
        fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();

        Self { program, args_file }
    }

    pub fn was_invoked(&self) -> bool {
        self.args_file.exists()
    }

    /// Arguments from the last invocation, one per entry.
    pub fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(&self.args_file)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Write `len` random bytes to `path`, creating parents.
pub fn write_random(path: &Path, len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..len).map(|_| rng.r#gen()).collect();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, &bytes).unwrap();
    bytes
}
