//! Running the Futhark compiler.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use crate::error::{Result, StageError};
use crate::request::BuildRequest;

/// A single `futhark <backend> <main> --library -o <output>` call.
#[derive(Debug, Clone)]
pub struct FutharkInvocation {
    program: PathBuf,
    backend: String,
    main: PathBuf,
    output: String,
}

impl FutharkInvocation {
    pub fn from_request(request: &BuildRequest) -> Self {
        Self {
            program: request.futhark.clone(),
            backend: request.backend.as_str().to_string(),
            main: request.main_path(),
            output: request.output.clone(),
        }
    }

    /// Arguments passed to the compiler, in order.
    pub fn args(&self) -> Vec<OsString> {
        vec![
            OsString::from(&self.backend),
            self.main.clone().into_os_string(),
            OsString::from("--library"),
            OsString::from("-o"),
            OsString::from(&self.output),
        ]
    }

    /// The child command. Environment and stdio are inherited.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args());
        cmd
    }

    /// Run the compiler and block until it exits.
    pub fn run(&self) -> Result<ExitStatus> {
        tracing::info!("running {}", self);
        self.command().status().map_err(|source| StageError::Spawn {
            program: self.program.clone(),
            source,
        })
    }
}

impl fmt::Display for FutharkInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in self.args() {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Backend;

    fn request() -> BuildRequest {
        BuildRequest::new(
            "/tmp/build",
            "/usr/bin/futhark",
            Backend::new("c"),
            "libfoo",
            "entry.fut",
        )
    }

    #[test]
    fn test_args_exact() {
        let invocation = FutharkInvocation::from_request(&request());
        assert_eq!(
            invocation.args(),
            vec!["c", "/tmp/build/entry.fut", "--library", "-o", "libfoo"]
                .into_iter()
                .map(OsString::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_command_program_and_args() {
        let cmd = FutharkInvocation::from_request(&request()).command();
        assert_eq!(cmd.get_program(), "/usr/bin/futhark");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, ["c", "/tmp/build/entry.fut", "--library", "-o", "libfoo"]);
        assert_eq!(cmd.get_envs().count(), 0);
        assert!(cmd.get_current_dir().is_none());
    }

    #[test]
    fn test_display() {
        let invocation = FutharkInvocation::from_request(&request());
        assert_eq!(
            invocation.to_string(),
            "/usr/bin/futhark c /tmp/build/entry.fut --library -o libfoo"
        );
    }

    #[test]
    fn test_missing_compiler_is_spawn_error() {
        let tmp = tempfile::tempdir().unwrap();
        let mut req = request();
        req.futhark = tmp.path().join("no-such-futhark");

        let err = FutharkInvocation::from_request(&req).run().unwrap_err();

        assert!(matches!(err, StageError::Spawn { .. }));
    }
}
