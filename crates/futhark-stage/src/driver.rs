//! Stage, then compile.

use std::process::ExitStatus;

use crate::error::Result;
use crate::invoke::FutharkInvocation;
use crate::mapping::SourceMapping;
use crate::request::BuildRequest;

/// Result of a build that got as far as running the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The compiler exited with status zero
    Success,
    /// The compiler exited non-zero; `code` is `None` if it was killed by a signal
    CompilerFailed { code: Option<i32> },
}

impl BuildOutcome {
    pub fn from_status(status: ExitStatus) -> Self {
        if status.success() {
            BuildOutcome::Success
        } else {
            BuildOutcome::CompilerFailed { code: status.code() }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BuildOutcome::Success)
    }

    /// Process exit code this outcome maps to.
    pub fn exit_code(&self) -> u8 {
        match self {
            BuildOutcome::Success => 0,
            BuildOutcome::CompilerFailed { .. } => 1,
        }
    }
}

/// Runs one build request.
pub struct Driver {
    request: BuildRequest,
}

impl Driver {
    pub fn new(request: BuildRequest) -> Self {
        Self { request }
    }

    pub fn request(&self) -> &BuildRequest {
        &self.request
    }

    /// Stage all mappings, then invoke the compiler once.
    ///
    /// Staging errors abort before the compiler runs.
    pub fn run(&self, mappings: &[SourceMapping]) -> Result<BuildOutcome> {
        if !self.request.backend.is_known() {
            tracing::warn!(
                "unrecognized futhark backend '{}', passing it through",
                self.request.backend
            );
        }

        let staged = crate::staging::stage_sources(self.request.dir(), mappings)?;
        tracing::debug!("staged {} files into {}", staged.len(), self.request.dir().display());

        let invocation = FutharkInvocation::from_request(&self.request);
        let outcome = BuildOutcome::from_status(invocation.run()?);

        if let BuildOutcome::CompilerFailed { code } = outcome {
            match code {
                Some(code) => tracing::error!("futhark exited with status {}", code),
                None => tracing::error!("futhark was terminated by a signal"),
            }
        }

        Ok(outcome)
    }
}
