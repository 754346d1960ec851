//! External dependency fetch
//!
//! Runs the host package tool with stdout and stderr sharing one pipe, so the
//! captured buffer holds both streams in the order the child wrote them.

use crate::bootstrap::error::{BootstrapError, FetchSnafu, LaunchSnafu};
use snafu::ResultExt;
use std::ffi::{OsStr, OsString};
use std::io;
use std::process::ExitStatus;
use tracing::debug;

/// Package tool invoked to fetch the dependency
pub const FETCH_PROGRAM: &str = "go";

/// Fixed identifier of the Go import formatter the generated code relies on
pub const GOIMPORTS_PACKAGE: &str = "code.google.com/p/go.tools/cmd/goimports";

/// A fetch command: program plus its fixed arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCommand {
    program: OsString,
    args: Vec<OsString>,
}

/// Why a fetch did not succeed
#[derive(Debug)]
pub enum ExitError {
    /// The child could not be started
    Launch(io::Error),
    /// The child exited with a non-zero status or was killed
    Status(ExitStatus),
}

/// Outcome of a single fetch run
///
/// `exit_error` is `Some` iff the child ended abnormally or never started.
#[derive(Debug)]
pub struct FetchResult {
    pub combined_output: Vec<u8>,
    pub exit_error: Option<ExitError>,
}

impl FetchCommand {
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<OsString>,
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `go get code.google.com/p/go.tools/cmd/goimports`
    pub fn goimports() -> Self {
        Self::new(FETCH_PROGRAM, ["get", GOIMPORTS_PACKAGE])
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Command line as the operator would type it
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the command to completion, blocking until the child exits
    pub fn run(&self) -> FetchResult {
        debug!(command = %self.display(), "running fetch command");

        let outcome = duct::cmd(self.program.clone(), self.args.iter().cloned())
            .stdin_null()
            .stderr_to_stdout()
            .stdout_capture()
            .unchecked()
            .run();

        match outcome {
            Ok(output) if output.status.success() => FetchResult {
                combined_output: output.stdout,
                exit_error: None,
            },
            Ok(output) => FetchResult {
                combined_output: output.stdout,
                exit_error: Some(ExitError::Status(output.status)),
            },
            Err(e) => FetchResult {
                combined_output: Vec::new(),
                exit_error: Some(ExitError::Launch(e)),
            },
        }
    }
}

impl FetchResult {
    pub fn succeeded(&self) -> bool {
        self.exit_error.is_none()
    }

    /// Map the outcome onto the bootstrap error taxonomy
    ///
    /// Returns the combined output on success.
    pub fn check(self, command: &FetchCommand) -> Result<Vec<u8>, BootstrapError> {
        match self.exit_error {
            None => Ok(self.combined_output),
            Some(ExitError::Launch(e)) => Err(e).context(LaunchSnafu {
                command: command.display(),
            }),
            Some(ExitError::Status(status)) => FetchSnafu {
                command: command.display(),
                status,
                output: self.combined_output,
            }
            .fail(),
        }
    }
}
