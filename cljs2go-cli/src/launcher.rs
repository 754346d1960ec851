//! Process launcher
//!
//! Owns the process-fatal side of bootstrap: the entry point is handed in
//! explicitly and any error it returns becomes a diagnostic on stderr plus a
//! failing exit status.

use crate::bootstrap::BootstrapError;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

pub struct Launcher<F> {
    entry: F,
}

impl<F> Launcher<F>
where
    F: Fn(&[OsString]) -> Result<(), BootstrapError>,
{
    pub fn new(entry: F) -> Self {
        Self { entry }
    }

    /// Invoke the entry point, reporting failure on stderr
    pub fn launch(&self, args: &[OsString]) -> ExitCode {
        self.launch_with(args, &mut io::stderr().lock())
    }

    /// Invoke the entry point, reporting failure on `diag`
    pub fn launch_with<W: Write>(&self, args: &[OsString], diag: &mut W) -> ExitCode {
        match (self.entry)(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                debug!(error = %e, "bootstrap failed");
                if let Err(write_err) = write_diagnostic(diag, &e.diagnostic()) {
                    debug!(error = %write_err, "failed to write diagnostic");
                }
                ExitCode::FAILURE
            }
        }
    }
}

/// Write the message, terminated by exactly one newline unless empty
fn write_diagnostic<W: Write>(diag: &mut W, message: &[u8]) -> io::Result<()> {
    if message.is_empty() {
        return Ok(());
    }
    diag.write_all(message)?;
    if message.last() != Some(&b'\n') {
        diag.write_all(b"\n")?;
    }
    diag.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::error::FetchSnafu;
    use std::cell::Cell;
    use std::io::ErrorKind;
    use std::process::ExitStatus;

    #[cfg(unix)]
    fn failed_status() -> ExitStatus {
        use std::os::unix::process::ExitStatusExt;
        ExitStatus::from_raw(1 << 8)
    }

    #[cfg(windows)]
    fn failed_status() -> ExitStatus {
        use std::os::windows::process::ExitStatusExt;
        ExitStatus::from_raw(1)
    }

    fn launch_failure() -> BootstrapError {
        BootstrapError::Launch {
            command: "go get pkg".to_string(),
            source: io::Error::new(ErrorKind::NotFound, "not found"),
        }
    }

    #[test]
    fn test_success_writes_nothing() {
        let launcher = Launcher::new(|_: &[OsString]| Ok(()));
        let mut diag = Vec::new();

        let code = launcher.launch_with(&[], &mut diag);

        assert_eq!(code, ExitCode::SUCCESS);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_failure_reports_diagnostic() {
        let launcher = Launcher::new(|_: &[OsString]| Err(launch_failure()));
        let mut diag = Vec::new();

        let code = launcher.launch_with(&[], &mut diag);

        assert_eq!(code, ExitCode::FAILURE);
        let text = String::from_utf8(diag).unwrap();
        assert!(text.starts_with("failed to launch `go get pkg`"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_entry_receives_args_and_runs_once() {
        let calls = Cell::new(0);
        let launcher = Launcher::new(|args: &[OsString]| {
            calls.set(calls.get() + 1);
            assert_eq!(args, ["x", "--y"]);
            Err(launch_failure())
        });

        let args: Vec<OsString> = vec!["x".into(), "--y".into()];
        let _ = launcher.launch_with(&args, &mut Vec::new());

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_write_diagnostic_newline_handling() {
        let mut out = Vec::new();
        write_diagnostic(&mut out, b"network unreachable").unwrap();
        assert_eq!(out, b"network unreachable\n");

        let mut out = Vec::new();
        write_diagnostic(&mut out, b"already terminated\n").unwrap();
        assert_eq!(out, b"already terminated\n");

        let mut out = Vec::new();
        write_diagnostic(&mut out, b"").unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_failure_reports_raw_output_bytes() {
        let launcher = Launcher::new(|_: &[OsString]| {
            FetchSnafu {
                command: "go get pkg",
                status: failed_status(),
                output: b"caf\xe9 down".to_vec(),
            }
            .fail()
        });
        let mut diag = Vec::new();

        let code = launcher.launch_with(&[], &mut diag);

        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(diag, b"caf\xe9 down\n");
    }
}
