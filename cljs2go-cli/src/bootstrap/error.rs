//! Bootstrap failure taxonomy
//!
//! Both kinds are fatal. The launcher turns them into a diagnostic on stderr
//! and a non-zero exit status.

use snafu::Snafu;
use std::borrow::Cow;
use std::process::ExitStatus;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum BootstrapError {
    /// The fetch command could not be started at all.
    #[snafu(display("failed to launch `{command}`: {source}"))]
    Launch {
        command: String,
        source: std::io::Error,
    },

    /// The fetch command ran but exited abnormally.
    #[snafu(display("`{command}` failed ({status})"))]
    Fetch {
        command: String,
        status: ExitStatus,
        output: Vec<u8>,
    },
}

impl BootstrapError {
    /// Message reported to the operator when the process terminates
    ///
    /// For a failed run this is the tool's combined output, byte for byte.
    /// For a launch failure it is the launch error description.
    pub fn diagnostic(&self) -> Cow<'_, [u8]> {
        match self {
            Self::Launch { .. } => Cow::Owned(self.to_string().into_bytes()),
            Self::Fetch { output, .. } => Cow::Borrowed(output),
        }
    }
}
