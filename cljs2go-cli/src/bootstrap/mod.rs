//! Bootstrap entry point for cljs2go
//!
//! Announces itself, then makes sure the Go tooling the generated code
//! depends on is installed:
//! - Banner on stdout
//! - `go get` of the goimports package
//! - Fatal error if the fetch fails

pub mod error;
pub mod fetch;

pub use error::BootstrapError;
pub use fetch::{ExitError, FetchCommand, FetchResult};

use std::ffi::OsString;
use std::io::{self, Write};
use tracing::{debug, info};

/// Self-identification line printed on every invocation
pub const BANNER: &str = "ClojureScript to Go [go]";

/// Run the bootstrap against the real host tooling
///
/// `args` is the raw command line; it never changes what is fetched.
pub fn run(args: &[OsString]) -> Result<(), BootstrapError> {
    run_with(&FetchCommand::goimports(), args, &mut io::stdout())
}

/// Run the bootstrap with an explicit fetch command and banner sink
pub fn run_with<W: Write>(
    fetch: &FetchCommand,
    args: &[OsString],
    out: &mut W,
) -> Result<(), BootstrapError> {
    if let Err(e) = writeln!(out, "{BANNER}").and_then(|()| out.flush()) {
        debug!(error = %e, "failed to write banner");
    }

    debug!(ignored_args = args.len(), "arguments are not used by bootstrap");

    let output = fetch.run().check(fetch)?;
    info!(
        command = %fetch.display(),
        output_bytes = output.len(),
        "dependency fetch succeeded"
    );

    Ok(())
}
