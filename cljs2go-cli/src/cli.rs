use clap::Parser;
use std::ffi::OsString;

/// ClojureScript to Go bootstrap
///
/// Every command-line token is accepted and handed to the bootstrap, which
/// ignores it.
#[derive(Debug, Parser, Clone)]
#[command(name = "cljs2go", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Raw command-line tokens
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub args: Vec<OsString>,
}
