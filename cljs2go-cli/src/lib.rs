//! cljs2go bootstrap library
//!
//! The binary is a thin composition root over these modules.

pub mod bootstrap;
pub mod cli;
pub mod launcher;

pub use bootstrap::{BANNER, BootstrapError, FetchCommand};
pub use cli::Cli;
pub use launcher::Launcher;
