//! Subcommand implementations

pub mod config;
pub mod run;
pub mod topics;

use clap::CommandFactory;
use clap::error::ErrorKind;

use crate::args::Cli;

/// Print a clap-style usage error and exit with status 2
pub(crate) fn usage_error(kind: ErrorKind, message: impl std::fmt::Display) -> ! {
    Cli::command().error(kind, message).exit()
}
