pub mod config;
pub mod domain;
pub mod protocol;
pub mod verdict;

pub(crate) mod cli;
pub(crate) mod logging;

use std::path::Path;
use std::process::ExitCode;

/// Run the hook subcommand: read stdin, evaluate issues, write JSON, pick exit code.
///
/// Bridges the binary crate (`main.rs`) to the library without exposing `cli`
/// internals. Library callers should use [`verdict::evaluate`] and
/// [`config::IssueReport`] directly.
pub fn run_hook(config_path: Option<&Path>) -> ExitCode {
    cli::hook::run(config_path)
}

/// Run the check subcommand: validate a config file and print a summary.
pub fn run_check(config_path: &Path) -> ExitCode {
    cli::check::run(config_path)
}

/// Install the stderr tracing subscriber. Silent unless `RUST_LOG` is set.
pub fn init_logging() {
    logging::init();
}
