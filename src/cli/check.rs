use std::path::Path;
use std::process::ExitCode;

use crate::config::IssueReport;

/// Execute the check subcommand: validate a config and print what the hook would do.
///
/// Errors are rendered as miette diagnostics on stderr.
pub fn run(config_path: &Path) -> ExitCode {
    match IssueReport::load(config_path) {
        Ok(report) => {
            println!("{}", summary(&report));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::FAILURE
        }
    }
}

fn summary(report: &IssueReport) -> String {
    let count = report.issues.len();
    let plural = if count == 1 { "" } else { "s" };
    let outcome = if report.has_issues() { "block" } else { "allow" };
    format!("ok: {count} issue{plural}, hook would {outcome}")
}
