mod reason;

use std::process::ExitCode;

use crate::config::{ConfigError, IssueReport, DEFAULT_BANNER};
use crate::protocol::StopOutput;

/// Exit status that tells Claude Code to let Claude stop.
pub const EXIT_ALLOW: u8 = 0;

/// Exit status that tells Claude Code to block the stop.
pub const EXIT_BLOCK: u8 = 2;

/// Outcome of a Stop hook run.
#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    /// No issues: Claude may stop. Nothing is printed.
    Allow,
    /// Issues remain: print the output and keep Claude working.
    Block(StopOutput),
}

impl Verdict {
    /// Process exit status for this verdict: 0 to allow, 2 to block.
    pub fn exit_status(&self) -> u8 {
        match self {
            Verdict::Allow => EXIT_ALLOW,
            Verdict::Block(_) => EXIT_BLOCK,
        }
    }

    /// [`Verdict::exit_status`] as a process [`ExitCode`].
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// The JSON payload to print, if any.
    pub fn output(&self) -> Option<&StopOutput> {
        match self {
            Verdict::Allow => None,
            Verdict::Block(output) => Some(output),
        }
    }
}

/// Evaluate an issue report: block when any issue is present, allow otherwise.
///
/// # Examples
///
/// ```
/// use bonzai_burn_hook::config::IssueReport;
/// use bonzai_burn_hook::verdict::{evaluate, Verdict};
///
/// let verdict = evaluate(&IssueReport::builtin());
/// let output = verdict.output().unwrap();
/// assert!(!output.should_continue);
/// assert_eq!(
///     output.stop_reason,
///     "⚠️ BONZAI BURN FOUND ISSUES:\n• Issue 1\n• Issue 2"
/// );
/// assert_eq!(verdict.exit_status(), 2);
///
/// let clean = IssueReport::parse("").unwrap();
/// assert_eq!(evaluate(&clean), Verdict::Allow);
/// ```
pub fn evaluate(report: &IssueReport) -> Verdict {
    if !report.has_issues() {
        return Verdict::Allow;
    }
    let reason = reason::build_stop_reason(&report.banner, &report.issues);
    Verdict::Block(StopOutput::block(reason))
}

/// Verdict for a config that failed to load. Always blocks.
pub fn config_failure(error: &ConfigError) -> Verdict {
    let reason = reason::build_error_reason(DEFAULT_BANNER, error);
    Verdict::Block(StopOutput::block(reason))
}
