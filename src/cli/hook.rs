use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

use crate::config::IssueReport;
use crate::protocol::{StopInput, StopOutput};
use crate::verdict::{self, Verdict};

/// Execute the hook subcommand: read stdin, evaluate issues, print JSON, exit 0 or 2.
///
/// Stdin only feeds log context; a missing or malformed payload never changes
/// the verdict. A config that fails to load blocks (fail-closed) so a broken
/// setup cannot silently let Claude stop.
///
/// Panics only on invariant violations (e.g., broken Serialize derive), which
/// indicate programming bugs rather than runtime conditions.
pub fn run(config_path: Option<&Path>) -> ExitCode {
    log_stop_input();

    let verdict = match IssueReport::resolve(config_path) {
        Ok(report) => {
            tracing::debug!(issues = report.issues.len(), "issue report loaded");
            verdict::evaluate(&report)
        }
        Err(e) => {
            tracing::warn!(error = %e, "config failed to load, blocking");
            verdict::config_failure(&e)
        }
    };

    ExitCode::from(emit(&verdict, &mut std::io::stdout().lock()))
}

/// Write the verdict's JSON (if any) and return its exit status.
///
/// A failed write is logged, never fatal: a closed stdout must not turn a
/// block into a crash.
fn emit(verdict: &Verdict, out: &mut impl Write) -> u8 {
    if let Some(output) = verdict.output() {
        if let Err(e) = write_json(out, output) {
            tracing::warn!(error = %e, "failed to write stop output");
        }
    }
    tracing::debug!(
        exit = verdict.exit_status(),
        blocked = matches!(verdict, Verdict::Block(_)),
        "verdict"
    );
    verdict.exit_status()
}

fn log_stop_input() {
    match read_stop_input() {
        Ok(input) => tracing::debug!(
            session_id = input.session_id.as_deref().unwrap_or("-"),
            event = input.hook_event_name.as_deref().unwrap_or("-"),
            stop_hook_active = input.stop_hook_active,
            "stop input"
        ),
        Err(e) => tracing::debug!(error = %e, "ignoring unreadable stop input"),
    }
}

fn read_stop_input() -> Result<StopInput, Box<dyn std::error::Error>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(StopInput::parse(&input)?)
}

/// Serialize a StopOutput to one line of JSON.
///
/// # Panics
///
/// Panics if serialization fails, which cannot happen with the derived
/// `Serialize` impl on a bool and a string.
fn write_json(out: &mut impl Write, output: &StopOutput) -> std::io::Result<()> {
    let json = serde_json::to_string(output).expect("StopOutput serialization cannot fail");
    writeln!(out, "{json}")?;
    out.flush()
}
