use crate::domain::Issue;

const BULLET: &str = "• ";

/// Build the multi-line stop reason: the banner, then one bullet per issue.
///
/// `build_stop_reason("Found:", [a, b])` → `"Found:\n• a\n• b"`.
pub(crate) fn build_stop_reason(banner: &str, issues: &[Issue]) -> String {
    let bullets: Vec<String> = issues
        .iter()
        .map(|issue| format!("{BULLET}{issue}"))
        .collect();
    format!("{banner}\n{}", bullets.join("\n"))
}

/// Reason used when the issue list could not be loaded.
pub(crate) fn build_error_reason(banner: &str, error: &dyn std::fmt::Display) -> String {
    format!("{banner}\n{BULLET}Config error: {error}")
}
