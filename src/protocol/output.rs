use serde::Serialize;

/// The output returned to Claude Code on stdout when the hook blocks.
///
/// Serializes as `{"continue": false, "stopReason": "..."}`.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StopOutput {
    #[serde(rename = "continue")]
    pub should_continue: bool,
    pub stop_reason: String,
}

impl StopOutput {
    /// Output that keeps Claude working, with the given reason.
    pub fn block(reason: impl Into<String>) -> Self {
        StopOutput {
            should_continue: false,
            stop_reason: reason.into(),
        }
    }
}
