use serde::Deserialize;

/// The input received from Claude Code on stdin for a Stop hook.
///
/// Field names match the snake_case JSON that Claude Code sends. Every field
/// is optional and unknown fields are silently ignored: the hook's verdict
/// never depends on stdin, which is only used as log context.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StopInput {
    pub session_id: Option<String>,
    pub transcript_path: Option<String>,
    pub cwd: Option<String>,
    pub permission_mode: Option<PermissionMode>,
    pub hook_event_name: Option<String>,
    /// True when Claude is already continuing because of a previous Stop hook block.
    pub stop_hook_active: bool,
}

/// Claude Code's permission modes.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PermissionMode {
    Default,
    Plan,
    AcceptEdits,
    DontAsk,
    BypassPermissions,
    #[serde(other)]
    Unknown,
}

impl StopInput {
    /// Parse stdin text. Blank input yields an empty `StopInput`.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(StopInput::default());
        }
        serde_json::from_str(raw)
    }
}
