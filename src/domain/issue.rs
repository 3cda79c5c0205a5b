/// A single issue that blocks Claude from stopping.
///
/// Always trimmed, non-empty and single-line, so every issue renders as
/// exactly one bullet in the stop reason.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Issue(String);

/// Errors from constructing an [`Issue`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IssueError {
    #[error("issue text is empty")]
    Empty,
    #[error("issue text spans multiple lines, split it into separate issues")]
    Multiline,
}

impl Issue {
    /// Create from raw text, trimming surrounding whitespace.
    ///
    /// `"  Issue 1 "` → `Issue("Issue 1")`, `"   "` → `Err(IssueError::Empty)`,
    /// `"a\nb"` → `Err(IssueError::Multiline)`.
    pub fn new(raw: &str) -> Result<Self, IssueError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IssueError::Empty);
        }
        if trimmed.contains(['\n', '\r']) {
            return Err(IssueError::Multiline);
        }
        Ok(Issue(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Issue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Issue {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
