//! Parsing for the `issues { … }` section.

use super::document::ParseNode;
use super::ConfigError;
use crate::domain::Issue;

/// Collect every issue from an `issues` node, in document order.
///
/// Each `issue` child contributes all of its string arguments, so
/// `issue "a"` + `issue "b" "c"` yields `[a, b, c]`. A bare `issues`
/// node without a block contributes nothing.
pub(super) fn parse_issues_section(section: &ParseNode<'_>) -> Result<Vec<Issue>, ConfigError> {
    if section.entry_count() > 0 {
        return Err(ConfigError::ValidationError(format!(
            "line {}: issues takes no arguments, list them as `issue` nodes inside its block",
            section.line()
        )));
    }

    let Some(children) = section.children() else {
        return Ok(Vec::new());
    };

    let mut issues = Vec::new();
    for node in children.nodes() {
        let line = node.line();
        if node.name() != "issue" {
            return Err(ConfigError::ValidationError(format!(
                "line {line}: unknown node '{}' in issues (expected 'issue')",
                node.name()
            )));
        }
        if node.children().is_some() {
            return Err(ConfigError::ValidationError(format!(
                "line {line}: issue does not take a children block"
            )));
        }

        let values = node.string_values();
        if values.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "line {line}: issue has no text"
            )));
        }
        if values.len() != node.entry_count() {
            return Err(ConfigError::ValidationError(format!(
                "line {line}: issue arguments must be strings"
            )));
        }

        for raw in values {
            let issue = Issue::new(raw)
                .map_err(|e| ConfigError::ValidationError(format!("line {line}: {e}")))?;
            issues.push(issue);
        }
    }
    Ok(issues)
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigError, IssueReport};

    fn issues_err(body: &str) -> String {
        let content = format!("issues {{\n{body}\n}}");
        match IssueReport::parse(&content) {
            Err(ConfigError::ValidationError(msg)) => msg,
            other => panic!("expected ValidationError, got: {other:?}"),
        }
    }

    #[test]
    fn issue_text_is_trimmed() {
        let report = IssueReport::parse("issues {\n    issue \"  spaced out  \"\n}").unwrap();
        assert_eq!(report.issues[0], "spaced out");
    }

    #[test]
    fn bare_issues_node_is_empty() {
        let report = IssueReport::parse("issues").unwrap();
        assert!(report.issues.is_empty());
    }

    #[test]
    fn issues_with_arguments_is_rejected() {
        let err = match IssueReport::parse(r#"issues "a""#) {
            Err(ConfigError::ValidationError(msg)) => msg,
            other => panic!("expected ValidationError, got: {other:?}"),
        };
        assert!(err.contains("takes no arguments"), "got: {err}");
    }

    #[test]
    fn unknown_child_node_is_rejected() {
        let err = issues_err(r#"    problem "a""#);
        assert!(err.contains("unknown node 'problem'"), "got: {err}");
        assert!(err.contains("line 2"), "should include line number, got: {err}");
    }

    #[test]
    fn issue_without_text_is_rejected() {
        let err = issues_err("    issue");
        assert!(err.contains("issue has no text"), "got: {err}");
        assert!(err.contains("line 2"), "should include line number, got: {err}");
    }

    #[test]
    fn blank_issue_is_rejected() {
        let err = issues_err("    issue \"ok\"\n    issue \"   \"");
        assert!(err.contains("issue text is empty"), "got: {err}");
        assert!(err.contains("line 3"), "should include line number, got: {err}");
    }

    #[test]
    fn multiline_issue_is_rejected() {
        let err = issues_err(r#"    issue "a\nb""#);
        assert!(err.contains("spans multiple lines"), "got: {err}");
        assert!(err.contains("line 2"), "should include line number, got: {err}");
    }

    #[test]
    fn non_string_argument_is_rejected() {
        let err = issues_err(r#"    issue "a" 42"#);
        assert!(err.contains("must be strings"), "got: {err}");
    }

    #[test]
    fn property_argument_is_rejected() {
        let err = issues_err(r#"    issue "a" severity="high""#);
        assert!(err.contains("must be strings"), "got: {err}");
    }

    #[test]
    fn issue_with_children_is_rejected() {
        let err = issues_err("    issue \"a\" {\n        detail \"b\"\n    }");
        assert!(err.contains("children block"), "got: {err}");
    }
}
