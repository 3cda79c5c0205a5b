mod document;
mod issues;

use std::path::{Path, PathBuf};

use crate::domain::Issue;

use document::ConfigDocument;

/// Banner printed as the first line of every stop reason.
pub const DEFAULT_BANNER: &str = "⚠️ BONZAI BURN FOUND ISSUES:";

/// Issues reported when the hook runs without a config file.
pub const BUILTIN_ISSUES: [&str; 2] = ["Issue 1", "Issue 2"];

/// The issues the hook checks, plus the banner that heads the stop reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueReport {
    pub banner: String,
    pub issues: Vec<Issue>,
}

/// Errors that can occur when loading or parsing a config file.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    #[diagnostic(
        code(bonzai_burn::config::not_found),
        help("pass an existing KDL file to --config")
    )]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    #[diagnostic(code(bonzai_burn::config::read))]
    ReadError(#[from] std::io::Error),
    #[error("invalid KDL syntax: {0}")]
    #[diagnostic(code(bonzai_burn::config::syntax))]
    ParseError(#[diagnostic_source] kdl::KdlError),
    #[error("invalid config: {0}")]
    #[diagnostic(
        code(bonzai_burn::config::invalid),
        help("use `banner \"...\"` and an `issues` block of `issue \"...\"` nodes")
    )]
    ValidationError(String),
}

impl IssueReport {
    /// The report used when no config file is given.
    pub fn builtin() -> Self {
        IssueReport {
            banner: DEFAULT_BANNER.to_string(),
            issues: BUILTIN_ISSUES
                .iter()
                .filter_map(|raw| Issue::new(raw).ok())
                .collect(),
        }
    }

    /// Load a report from a KDL file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let doc = ConfigDocument::load(path)?;
        Self::from_document(&doc)
    }

    /// Parse a KDL string into a report.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let doc = ConfigDocument::parse(content)?;
        Self::from_document(&doc)
    }

    /// Load from `path` when given, otherwise fall back to [`IssueReport::builtin`].
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::builtin()),
        }
    }

    /// Whether the hook would block with this report.
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    fn from_document(doc: &ConfigDocument) -> Result<Self, ConfigError> {
        let mut banner: Option<(String, usize)> = None;
        let mut issues = Vec::new();

        for node in doc.root().nodes() {
            let line = node.line();
            match node.name() {
                "banner" => {
                    if let Some((_, first)) = &banner {
                        return Err(ConfigError::ValidationError(format!(
                            "line {line}: banner already defined on line {first}"
                        )));
                    }
                    banner = Some((parse_banner(&node)?, line));
                }
                "issues" => issues.extend(issues::parse_issues_section(&node)?),
                other => {
                    return Err(ConfigError::ValidationError(format!(
                        "line {line}: unknown node '{other}' (expected 'banner' or 'issues')"
                    )))
                }
            }
        }

        Ok(IssueReport {
            banner: banner
                .map(|(text, _)| text)
                .unwrap_or_else(|| DEFAULT_BANNER.to_string()),
            issues,
        })
    }
}

fn parse_banner(node: &document::ParseNode<'_>) -> Result<String, ConfigError> {
    let line = node.line();
    let values = node.string_values();
    if values.len() != 1 || node.entry_count() != 1 || node.children().is_some() {
        return Err(ConfigError::ValidationError(format!(
            "line {line}: banner takes exactly one string"
        )));
    }
    let text = values[0].trim();
    if text.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "line {line}: banner is empty"
        )));
    }
    Ok(text.to_string())
}
