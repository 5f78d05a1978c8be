//! Error types for the scaffolding flow

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the scaffolding flow.
///
/// `Cancelled` is not an exceptional condition: callers render it as a plain
/// message and a non-zero exit, never a stack trace.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Project name rejected by validation
    #[error("invalid project name: {0}")]
    Validation(String),

    /// User declined a prompt or aborted a selection
    #[error("project creation cancelled")]
    Cancelled,

    /// Packaged template assets missing from every candidate location
    #[error("template '{template}' not found (searched {})", format_searched(.searched))]
    TemplateNotFound {
        template: String,
        searched: Vec<PathBuf>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// package.json could not be parsed or re-serialized
    #[error("failed to process package.json: {0}")]
    Manifest(#[from] serde_json::Error),
}

fn format_searched(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_not_found_lists_candidates() {
        let err = ScaffoldError::TemplateNotFound {
            template: "web".to_string(),
            searched: vec![PathBuf::from("/opt/pkg/templates/web"), PathBuf::from("/work/templates/web")],
        };
        let msg = err.to_string();
        assert!(msg.contains("'web'"));
        assert!(msg.contains("/opt/pkg/templates/web"));
        assert!(msg.contains("/work/templates/web"));
    }

    #[test]
    fn cancelled_renders_without_detail() {
        assert_eq!(
            ScaffoldError::Cancelled.to_string(),
            "project creation cancelled"
        );
    }
}
