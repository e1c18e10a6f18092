//! Failures a tool invocation can end in.

use jira_mcp_client::JiraError;
use serde_json::Value;
use thiserror::Error;

/// Anything that stops a tool call from producing its normal result.
#[derive(Debug, Error)]
pub enum ToolError {
  /// The tool name is not part of the catalog.
  #[error("Unknown tool: {0}")]
  UnknownTool(String),

  /// The arguments do not match the tool's schema.
  #[error("Invalid arguments for {tool}: {source}")]
  InvalidArguments {
    tool: &'static str,
    #[source]
    source: serde_json::Error,
  },

  /// The Jira client failed, including when it is not configured.
  #[error(transparent)]
  Jira(#[from] JiraError),

  /// The result could not be rendered as JSON.
  #[error("Failed to serialize result: {0}")]
  Serialize(#[source] serde_json::Error),
}

impl ToolError {
  /// The structured error body returned by Jira, if any.
  pub const fn remote_body(&self) -> Option<&Value> {
    match self {
      Self::Jira(error) => error.remote_body(),
      _ => None,
    }
  }
}
