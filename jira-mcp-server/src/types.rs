//! The response envelope every tool call produces.
//!
//! A tool result is one text block plus an error flag. Successful reads carry
//! pretty-printed JSON, mutations a confirmation line (followed by the JSON of
//! the affected record where there is one), and failures an `Error: ...` line
//! followed by Jira's error body when Jira sent one.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

use crate::error::ToolError;

/// Text payload and error flag of one tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
  pub text: String,
  pub is_error: bool,
}

impl ToolOutput {
  /// A successful plain-text result.
  pub fn message(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      is_error: false,
    }
  }

  /// A successful result holding `value` as pretty-printed JSON.
  pub fn json<T: Serialize>(value: &T) -> Result<Self, ToolError> {
    Ok(Self::message(to_pretty_json(value)?))
  }

  /// A confirmation line followed by `value` as pretty-printed JSON.
  pub fn confirmed<T: Serialize>(message: &str, value: &T) -> Result<Self, ToolError> {
    Ok(Self::message(format!("{message}\n\n{}", to_pretty_json(value)?)))
  }

  /// An error-flagged result describing `error`.
  pub fn failure(error: &ToolError) -> Self {
    let mut text = format!("Error: {error}");
    if let Some(body) = error.remote_body()
      && let Ok(pretty) = serde_json::to_string_pretty(body)
    {
      text.push_str("\n\n");
      text.push_str(&pretty);
    }
    Self { text, is_error: true }
  }

  /// Convert to the rmcp result type.
  pub fn to_call_tool_result(&self) -> CallToolResult {
    let content = vec![Content::text(self.text.clone())];
    if self.is_error {
      CallToolResult::error(content)
    } else {
      CallToolResult::success(content)
    }
  }
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, ToolError> {
  serde_json::to_string_pretty(value).map_err(ToolError::Serialize)
}

#[cfg(test)]
mod tests {
  use insta::assert_snapshot;
  use jira_mcp_client::{ConfigError, JiraError};
  use serde_json::json;

  use super::*;

  #[test]
  fn test_confirmed_output() {
    let output = ToolOutput::confirmed("Successfully created issue PROJ-1", &json!({ "key": "PROJ-1" })).unwrap();

    assert!(!output.is_error);
    assert_snapshot!(output.text, @r#"
    Successfully created issue PROJ-1

    {
      "key": "PROJ-1"
    }
    "#);
  }

  #[test]
  fn test_failure_without_remote_body() {
    let error = ToolError::UnknownTool("jira_frobnicate".to_string());
    let output = ToolOutput::failure(&error);

    assert!(output.is_error);
    assert_eq!(output.text, "Error: Unknown tool: jira_frobnicate");
  }

  #[test]
  fn test_failure_with_configuration_error() {
    let error = ToolError::Jira(JiraError::Config(ConfigError::Missing {
      missing: vec!["JIRA_PAT"],
    }));
    let output = ToolOutput::failure(&error);

    assert!(output.is_error);
    assert!(output.text.starts_with("Error: JIRA_BASE_URL and JIRA_PAT environment variables are required"));
  }

  #[test]
  fn test_call_tool_result_error_flag() {
    let ok = ToolOutput::message("done").to_call_tool_result();
    assert_eq!(ok.is_error, Some(false));

    let failed = ToolOutput::failure(&ToolError::UnknownTool("x".to_string())).to_call_tool_result();
    assert_eq!(failed.is_error, Some(true));
  }
}
