//! Dispatch of tool calls onto the Jira client.
//!
//! This is the one place where failures turn into results: whatever goes
//! wrong during a call ends up as an error-flagged [`ToolOutput`], never as a
//! protocol-level error.

use jira_mcp_client::JiraClient;
use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::catalog::ToolName;
use crate::context::ServerContext;
use crate::error::ToolError;
use crate::tools::comments::AddCommentParams;
use crate::tools::issues::{
  AssignIssueParams, CreateIssueParams, IssueKeyParams, SearchIssuesParams, TransitionIssueParams, UpdateIssueParams,
};
use crate::tools::projects::ProjectKeyParams;
use crate::types::ToolOutput;

/// Run the tool called `name` with `arguments` and render the outcome.
pub async fn dispatch(context: &ServerContext, name: &str, arguments: JsonObject) -> ToolOutput {
  info!("Calling tool {}", name);

  match route(context, name, arguments).await {
    Ok(output) => output,
    Err(error) => {
      warn!("Tool {} failed: {}", name, error);
      ToolOutput::failure(&error)
    }
  }
}

async fn route(context: &ServerContext, name: &str, arguments: JsonObject) -> Result<ToolOutput, ToolError> {
  let tool: ToolName = name.parse()?;
  let jira = context.jira.client()?;
  debug!("Dispatching {} against {}", tool, jira.base_url());

  match tool {
    ToolName::GetIssue => {
      let params: IssueKeyParams = parse_arguments(tool, arguments)?;
      ToolOutput::json(&jira.get_issue(&params.issue_key).await?)
    }
    ToolName::SearchIssues => {
      let params: SearchIssuesParams = parse_arguments(tool, arguments)?;
      let issues = jira.search_issues(&params.jql, Some(params.max_results)).await?;
      ToolOutput::json(&issues)
    }
    ToolName::CreateIssue => {
      let params: CreateIssueParams = parse_arguments(tool, arguments)?;
      let issue = jira.create_issue(&params.into()).await?;
      ToolOutput::confirmed(&format!("Successfully created issue {}", issue.key), &issue)
    }
    ToolName::UpdateIssue => {
      let params: UpdateIssueParams = parse_arguments(tool, arguments)?;
      let (issue_key, input) = params.into_parts();
      let issue = jira.update_issue(&issue_key, &input).await?;
      ToolOutput::confirmed(&format!("Successfully updated issue {}", issue.key), &issue)
    }
    ToolName::TransitionIssue => {
      let params: TransitionIssueParams = parse_arguments(tool, arguments)?;
      transition(jira, &params).await
    }
    ToolName::AddComment => {
      let params: AddCommentParams = parse_arguments(tool, arguments)?;
      let comment = jira.add_comment(&params.issue_key, &params.comment).await?;
      ToolOutput::confirmed(&format!("Successfully added comment to {}", params.issue_key), &comment)
    }
    ToolName::GetComments => {
      let params: IssueKeyParams = parse_arguments(tool, arguments)?;
      ToolOutput::json(&jira.get_comments(&params.issue_key).await?)
    }
    ToolName::GetProjects => ToolOutput::json(&jira.get_projects().await?),
    ToolName::GetProject => {
      let params: ProjectKeyParams = parse_arguments(tool, arguments)?;
      ToolOutput::json(&jira.get_project(&params.project_key).await?)
    }
    ToolName::GetIssueTypes => {
      let params: ProjectKeyParams = parse_arguments(tool, arguments)?;
      ToolOutput::json(&jira.get_issue_types(&params.project_key).await?)
    }
    ToolName::AssignIssue => {
      let params: AssignIssueParams = parse_arguments(tool, arguments)?;
      jira.assign_issue(&params.issue_key, &params.assignee).await?;
      Ok(ToolOutput::message(format!(
        "Successfully assigned {} to {}",
        params.issue_key, params.assignee
      )))
    }
    ToolName::DeleteIssue => {
      let params: IssueKeyParams = parse_arguments(tool, arguments)?;
      jira.delete_issue(&params.issue_key).await?;
      Ok(ToolOutput::message(format!("Successfully deleted issue {}", params.issue_key)))
    }
    ToolName::GetCurrentUser => ToolOutput::json(&jira.get_current_user().await?),
  }
}

async fn transition(jira: &JiraClient, params: &TransitionIssueParams) -> Result<ToolOutput, ToolError> {
  jira.transition_issue(&params.issue_key, &params.status).await?;
  let issue = jira.get_issue(&params.issue_key).await?;
  ToolOutput::confirmed(
    &format!("Successfully moved {} to {}", params.issue_key, params.status),
    &issue,
  )
}

fn parse_arguments<T: DeserializeOwned>(tool: ToolName, arguments: JsonObject) -> Result<T, ToolError> {
  serde_json::from_value(Value::Object(arguments)).map_err(|source| ToolError::InvalidArguments {
    tool: tool.as_str(),
    source,
  })
}

#[cfg(test)]
mod tests {
  use jira_mcp_client::{ConfigError, JiraConfig};
  use serde_json::json;

  use super::*;
  use crate::context::JiraConnection;

  fn arguments(value: Value) -> JsonObject {
    match value {
      Value::Object(object) => object,
      other => panic!("expected an object, got {other}"),
    }
  }

  fn unconfigured() -> ServerContext {
    ServerContext::new(JiraConnection::from_config(Err(ConfigError::Missing {
      missing: vec!["JIRA_BASE_URL", "JIRA_PAT"],
    })))
  }

  #[tokio::test]
  async fn test_unknown_tool_is_reported_before_configuration() {
    let output = dispatch(&unconfigured(), "jira_frobnicate", JsonObject::new()).await;

    assert!(output.is_error);
    assert_eq!(output.text, "Error: Unknown tool: jira_frobnicate");
  }

  #[tokio::test]
  async fn test_unconfigured_server_fails_every_tool() {
    let context = unconfigured();

    for tool in ToolName::ALL {
      let output = dispatch(&context, tool.as_str(), JsonObject::new()).await;
      assert!(output.is_error, "{tool}");
      assert!(
        output
          .text
          .starts_with("Error: JIRA_BASE_URL and JIRA_PAT environment variables are required"),
        "{tool}: {}",
        output.text
      );
    }
  }

  #[tokio::test]
  async fn test_missing_required_argument() {
    // Nothing listens here; argument parsing fails before any request is sent.
    let config = JiraConfig::new("http://127.0.0.1:9", "token");
    let context = ServerContext::new(JiraConnection::from_config(config));

    let output = dispatch(&context, "jira_get_issue", arguments(json!({ "key": "PROJ-1" }))).await;

    assert!(output.is_error);
    assert!(output.text.starts_with("Error: Invalid arguments for jira_get_issue:"));
    assert!(output.text.contains("issueKey"));
  }
}
