//! The fixed catalog of tools this server exposes.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool, ToolAnnotations};
use schemars::JsonSchema;
use serde_json::Value;

use crate::error::ToolError;
use crate::tools::NoParams;
use crate::tools::comments::AddCommentParams;
use crate::tools::issues::{
  AssignIssueParams, CreateIssueParams, IssueKeyParams, SearchIssuesParams, TransitionIssueParams, UpdateIssueParams,
};
use crate::tools::projects::ProjectKeyParams;

/// Every operation the router can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
  GetIssue,
  SearchIssues,
  CreateIssue,
  UpdateIssue,
  TransitionIssue,
  AddComment,
  GetComments,
  GetProjects,
  GetProject,
  GetIssueTypes,
  AssignIssue,
  DeleteIssue,
  GetCurrentUser,
}

impl ToolName {
  /// All tools, in the order they are listed to clients.
  pub const ALL: [Self; 13] = [
    Self::GetIssue,
    Self::SearchIssues,
    Self::CreateIssue,
    Self::UpdateIssue,
    Self::TransitionIssue,
    Self::AddComment,
    Self::GetComments,
    Self::GetProjects,
    Self::GetProject,
    Self::GetIssueTypes,
    Self::AssignIssue,
    Self::DeleteIssue,
    Self::GetCurrentUser,
  ];

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::GetIssue => "jira_get_issue",
      Self::SearchIssues => "jira_search_issues",
      Self::CreateIssue => "jira_create_issue",
      Self::UpdateIssue => "jira_update_issue",
      Self::TransitionIssue => "jira_transition_issue",
      Self::AddComment => "jira_add_comment",
      Self::GetComments => "jira_get_comments",
      Self::GetProjects => "jira_get_projects",
      Self::GetProject => "jira_get_project",
      Self::GetIssueTypes => "jira_get_issue_types",
      Self::AssignIssue => "jira_assign_issue",
      Self::DeleteIssue => "jira_delete_issue",
      Self::GetCurrentUser => "jira_get_current_user",
    }
  }

  pub const fn description(self) -> &'static str {
    match self {
      Self::GetIssue => "Get details of a specific Jira issue by its key (e.g., PROJ-123)",
      Self::SearchIssues => {
        "Search for Jira issues using JQL (Jira Query Language). Examples: \"project = PROJ AND status = Open\", \
         \"assignee = currentUser() AND status != Done\""
      }
      Self::CreateIssue => "Create a new Jira issue in a specified project",
      Self::UpdateIssue => {
        "Update an existing Jira issue. Only the fields given are changed; a status moves the issue through its \
         workflow after the field update"
      }
      Self::TransitionIssue => {
        "Move a Jira issue to another workflow status (case-insensitive). Fails if the status is not reachable \
         from the current one"
      }
      Self::AddComment => "Add a comment to a Jira issue",
      Self::GetComments => "Get all comments from a Jira issue",
      Self::GetProjects => "List all available Jira projects",
      Self::GetProject => "Get details of a specific Jira project",
      Self::GetIssueTypes => "Get available issue types for a project",
      Self::AssignIssue => "Assign a Jira issue to a user",
      Self::DeleteIssue => "Delete a Jira issue permanently",
      Self::GetCurrentUser => "Get information about the currently authenticated user",
    }
  }

  /// JSON schema of the tool's arguments.
  pub fn input_schema(self) -> Arc<JsonObject> {
    match self {
      Self::GetIssue | Self::GetComments | Self::DeleteIssue => schema_for::<IssueKeyParams>(),
      Self::SearchIssues => schema_for::<SearchIssuesParams>(),
      Self::CreateIssue => schema_for::<CreateIssueParams>(),
      Self::UpdateIssue => schema_for::<UpdateIssueParams>(),
      Self::TransitionIssue => schema_for::<TransitionIssueParams>(),
      Self::AddComment => schema_for::<AddCommentParams>(),
      Self::GetProject | Self::GetIssueTypes => schema_for::<ProjectKeyParams>(),
      Self::AssignIssue => schema_for::<AssignIssueParams>(),
      Self::GetProjects | Self::GetCurrentUser => schema_for::<NoParams>(),
    }
  }

  const fn read_only(self) -> bool {
    matches!(
      self,
      Self::GetIssue
        | Self::SearchIssues
        | Self::GetComments
        | Self::GetProjects
        | Self::GetProject
        | Self::GetIssueTypes
        | Self::GetCurrentUser
    )
  }

  /// The rmcp tool description advertised by `tools/list`.
  pub fn to_tool(self) -> Tool {
    let mut tool = Tool::new(self.as_str(), self.description(), self.input_schema());
    let annotations = if self.read_only() {
      ToolAnnotations::new().read_only(true)
    } else {
      ToolAnnotations::new()
        .read_only(false)
        .destructive(self == Self::DeleteIssue)
    };
    tool.annotations = Some(annotations);
    tool
  }
}

impl fmt::Display for ToolName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ToolName {
  type Err = ToolError;

  fn from_str(name: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|tool| tool.as_str() == name)
      .ok_or_else(|| ToolError::UnknownTool(name.to_string()))
  }
}

/// The whole catalog as rmcp tools.
pub fn tools() -> Vec<Tool> {
  ToolName::ALL.into_iter().map(ToolName::to_tool).collect()
}

fn schema_for<T: JsonSchema>() -> Arc<JsonObject> {
  let schema = schemars::schema_for!(T);
  match serde_json::to_value(schema) {
    Ok(Value::Object(object)) => Arc::new(object),
    _ => Arc::new(JsonObject::new()),
  }
}
