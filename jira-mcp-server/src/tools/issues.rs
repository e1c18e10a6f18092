//! Parameter structs for issue tools.

use jira_mcp_client::consts::DEFAULT_MAX_RESULTS;
use jira_mcp_client::{CreateIssueInput, UpdateIssueInput};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueKeyParams {
  /// The Jira issue key (e.g. "PROJ-123").
  pub issue_key: String,
}

const fn default_max_results() -> u32 {
  DEFAULT_MAX_RESULTS
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchIssuesParams {
  /// JQL query string to search for issues.
  pub jql: String,
  /// Maximum number of results to return (default: 50).
  #[serde(default = "default_max_results")]
  pub max_results: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueParams {
  /// The project key where the issue will be created.
  pub project_key: String,
  /// Brief summary/title of the issue.
  pub summary: String,
  /// Type of issue (e.g. Bug, Task, Story, Epic).
  pub issue_type: String,
  /// Detailed description of the issue.
  pub description: Option<String>,
  /// Priority level (e.g. High, Medium, Low).
  pub priority: Option<String>,
  /// Username of the person to assign the issue to.
  pub assignee: Option<String>,
  /// Labels to add to the issue.
  pub labels: Option<Vec<String>>,
  /// Component names.
  pub components: Option<Vec<String>>,
}

impl From<CreateIssueParams> for CreateIssueInput {
  fn from(params: CreateIssueParams) -> Self {
    Self {
      project_key: params.project_key,
      summary: params.summary,
      issue_type: params.issue_type,
      description: params.description,
      priority: params.priority,
      assignee: params.assignee,
      labels: params.labels,
      components: params.components,
    }
  }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssueParams {
  /// The Jira issue key to update.
  pub issue_key: String,
  /// New summary/title for the issue.
  pub summary: Option<String>,
  /// New description for the issue. An empty string clears it.
  pub description: Option<String>,
  /// Username to assign the issue to.
  pub assignee: Option<String>,
  /// New priority level.
  pub priority: Option<String>,
  /// New set of labels, replacing the current ones. An empty list clears them.
  pub labels: Option<Vec<String>>,
  /// New status/workflow state (e.g. "In Progress", "Done").
  pub status: Option<String>,
}

impl UpdateIssueParams {
  /// Split into the issue key and the client-side update input.
  pub fn into_parts(self) -> (String, UpdateIssueInput) {
    let input = UpdateIssueInput {
      summary: self.summary,
      description: self.description,
      assignee: self.assignee,
      priority: self.priority,
      labels: self.labels,
      status: self.status,
    };
    (self.issue_key, input)
  }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransitionIssueParams {
  /// The Jira issue key.
  pub issue_key: String,
  /// Target status name (case-insensitive, e.g. "Done").
  pub status: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignIssueParams {
  /// The Jira issue key.
  pub issue_key: String,
  /// Username to assign the issue to.
  pub assignee: String,
}
