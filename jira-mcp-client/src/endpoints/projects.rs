//! Project endpoints.

use tracing::instrument;

use crate::client::JiraClient;
use crate::error::Result;
use crate::models::{IssueTypeDescriptor, Project};

impl JiraClient {
  /// List all projects visible to the caller
  #[instrument(skip(self), level = "debug")]
  pub async fn get_projects(&self) -> Result<Vec<Project>> {
    self.get(&["project"]).await
  }

  /// Get a project by key
  #[instrument(skip(self), level = "debug")]
  pub async fn get_project(&self, project_key: &str) -> Result<Project> {
    self.get(&["project", project_key]).await
  }

  /// Issue types declared by a project, read from the project record.
  ///
  /// A project without an `issueTypes` field yields an empty list.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue_types(&self, project_key: &str) -> Result<Vec<IssueTypeDescriptor>> {
    let project = self.get_project(project_key).await?;
    Ok(project.into_issue_types())
  }
}
