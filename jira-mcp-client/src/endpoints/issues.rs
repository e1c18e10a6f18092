//! # Jira Issue Endpoints
//!
//! Jira API endpoint implementations for issue operations, including
//! fetching, creating, updating, assigning, and deleting issues.

use reqwest::Method;
use serde::Serialize;
use tracing::{info, instrument};

use crate::client::JiraClient;
use crate::error::Result;
use crate::models::{CreateIssueInput, CreatedIssue, Issue, UpdateIssueInput};

#[derive(Debug, Serialize)]
pub(crate) struct IssuePayload<F> {
  pub fields: F,
}

#[derive(Debug, Serialize)]
pub(crate) struct KeyRef<'a> {
  pub key: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct NameRef<'a> {
  pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateFields<'a> {
  project: KeyRef<'a>,
  summary: &'a str,
  issuetype: NameRef<'a>,
  #[serde(skip_serializing_if = "Option::is_none")]
  description: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  priority: Option<NameRef<'a>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  assignee: Option<NameRef<'a>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  labels: Option<&'a [String]>,
  #[serde(skip_serializing_if = "Option::is_none")]
  components: Option<Vec<NameRef<'a>>>,
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct UpdateFields<'a> {
  #[serde(skip_serializing_if = "Option::is_none")]
  summary: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  description: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  assignee: Option<NameRef<'a>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  priority: Option<NameRef<'a>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  labels: Option<&'a [String]>,
}

/// A value that is set and not empty.
fn non_empty(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|v| !v.is_empty())
}

/// Build the `POST /issue` body. Empty optional values are left out.
pub(crate) fn create_payload(input: &CreateIssueInput) -> IssuePayload<CreateFields<'_>> {
  let labels = input.labels.as_deref().filter(|labels| !labels.is_empty());
  let components = input
    .components
    .as_deref()
    .filter(|components| !components.is_empty())
    .map(|components| components.iter().map(|name| NameRef { name }).collect());

  IssuePayload {
    fields: CreateFields {
      project: KeyRef {
        key: &input.project_key,
      },
      summary: &input.summary,
      issuetype: NameRef {
        name: &input.issue_type,
      },
      description: non_empty(&input.description),
      priority: non_empty(&input.priority).map(|name| NameRef { name }),
      assignee: non_empty(&input.assignee).map(|name| NameRef { name }),
      labels,
      components,
    },
  }
}

/// Build the `PUT /issue/{key}` body.
///
/// `summary`, `assignee` and `priority` are sent only when non-empty, while
/// `description` and `labels` are sent whenever present so that an empty value
/// clears them.
pub(crate) fn update_payload(input: &UpdateIssueInput) -> IssuePayload<UpdateFields<'_>> {
  IssuePayload {
    fields: UpdateFields {
      summary: non_empty(&input.summary),
      description: input.description.as_deref(),
      assignee: non_empty(&input.assignee).map(|name| NameRef { name }),
      priority: non_empty(&input.priority).map(|name| NameRef { name }),
      labels: input.labels.as_deref(),
    },
  }
}

#[derive(Debug, Serialize)]
struct AssigneeRequest<'a> {
  name: &'a str,
}

impl JiraClient {
  /// Get a Jira issue by key
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue(&self, issue_key: &str) -> Result<Issue> {
    self.get(&["issue", issue_key]).await
  }

  /// Create an issue and return the full record.
  ///
  /// The create response only carries the new key, so the issue is fetched
  /// again afterwards.
  #[instrument(skip(self), level = "debug")]
  pub async fn create_issue(&self, input: &CreateIssueInput) -> Result<Issue> {
    let created: CreatedIssue = self.post(&["issue"], &create_payload(input)).await?;
    info!("Created Jira issue {}", created.key);
    self.get_issue(&created.key).await
  }

  /// Update an issue's fields, move it to `input.status` if given, and return
  /// the updated record.
  #[instrument(skip(self), level = "debug")]
  pub async fn update_issue(&self, issue_key: &str, input: &UpdateIssueInput) -> Result<Issue> {
    self
      .execute(Method::PUT, &["issue", issue_key], Some(&update_payload(input)))
      .await?;

    if let Some(status) = non_empty(&input.status) {
      self.transition_issue(issue_key, status).await?;
    }

    self.get_issue(issue_key).await
  }

  /// Assign an issue to a user by username
  #[instrument(skip(self), level = "debug")]
  pub async fn assign_issue(&self, issue_key: &str, assignee: &str) -> Result<()> {
    self
      .execute(
        Method::PUT,
        &["issue", issue_key, "assignee"],
        Some(&AssigneeRequest { name: assignee }),
      )
      .await
  }

  /// Permanently delete an issue
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_issue(&self, issue_key: &str) -> Result<()> {
    self
      .execute::<()>(Method::DELETE, &["issue", issue_key], None)
      .await?;
    info!("Deleted Jira issue {}", issue_key);
    Ok(())
  }
}
