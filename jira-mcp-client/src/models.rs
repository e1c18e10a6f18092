//! Jira records and request inputs.
//!
//! Remote records carry a fixed set of known fields plus an `extra` map that
//! keeps every other field Jira sends, so serializing a record reproduces what
//! the server returned, explicit `null`s included.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Fields Jira sent that are not modelled explicitly.
pub type ExtraFields = Map<String, Value>;

/// A known field that Jira may leave out (`None`), send as `null`
/// (`Some(None)`), or fill in (`Some(Some(value))`).
pub type Nullable<T> = Option<Option<T>>;

/// Deserialize a present field, keeping `null` apart from absence. Absent
/// fields fall back to `None` through `#[serde(default)]`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Nullable<T>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Option::<T>::deserialize(deserializer).map(Some)
}

/// Represents a Jira issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub id: Nullable<String>,
  pub key: String,
  pub fields: IssueFields,
  #[serde(flatten)]
  pub extra: ExtraFields,
}

/// Represents Jira issue fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueFields {
  #[serde(default)]
  pub summary: String,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub description: Nullable<String>,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub status: Nullable<NamedRef>,
  #[serde(default, rename = "issuetype", deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub issue_type: Nullable<NamedRef>,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub priority: Nullable<NamedRef>,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub assignee: Nullable<User>,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub reporter: Nullable<User>,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub created: Nullable<String>,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub updated: Nullable<String>,
  #[serde(flatten)]
  pub extra: ExtraFields,
}

/// A named Jira object such as a status, issue type, or priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub id: Nullable<String>,
  pub name: String,
  #[serde(flatten)]
  pub extra: ExtraFields,
}

/// A Jira user: assignee, reporter, comment author, or the caller itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub name: Nullable<String>,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub display_name: Nullable<String>,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub email_address: Nullable<String>,
  #[serde(flatten)]
  pub extra: ExtraFields,
}

/// Represents a Jira project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  pub id: String,
  pub key: String,
  pub name: String,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub project_type_key: Nullable<String>,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub avatar_urls: Nullable<BTreeMap<String, String>>,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub issue_types: Nullable<Vec<IssueTypeDescriptor>>,
  #[serde(flatten)]
  pub extra: ExtraFields,
}

/// An issue type declared by a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueTypeDescriptor {
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub id: Nullable<String>,
  pub name: String,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub description: Nullable<String>,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub subtask: Nullable<bool>,
  #[serde(flatten)]
  pub extra: ExtraFields,
}

/// Represents a comment on a Jira issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
  pub id: String,
  #[serde(default)]
  pub body: String,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub author: Nullable<User>,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub created: Nullable<String>,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub updated: Nullable<String>,
  #[serde(flatten)]
  pub extra: ExtraFields,
}

/// Represents a Jira transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
  pub id: String,
  #[serde(default)]
  pub name: String,
  /// Status the issue lands in after the transition.
  pub to: NamedRef,
  #[serde(flatten)]
  pub extra: ExtraFields,
}

impl IssueFields {
  pub fn description(&self) -> Option<&str> {
    self.description.as_ref().and_then(Option::as_deref)
  }

  pub fn status(&self) -> Option<&NamedRef> {
    self.status.as_ref().and_then(Option::as_ref)
  }

  pub fn issue_type(&self) -> Option<&NamedRef> {
    self.issue_type.as_ref().and_then(Option::as_ref)
  }

  pub fn assignee(&self) -> Option<&User> {
    self.assignee.as_ref().and_then(Option::as_ref)
  }
}

impl User {
  pub fn name(&self) -> Option<&str> {
    self.name.as_ref().and_then(Option::as_deref)
  }

  pub fn display_name(&self) -> Option<&str> {
    self.display_name.as_ref().and_then(Option::as_deref)
  }
}

impl Project {
  /// Issue types declared by the project; empty when Jira sent none.
  pub fn into_issue_types(self) -> Vec<IssueTypeDescriptor> {
    self.issue_types.flatten().unwrap_or_default()
  }
}

impl Comment {
  pub fn author(&self) -> Option<&User> {
    self.author.as_ref().and_then(Option::as_ref)
  }
}

/// Caller-supplied fields for a new issue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateIssueInput {
  pub project_key: String,
  pub summary: String,
  pub issue_type: String,
  pub description: Option<String>,
  pub priority: Option<String>,
  pub assignee: Option<String>,
  pub labels: Option<Vec<String>>,
  pub components: Option<Vec<String>>,
}

/// Caller-supplied changes to an existing issue.
///
/// `None` leaves a field untouched. For `description` and `labels`, an empty
/// value is sent and clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateIssueInput {
  pub summary: Option<String>,
  pub description: Option<String>,
  pub assignee: Option<String>,
  pub priority: Option<String>,
  pub labels: Option<Vec<String>>,
  pub status: Option<String>,
}

// Response wrappers

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResults {
  #[serde(default)]
  pub issues: Vec<Issue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedIssue {
  pub key: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentPage {
  #[serde(default)]
  pub comments: Vec<Comment>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Transitions {
  #[serde(default)]
  pub transitions: Vec<Transition>,
}
