//! Parameter structs for comment tools.

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentParams {
  /// The Jira issue key.
  pub issue_key: String,
  /// The comment text to add.
  pub comment: String,
}
