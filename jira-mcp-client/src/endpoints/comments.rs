//! Issue comment endpoints.

use serde::Serialize;
use tracing::instrument;

use crate::client::JiraClient;
use crate::error::Result;
use crate::models::{Comment, CommentPage};

#[derive(Debug, Serialize)]
struct CommentRequest<'a> {
  body: &'a str,
}

impl JiraClient {
  /// Add a comment to an issue and return the created comment
  #[instrument(skip(self, body), level = "debug")]
  pub async fn add_comment(&self, issue_key: &str, body: &str) -> Result<Comment> {
    self
      .post(&["issue", issue_key, "comment"], &CommentRequest { body })
      .await
  }

  /// Get all comments on an issue, oldest first
  #[instrument(skip(self), level = "debug")]
  pub async fn get_comments(&self, issue_key: &str) -> Result<Vec<Comment>> {
    let page: CommentPage = self.get(&["issue", issue_key, "comment"]).await?;
    Ok(page.comments)
  }
}
