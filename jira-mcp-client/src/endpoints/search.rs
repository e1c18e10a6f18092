//! JQL search endpoint.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::client::JiraClient;
use crate::consts::{DEFAULT_MAX_RESULTS, SEARCH_FIELDS};
use crate::error::Result;
use crate::models::{Issue, SearchResults};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchRequest<'a> {
  jql: &'a str,
  max_results: u32,
  fields: &'a [&'a str],
}

impl<'a> SearchRequest<'a> {
  pub(crate) fn new(jql: &'a str, max_results: Option<u32>) -> Self {
    Self {
      jql,
      max_results: max_results.unwrap_or(DEFAULT_MAX_RESULTS),
      fields: &SEARCH_FIELDS,
    }
  }
}

impl JiraClient {
  /// Search issues with a JQL query.
  ///
  /// At most `max_results` issues are returned (50 when not given), in the
  /// order Jira ranks them.
  #[instrument(skip(self), level = "debug")]
  pub async fn search_issues(&self, jql: &str, max_results: Option<u32>) -> Result<Vec<Issue>> {
    let results: SearchResults = self.post(&["search"], &SearchRequest::new(jql, max_results)).await?;
    debug!("JQL search returned {} issues", results.issues.len());
    Ok(results.issues)
  }
}
