//! # Jira Transition Endpoints
//!
//! Workflow transitions are looked up fresh for every status change, since
//! the set of reachable statuses depends on the issue's current state.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::client::JiraClient;
use crate::error::{JiraError, Result};
use crate::models::{Transition, Transitions};

/// Represents a transition request payload
#[derive(Debug, Serialize)]
struct TransitionRequest<'a> {
  transition: TransitionId<'a>,
}

/// Represents a transition ID for the request
#[derive(Debug, Serialize)]
struct TransitionId<'a> {
  id: &'a str,
}

/// Find the first transition whose destination status matches `status`,
/// ignoring case.
pub fn find_transition<'a>(transitions: &'a [Transition], status: &str) -> Option<&'a Transition> {
  let wanted = status.to_lowercase();
  transitions.iter().find(|t| t.to.name.to_lowercase() == wanted)
}

impl JiraClient {
  /// Get available transitions for an issue
  #[instrument(skip(self), level = "debug")]
  pub async fn get_transitions(&self, issue_key: &str) -> Result<Vec<Transition>> {
    let transitions: Transitions = self.get(&["issue", issue_key, "transitions"]).await?;
    Ok(transitions.transitions)
  }

  /// Move an issue into the status named `status`.
  ///
  /// Fails with [`JiraError::NoTransition`] when the issue's workflow has no
  /// transition from its current status into the requested one.
  #[instrument(skip(self), level = "debug")]
  pub async fn transition_issue(&self, issue_key: &str, status: &str) -> Result<()> {
    let transitions = self.get_transitions(issue_key).await?;
    debug!("{} transitions available for {}", transitions.len(), issue_key);

    let transition = find_transition(&transitions, status).ok_or_else(|| JiraError::NoTransition {
      issue_key: issue_key.to_string(),
      status: status.to_string(),
    })?;

    let payload = TransitionRequest {
      transition: TransitionId { id: &transition.id },
    };
    self
      .post_no_content(&["issue", issue_key, "transitions"], &payload)
      .await?;

    info!("Moved {} to {} via transition {}", issue_key, transition.to.name, transition.id);
    Ok(())
  }

  async fn post_no_content<B: Serialize + ?Sized>(&self, segments: &[&str], body: &B) -> Result<()> {
    self.execute(reqwest::Method::POST, segments, Some(body)).await
  }
}

#[cfg(test)]
mod tests {
  use jira_mcp_test_utils::fixtures;
  use serde_json::json;
  use wiremock::matchers::{bearer_token, body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::client::test_support::{TEST_TOKEN, client_for};

  fn sample_transitions() -> Vec<Transition> {
    serde_json::from_value::<Transitions>(fixtures::transitions(&[
      ("11", "To Do"),
      ("21", "In Progress"),
      ("31", "Done"),
    ]))
    .unwrap()
    .transitions
  }

  #[test]
  fn test_find_transition_ignores_case() {
    let transitions = sample_transitions();

    assert_eq!(find_transition(&transitions, "done").map(|t| t.id.as_str()), Some("31"));
    assert_eq!(find_transition(&transitions, "IN PROGRESS").map(|t| t.id.as_str()), Some("21"));
  }

  #[test]
  fn test_find_transition_matches_destination_not_transition_name() {
    let transitions = sample_transitions();

    // Transition names are "Move to ...", only the destination status counts.
    assert!(find_transition(&transitions, "Move to Done").is_none());
    assert!(find_transition(&transitions, "Released").is_none());
    assert!(find_transition(&[], "Done").is_none());
  }

  #[test]
  fn test_find_transition_takes_first_match() {
    let transitions: Vec<Transition> = serde_json::from_value(json!([
      { "id": "41", "name": "Resolve", "to": { "name": "Done" } },
      { "id": "51", "name": "Close", "to": { "name": "done" } }
    ]))
    .unwrap();

    assert_eq!(find_transition(&transitions, "Done").map(|t| t.id.as_str()), Some("41"));
  }

  #[tokio::test]
  async fn test_get_transitions() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/TEST-123/transitions"))
      .and(bearer_token(TEST_TOKEN))
      .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::transitions(&[
        ("11", "To Do"),
        ("21", "In Progress"),
        ("31", "Done"),
      ])))
      .mount(&mock_server)
      .await;

    let transitions = client.get_transitions("TEST-123").await?;
    assert_eq!(transitions.len(), 3);
    assert_eq!(transitions[0].id, "11");
    assert_eq!(transitions[0].to.name, "To Do");
    assert_eq!(transitions[2].id, "31");
    assert_eq!(transitions[2].to.name, "Done");

    Ok(())
  }

  #[tokio::test]
  async fn test_transition_issue() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/TEST-123/transitions"))
      .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::transitions(&[
        ("11", "To Do"),
        ("21", "In Progress"),
      ])))
      .mount(&mock_server)
      .await;

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue/TEST-123/transitions"))
      .and(bearer_token(TEST_TOKEN))
      .and(body_json(json!({ "transition": { "id": "21" } })))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    client.transition_issue("TEST-123", "in progress").await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_transition_issue_unreachable_status() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/TEST-123/transitions"))
      .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::transitions(&[("11", "To Do")])))
      .mount(&mock_server)
      .await;

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue/TEST-123/transitions"))
      .respond_with(ResponseTemplate::new(204))
      .expect(0)
      .mount(&mock_server)
      .await;

    let error = client.transition_issue("TEST-123", "Done").await.unwrap_err();
    assert!(matches!(
      &error,
      JiraError::NoTransition { issue_key, status } if issue_key == "TEST-123" && status == "Done"
    ));
    assert_eq!(error.to_string(), "No transition found to status: Done");

    Ok(())
  }

  #[tokio::test]
  async fn test_transition_issue_rejected_by_jira() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/TEST-123/transitions"))
      .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::transitions(&[("31", "Done")])))
      .mount(&mock_server)
      .await;

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue/TEST-123/transitions"))
      .respond_with(ResponseTemplate::new(400).set_body_json(json!({
        "errorMessages": [],
        "errors": { "resolution": "Resolution is required." }
      })))
      .mount(&mock_server)
      .await;

    let error = client.transition_issue("TEST-123", "Done").await.unwrap_err();
    assert!(error.to_string().contains("resolution: Resolution is required."));
    assert!(error.remote_body().is_some());

    Ok(())
  }

  #[tokio::test]
  async fn test_transitions_not_found() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/NONEXISTENT-123/transitions"))
      .respond_with(ResponseTemplate::new(404).set_body_json(fixtures::error_body(&[
        "Issue does not exist or you do not have permission to see it.",
      ])))
      .mount(&mock_server)
      .await;

    let result = client.get_transitions("NONEXISTENT-123").await;
    assert!(result.unwrap_err().to_string().contains("Not found"));

    Ok(())
  }
}
