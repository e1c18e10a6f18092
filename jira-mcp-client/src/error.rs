//! Error type returned by every client operation.

use reqwest::{Method, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, JiraError>;

/// Failures raised by the Jira client.
#[derive(Debug, Error)]
pub enum JiraError {
  /// Connection settings are missing or malformed.
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// The request could not be sent or its body could not be read.
  #[error("{context}: {source}")]
  Transport {
    context: String,
    #[source]
    source: reqwest::Error,
  },

  /// Jira answered with a non-success status.
  #[error("{message}")]
  Api {
    method: Method,
    path: String,
    status: StatusCode,
    message: String,
    /// Structured error body sent by Jira, kept verbatim.
    body: Option<Value>,
  },

  /// A success response did not have the expected shape.
  #[error("{context}: {source}")]
  Decode {
    context: String,
    #[source]
    source: serde_json::Error,
  },

  /// The issue's workflow offers no transition into the requested status.
  #[error("No transition found to status: {status}")]
  NoTransition { issue_key: String, status: String },
}

impl JiraError {
  /// Build an [`JiraError::Api`] from a failed response.
  ///
  /// JSON bodies are kept as-is; any other non-empty body is kept as a JSON
  /// string.
  pub(crate) fn from_response(method: Method, path: &str, status: StatusCode, text: &str) -> Self {
    let body = if text.trim().is_empty() {
      None
    } else {
      Some(serde_json::from_str::<Value>(text).unwrap_or_else(|_| Value::String(text.to_string())))
    };

    let mut message = match status {
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
        format!("Authentication failed (HTTP {status}). Please check your Jira access token.")
      }
      StatusCode::NOT_FOUND => format!("Not found (HTTP {status}): {method} {path}"),
      _ => format!("Unexpected error: HTTP {status} on {method} {path}"),
    };
    if let Some(detail) = body.as_ref().and_then(remote_detail) {
      message.push_str(" - ");
      message.push_str(&detail);
    }

    Self::Api {
      method,
      path: path.to_string(),
      status,
      message,
      body,
    }
  }

  /// The structured error body returned by Jira, if any.
  pub const fn remote_body(&self) -> Option<&Value> {
    match self {
      Self::Api { body, .. } => body.as_ref(),
      _ => None,
    }
  }
}

/// Flatten Jira's `errorMessages` and `errors` into one line.
fn remote_detail(body: &Value) -> Option<String> {
  let mut parts: Vec<String> = body
    .get("errorMessages")
    .and_then(Value::as_array)
    .map(|messages| messages.iter().filter_map(Value::as_str).map(str::to_string).collect())
    .unwrap_or_default();

  if let Some(errors) = body.get("errors").and_then(Value::as_object) {
    for (field, error) in errors {
      match error.as_str() {
        Some(text) => parts.push(format!("{field}: {text}")),
        None => parts.push(format!("{field}: {error}")),
      }
    }
  }

  if parts.is_empty() { None } else { Some(parts.join("; ")) }
}

#[cfg(test)]
mod tests {
  use insta::assert_snapshot;
  use serde_json::json;

  use super::*;

  #[test]
  fn test_api_error_keeps_remote_body() {
    let text = json!({
      "errorMessages": [],
      "errors": { "summary": "You must specify a summary of the issue." }
    })
    .to_string();

    let error = JiraError::from_response(Method::POST, "/issue", StatusCode::BAD_REQUEST, &text);

    assert!(matches!(error, JiraError::Api { status: StatusCode::BAD_REQUEST, .. }));
    assert_eq!(
      error.remote_body().and_then(|b| b.pointer("/errors/summary")),
      Some(&json!("You must specify a summary of the issue."))
    );
    assert_snapshot!(
      error.to_string(),
      @"Unexpected error: HTTP 400 Bad Request on POST /issue - summary: You must specify a summary of the issue."
    );
  }

  #[test]
  fn test_not_found_message() {
    let text = r#"{"errorMessages":["Issue does not exist or you do not have permission to see it."],"errors":{}}"#;
    let error = JiraError::from_response(Method::GET, "/issue/PROJ-404", StatusCode::NOT_FOUND, text);

    assert_snapshot!(
      error.to_string(),
      @"Not found (HTTP 404 Not Found): GET /issue/PROJ-404 - Issue does not exist or you do not have permission to see it."
    );
  }

  #[test]
  fn test_non_json_body_is_kept_as_string() {
    let error = JiraError::from_response(
      Method::GET,
      "/myself",
      StatusCode::UNAUTHORIZED,
      "<html>Unauthorized</html>",
    );

    assert!(error.to_string().starts_with("Authentication failed"));
    assert_eq!(error.remote_body(), Some(&json!("<html>Unauthorized</html>")));
  }

  #[test]
  fn test_empty_body_has_no_remote_body() {
    let error = JiraError::from_response(Method::DELETE, "/issue/PROJ-1", StatusCode::FORBIDDEN, "");
    assert!(error.remote_body().is_none());
  }

  #[test]
  fn test_no_transition_message() {
    let error = JiraError::NoTransition {
      issue_key: "PROJ-1".to_string(),
      status: "Released".to_string(),
    };
    assert_eq!(error.to_string(), "No transition found to status: Released");
    assert!(error.remote_body().is_none());
  }
}
