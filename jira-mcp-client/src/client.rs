//! # Jira HTTP Client
//!
//! HTTP client implementation for the Jira REST API, handling bearer
//! authentication, request building, and mapping of failed responses into
//! [`JiraError`].

use reqwest::{Client, Method, Response, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use url::Url;

use crate::config::{ConfigError, JiraConfig};
use crate::consts::{ACCEPT, API_PATH, USER_AGENT};
use crate::error::{JiraError, Result};

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) access_token: String,
}

impl JiraClient {
  /// Create a new Jira client
  pub fn new(config: JiraConfig) -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: config.base_url,
      access_token: config.access_token,
    }
  }

  /// The normalized base URL this client talks to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
    let (response, path) = self.send::<()>(Method::GET, segments, None).await?;
    decode(response, &path).await
  }

  pub(crate) async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let (response, path) = self.send(Method::POST, segments, Some(body)).await?;
    decode(response, &path).await
  }

  /// Send a request whose response body is ignored, e.g. a 204.
  pub(crate) async fn execute<B>(&self, method: Method, segments: &[&str], body: Option<&B>) -> Result<()>
  where
    B: Serialize + ?Sized,
  {
    self.send(method, segments, body).await.map(drop)
  }

  /// The API URL for `segments`.
  ///
  /// Each segment is percent-encoded on its own, so a key containing `/`,
  /// `?`, `#` or `..` stays inside its segment.
  pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
    let base = format!("{}{}", self.base_url, API_PATH);
    let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
      value: self.base_url.clone(),
      reason: reason.to_string(),
    };

    let mut url = Url::parse(&base).map_err(|e| invalid(&e.to_string()))?;
    url
      .path_segments_mut()
      .map_err(|()| invalid("URL cannot carry a path"))?
      .pop_if_empty()
      .extend(segments);
    Ok(url)
  }

  async fn send<B>(&self, method: Method, segments: &[&str], body: Option<&B>) -> Result<(Response, String)>
  where
    B: Serialize + ?Sized,
  {
    let url = self.endpoint(segments)?;
    let path = format!("/{}", segments.join("/"));
    trace!("Jira API URL: {}", url);

    let mut request = self
      .client
      .request(method.clone(), url)
      .header(header::ACCEPT, ACCEPT)
      .header(header::USER_AGENT, USER_AGENT)
      .bearer_auth(&self.access_token);
    if let Some(body) = body {
      request = request.json(body);
    }

    let response = request.send().await.map_err(|source| JiraError::Transport {
      context: format!("{method} {path} failed"),
      source,
    })?;

    let status = response.status();
    debug!("Jira API response status for {} {}: {}", method, path, status);

    if status.is_success() {
      return Ok((response, path));
    }

    let text = response.text().await.unwrap_or_default();
    warn!("Jira API error: HTTP {} on {} {}", status, method, path);
    Err(JiraError::from_response(method, &path, status, &text))
  }
}

/// Read a success response and parse it as `T`.
async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T> {
  let body = response.text().await.map_err(|source| JiraError::Transport {
    context: format!("Failed to read response body from {path}"),
    source,
  })?;

  serde_json::from_str(&body).map_err(|source| JiraError::Decode {
    context: format!("Failed to parse Jira response from {path}"),
    source,
  })
}
