//! Connection settings for the Jira client.
//!
//! The base URL and access token come from the process environment
//! (`JIRA_BASE_URL` and `JIRA_PAT`). Resolution never touches the network; a
//! missing or malformed value is reported as a [`ConfigError`].

use thiserror::Error;
use url::{Position, Url};

use crate::consts::{ENV_JIRA_BASE_URL, ENV_JIRA_PAT};

/// Errors raised while resolving the connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
  /// One or both required variables are unset or blank.
  #[error(
    "JIRA_BASE_URL and JIRA_PAT environment variables are required. \
     Please configure them before using Jira functionality (missing: {})",
    .missing.join(", ")
  )]
  Missing { missing: Vec<&'static str> },

  /// The base URL could not be parsed.
  #[error("Invalid Jira base URL '{value}': {reason}")]
  InvalidBaseUrl { value: String, reason: String },
}

/// Base URL and bearer token used for every request.
#[derive(Clone, PartialEq, Eq)]
pub struct JiraConfig {
  pub base_url: String,
  pub access_token: String,
}

impl std::fmt::Debug for JiraConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("JiraConfig")
      .field("base_url", &self.base_url)
      .field("access_token", &"<redacted>")
      .finish()
  }
}

impl JiraConfig {
  /// Build a config from an explicit base URL and token.
  pub fn new(base_url: &str, access_token: &str) -> Result<Self, ConfigError> {
    Ok(Self {
      base_url: normalize_base_url(base_url)?,
      access_token: access_token.trim().to_string(),
    })
  }

  /// Resolve the config from `JIRA_BASE_URL` and `JIRA_PAT`.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Resolve the config through an arbitrary variable lookup.
  ///
  /// Blank values are treated the same as unset ones.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    let base_url = read(ENV_JIRA_BASE_URL);
    let access_token = read(ENV_JIRA_PAT);

    match (base_url, access_token) {
      (Some(base_url), Some(access_token)) => Self::new(&base_url, &access_token),
      (base_url, access_token) => {
        let mut missing = Vec::new();
        if base_url.is_none() {
          missing.push(ENV_JIRA_BASE_URL);
        }
        if access_token.is_none() {
          missing.push(ENV_JIRA_PAT);
        }
        Err(ConfigError::Missing { missing })
      }
    }
  }
}

/// Normalize a Jira base URL.
///
/// Assumes `https://` when no scheme is given and strips trailing slashes so
/// that API paths can be appended directly.
pub fn normalize_base_url(input: &str) -> Result<String, ConfigError> {
  let trimmed = input.trim();
  let invalid = |reason: String| ConfigError::InvalidBaseUrl {
    value: input.to_string(),
    reason,
  };

  if trimmed.is_empty() {
    return Err(invalid("value is empty".to_string()));
  }

  let lowered = trimmed.to_ascii_lowercase();
  let candidate = if lowered.starts_with("http://") || lowered.starts_with("https://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  let url = Url::parse(&candidate).map_err(|e| invalid(e.to_string()))?;
  if url.host_str().is_none() {
    return Err(invalid("URL has no host".to_string()));
  }

  let mut normalized = url[..Position::BeforePath].to_string();
  normalized.push_str(url.path().trim_end_matches('/'));
  Ok(normalized)
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use jira_mcp_test_utils::EnvVarGuard;

  use super::*;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| map.get(name).cloned()
  }

  #[test]
  fn test_from_lookup_with_both_values() {
    let config = JiraConfig::from_lookup(lookup_from(&[
      ("JIRA_BASE_URL", "https://jira.example.com/"),
      ("JIRA_PAT", "secret-token"),
    ]))
    .unwrap();

    assert_eq!(config.base_url, "https://jira.example.com");
    assert_eq!(config.access_token, "secret-token");
  }

  #[test]
  fn test_from_lookup_reports_every_missing_variable() {
    let error = JiraConfig::from_lookup(lookup_from(&[])).unwrap_err();

    assert_eq!(
      error,
      ConfigError::Missing {
        missing: vec!["JIRA_BASE_URL", "JIRA_PAT"]
      }
    );
    let message = error.to_string();
    assert!(message.contains("JIRA_BASE_URL and JIRA_PAT environment variables are required"));
    assert!(message.ends_with("(missing: JIRA_BASE_URL, JIRA_PAT)"));
  }

  #[test]
  fn test_from_lookup_treats_blank_token_as_missing() {
    let error = JiraConfig::from_lookup(lookup_from(&[
      ("JIRA_BASE_URL", "https://jira.example.com"),
      ("JIRA_PAT", "   "),
    ]))
    .unwrap_err();

    assert_eq!(error, ConfigError::Missing { missing: vec!["JIRA_PAT"] });
  }

  #[test]
  fn test_from_env() {
    let base_url = EnvVarGuard::new("JIRA_BASE_URL");
    let token = EnvVarGuard::new("JIRA_PAT");

    base_url.set("jira.internal.example.com/jira/");
    token.set("env-token");
    let config = JiraConfig::from_env().unwrap();
    assert_eq!(config.base_url, "https://jira.internal.example.com/jira");
    assert_eq!(config.access_token, "env-token");

    token.remove();
    assert_eq!(
      JiraConfig::from_env().unwrap_err(),
      ConfigError::Missing { missing: vec!["JIRA_PAT"] }
    );
  }

  #[test]
  fn test_normalize_base_url() {
    assert_eq!(normalize_base_url("jira.example.com").unwrap(), "https://jira.example.com");
    assert_eq!(normalize_base_url("  https://jira.example.com/  ").unwrap(), "https://jira.example.com");
    assert_eq!(normalize_base_url("HTTP://Jira.Example.com").unwrap(), "http://jira.example.com");
    assert_eq!(normalize_base_url("http://127.0.0.1:8080").unwrap(), "http://127.0.0.1:8080");
    assert_eq!(
      normalize_base_url("https://example.com/jira//").unwrap(),
      "https://example.com/jira"
    );
  }

  #[test]
  fn test_normalize_base_url_rejects_garbage() {
    assert!(matches!(
      normalize_base_url(""),
      Err(ConfigError::InvalidBaseUrl { .. })
    ));
    assert!(matches!(
      normalize_base_url("https://exa mple.com"),
      Err(ConfigError::InvalidBaseUrl { .. })
    ));
  }

  #[test]
  fn test_debug_redacts_token() {
    let config = JiraConfig::new("https://jira.example.com", "secret-token").unwrap();
    let debug = format!("{config:?}");
    assert!(!debug.contains("secret-token"));
    assert!(debug.contains("<redacted>"));
  }
}
