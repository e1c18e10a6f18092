//! Shared server context available to all tool handlers.

use jira_mcp_client::{ConfigError, JiraClient, JiraConfig, JiraError};

/// The Jira client, or the reason there is none.
///
/// Resolved once at startup. An unconfigured server still starts and lists its
/// tools; every Jira-backed call then fails with the configuration error.
pub enum JiraConnection {
  Configured(JiraClient),
  Unconfigured(ConfigError),
}

impl JiraConnection {
  /// Resolve the connection from `JIRA_BASE_URL` and `JIRA_PAT`.
  pub fn from_env() -> Self {
    Self::from_config(JiraConfig::from_env())
  }

  pub fn from_config(config: Result<JiraConfig, ConfigError>) -> Self {
    match config {
      Ok(config) => Self::Configured(JiraClient::new(config)),
      Err(error) => Self::Unconfigured(error),
    }
  }

  /// The client, or the configuration error that prevented creating it.
  pub fn client(&self) -> Result<&JiraClient, JiraError> {
    match self {
      Self::Configured(client) => Ok(client),
      Self::Unconfigured(error) => Err(JiraError::Config(error.clone())),
    }
  }
}

/// Shared context available to all tool handlers.
pub struct ServerContext {
  pub jira: JiraConnection,
}

impl ServerContext {
  pub const fn new(jira: JiraConnection) -> Self {
    Self { jira }
  }
}
