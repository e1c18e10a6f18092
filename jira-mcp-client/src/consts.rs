//! Constants for the Jira client.

/// Environment variable holding the Jira base URL.
pub const ENV_JIRA_BASE_URL: &str = "JIRA_BASE_URL";

/// Environment variable holding the Jira personal access token.
pub const ENV_JIRA_PAT: &str = "JIRA_PAT";

/// Path prefix of the Jira REST API, appended to the base URL.
pub const API_PATH: &str = "/rest/api/2";

/// Number of issues requested by a search when the caller gives no limit.
pub const DEFAULT_MAX_RESULTS: u32 = 50;

/// Fields requested for every issue returned by a search.
pub const SEARCH_FIELDS: [&str; 9] = [
  "summary",
  "status",
  "assignee",
  "reporter",
  "priority",
  "issuetype",
  "created",
  "updated",
  "description",
];

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the Jira API
pub const ACCEPT: &str = "application/json";
