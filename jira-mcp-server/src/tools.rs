//! Argument structs for every tool, grouped by the Jira resource they touch.
//!
//! Argument names are camelCase on the wire (`issueKey`, `projectKey`, ...).
//! Each struct also provides the JSON schema advertised in the catalog.

pub mod comments;
pub mod issues;
pub mod projects;

use schemars::JsonSchema;
use serde::Deserialize;

/// Arguments for tools that take none.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NoParams {}
