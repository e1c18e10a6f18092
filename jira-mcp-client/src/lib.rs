//! # Jira API Client
//!
//! Provides Jira REST API (v2) integration for issues, comments, transitions,
//! projects, and the authenticated user. Every operation maps to one or more
//! HTTP calls against `<base-url>/rest/api/2` using a bearer access token.

mod client;
pub mod config;
pub mod consts;
mod endpoints;
pub mod error;
pub mod models;

// Re-export the client
pub use client::JiraClient;
pub use config::{ConfigError, JiraConfig, normalize_base_url};
pub use endpoints::transitions::find_transition;
pub use error::{JiraError, Result};
// Re-export models
pub use models::{
  Comment, CreateIssueInput, Issue, IssueFields, IssueTypeDescriptor, NamedRef, Nullable, Project,
  Transition, UpdateIssueInput, User,
};
