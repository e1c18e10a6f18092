//! # Jira API Endpoints
//!
//! Organized endpoint implementations for the Jira REST resources the client
//! uses: issues, search, transitions, comments, projects, and users.

pub mod comments;
pub mod issues;
pub mod projects;
pub mod search;
pub mod transitions;
pub mod users;
