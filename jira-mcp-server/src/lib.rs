//! # Jira MCP Server
//!
//! Model Context Protocol server exposing Jira issue, comment, and project
//! operations as tools over stdio.
//!
//! Tool calls go through [`router::dispatch`], which resolves the tool from the
//! [`catalog`], validates its arguments, calls the Jira client, and renders a
//! [`types::ToolOutput`]. Failures are reported as error-flagged results.

pub mod catalog;
pub mod context;
pub mod error;
pub mod router;
pub mod server;
pub mod tools;
pub mod types;

pub use server::JiraMcpServer;
