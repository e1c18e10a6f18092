//! jira-mcp: MCP server exposing Jira issues, comments, and projects over stdio.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use jira_mcp::JiraMcpServer;
use jira_mcp::context::{JiraConnection, ServerContext};
use rmcp::ServiceExt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "MCP server for Jira issues, comments, and projects")]
struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  verbose: u8,

  /// Verify the Jira configuration and credentials, then exit
  #[arg(long = "check")]
  check: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  // stdout carries the MCP JSON-RPC stream, so logs go to stderr.
  let verbosity = if cli.check { cli.verbose.max(1) } else { cli.verbose };
  let level = match verbosity {
    0 => tracing::Level::WARN,
    1 => tracing::Level::INFO,
    2 => tracing::Level::DEBUG,
    _ => tracing::Level::TRACE,
  };

  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  let jira = JiraConnection::from_env();
  match &jira {
    JiraConnection::Configured(client) => info!("Jira client configured for {}", client.base_url()),
    JiraConnection::Unconfigured(error) => warn!("Jira is not configured: {}", error),
  }

  if cli.check {
    return check(&jira).await;
  }

  let server = JiraMcpServer::new(ServerContext::new(jira));
  let service = server
    .serve(rmcp::transport::io::stdio())
    .await
    .context("Failed to attach MCP server to stdio")?;
  service.waiting().await?;

  Ok(())
}

/// Authenticate once against Jira and report who the token belongs to.
async fn check(jira: &JiraConnection) -> Result<()> {
  let client = jira.client()?;

  let user = client
    .get_current_user()
    .await
    .with_context(|| format!("Failed to authenticate against {}", client.base_url()))?;

  let who = user.display_name().or(user.name()).unwrap_or("unknown user");
  info!("Authenticated against {} as {}", client.base_url(), who);
  Ok(())
}
