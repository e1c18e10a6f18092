//! MCP server handler wiring the tool catalog and router into rmcp.

use std::sync::Arc;

use rmcp::model::{
  CallToolRequestParams, CallToolResult, ListToolsResult, PaginatedRequestParams, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};

use crate::catalog;
use crate::context::ServerContext;
use crate::router;

#[derive(Clone)]
pub struct JiraMcpServer {
  context: Arc<ServerContext>,
}

impl JiraMcpServer {
  pub fn new(context: ServerContext) -> Self {
    Self {
      context: Arc::new(context),
    }
  }
}

impl ServerHandler for JiraMcpServer {
  fn get_info(&self) -> ServerInfo {
    ServerInfo {
      instructions: Some(
        "Jira MCP server. Reads, searches, creates, updates, transitions, comments on, assigns, and deletes \
         Jira issues, and lists projects and issue types. Requires JIRA_BASE_URL and JIRA_PAT."
          .into(),
      ),
      capabilities: ServerCapabilities::builder().enable_tools().build(),
      ..Default::default()
    }
  }

  async fn list_tools(
    &self,
    _request: Option<PaginatedRequestParams>,
    _context: RequestContext<RoleServer>,
  ) -> Result<ListToolsResult, McpError> {
    Ok(ListToolsResult::with_all_items(catalog::tools()))
  }

  async fn call_tool(
    &self,
    request: CallToolRequestParams,
    _context: RequestContext<RoleServer>,
  ) -> Result<CallToolResult, McpError> {
    let arguments = request.arguments.unwrap_or_default();
    let output = router::dispatch(&self.context, &request.name, arguments).await;
    Ok(output.to_call_tool_result())
  }
}
