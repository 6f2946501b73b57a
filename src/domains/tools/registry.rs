//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

#[cfg(feature = "http")]
use super::error::ToolError;
use crate::domains::toggl::{PacingPolicy, TogglApi};

use super::definitions::{
    BulkCreateTimeEntriesTool, BulkEditTimeEntriesTool, CreateLegacyTimeEntryTool,
    CreateTimeEntryTool, DeleteTimeEntryTool, FindProjectByNameTool, GetCurrentTimeEntryTool,
    GetCurrentUserTool, GetTimeEntriesTool, GetWorkspaceProjectsTool, GetWorkspaceTagsTool,
    GetWorkspacesTool, StopTimeEntryTool, UpdateTimeEntryTool,
};

/// Tool registry - manages all available tools.
#[cfg_attr(not(feature = "http"), allow(dead_code))]
pub struct ToolRegistry {
    api: Arc<TogglApi>,
    pacing: PacingPolicy,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(api: Arc<TogglApi>, pacing: PacingPolicy) -> Self {
        Self { api, pacing }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetTimeEntriesTool::NAME,
            GetCurrentTimeEntryTool::NAME,
            CreateTimeEntryTool::NAME,
            CreateLegacyTimeEntryTool::NAME,
            UpdateTimeEntryTool::NAME,
            DeleteTimeEntryTool::NAME,
            StopTimeEntryTool::NAME,
            BulkEditTimeEntriesTool::NAME,
            BulkCreateTimeEntriesTool::NAME,
            GetWorkspacesTool::NAME,
            GetWorkspaceProjectsTool::NAME,
            FindProjectByNameTool::NAME,
            GetWorkspaceTagsTool::NAME,
            GetCurrentUserTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Used by the HTTP transport for `tools/list`.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetTimeEntriesTool::to_tool(),
            GetCurrentTimeEntryTool::to_tool(),
            CreateTimeEntryTool::to_tool(),
            CreateLegacyTimeEntryTool::to_tool(),
            UpdateTimeEntryTool::to_tool(),
            DeleteTimeEntryTool::to_tool(),
            StopTimeEntryTool::to_tool(),
            BulkEditTimeEntriesTool::to_tool(),
            BulkCreateTimeEntriesTool::to_tool(),
            GetWorkspacesTool::to_tool(),
            GetWorkspaceProjectsTool::to_tool(),
            FindProjectByNameTool::to_tool(),
            GetWorkspaceTagsTool::to_tool(),
            GetCurrentUserTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let api = self.api.clone();
        let result = match name {
            GetTimeEntriesTool::NAME => GetTimeEntriesTool::http_handler(arguments, api).await,
            GetCurrentTimeEntryTool::NAME => {
                GetCurrentTimeEntryTool::http_handler(arguments, api).await
            }
            CreateTimeEntryTool::NAME => CreateTimeEntryTool::http_handler(arguments, api).await,
            CreateLegacyTimeEntryTool::NAME => {
                CreateLegacyTimeEntryTool::http_handler(arguments, api).await
            }
            UpdateTimeEntryTool::NAME => UpdateTimeEntryTool::http_handler(arguments, api).await,
            DeleteTimeEntryTool::NAME => DeleteTimeEntryTool::http_handler(arguments, api).await,
            StopTimeEntryTool::NAME => StopTimeEntryTool::http_handler(arguments, api).await,
            BulkEditTimeEntriesTool::NAME => {
                BulkEditTimeEntriesTool::http_handler(arguments, api).await
            }
            BulkCreateTimeEntriesTool::NAME => {
                BulkCreateTimeEntriesTool::http_handler(arguments, api, self.pacing).await
            }
            GetWorkspacesTool::NAME => GetWorkspacesTool::http_handler(arguments, api).await,
            GetWorkspaceProjectsTool::NAME => {
                GetWorkspaceProjectsTool::http_handler(arguments, api).await
            }
            FindProjectByNameTool::NAME => {
                FindProjectByNameTool::http_handler(arguments, api).await
            }
            GetWorkspaceTagsTool::NAME => GetWorkspaceTagsTool::http_handler(arguments, api).await,
            GetCurrentUserTool::NAME => GetCurrentUserTool::http_handler(arguments, api).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::not_found(name));
            }
        };

        result.map_err(ToolError::invalid_arguments)
    }
}
