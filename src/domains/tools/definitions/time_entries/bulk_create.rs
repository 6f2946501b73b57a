//! Bulk time entry creation tool.
//!
//! Thin wrapper over [`BulkOrchestrator`]: entries are submitted one by one
//! with pacing and the summary lists every entry's outcome.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::toggl::{BulkEntryInput, BulkOrchestrator, PacingPolicy, TogglApi};
use crate::domains::tools::definitions::common::{
    api_route, format_error, format_response, tool_model,
};

/// Parameters for bulk creation.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateTimeEntriesParams {
    #[schemars(description = "Workspace ID")]
    pub workspace_id: u64,

    #[schemars(description = "Entries to create, submitted in order")]
    pub entries: Vec<BulkEntryInput>,
}

#[derive(Debug, Clone)]
pub struct BulkCreateTimeEntriesTool;

impl BulkCreateTimeEntriesTool {
    pub const NAME: &'static str = "bulk_create_time_entries";

    pub const DESCRIPTION: &'static str = "Create several time entries in one call. \
         Projects may be referenced by ID or exact name. Entries are submitted one per \
         second; a failing entry is reported and does not stop the others. Returns totals, \
         billable hours and a per-entry result list.";

    pub async fn execute(
        params: &BulkCreateTimeEntriesParams,
        api: &TogglApi,
        pacing: PacingPolicy,
    ) -> CallToolResult {
        info!(
            "Bulk creating {} time entries in workspace {}",
            params.entries.len(),
            params.workspace_id
        );

        match BulkOrchestrator::new(api, pacing)
            .bulk_create(params.workspace_id, &params.entries)
            .await
        {
            Ok(summary) => format_response(&summary),
            Err(e) => format_error(&e),
        }
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        api: Arc<TogglApi>,
        pacing: PacingPolicy,
    ) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::{http_response, parse_http_arguments};

        let params: BulkCreateTimeEntriesParams = parse_http_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &api, pacing).await))
    }

    pub fn to_tool() -> Tool {
        tool_model::<BulkCreateTimeEntriesParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(api: Arc<TogglApi>, pacing: PacingPolicy) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(
            Self::to_tool(),
            api,
            move |params: BulkCreateTimeEntriesParams, api: Arc<TogglApi>| async move {
                Self::execute(&params, &api, pacing).await
            },
        )
    }
}
