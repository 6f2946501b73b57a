//! Bulk time entry edit tool.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::toggl::{BulkTimeEntryUpdate, TogglApi, TogglError};
use crate::domains::tools::definitions::common::{api_route, format_error, respond, tool_model};

/// Parameters for editing several time entries at once.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkEditTimeEntriesParams {
    #[schemars(description = "Workspace ID")]
    pub workspace_id: u64,

    #[schemars(description = "IDs of the time entries to edit")]
    pub time_entry_ids: Vec<u64>,

    #[schemars(description = "Project ID to assign")]
    #[serde(default)]
    pub project_id: Option<u64>,

    #[schemars(description = "Task ID to assign")]
    #[serde(default)]
    pub task_id: Option<u64>,

    #[schemars(description = "Tag names to set")]
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    #[schemars(description = "Billable flag to set")]
    #[serde(default)]
    pub billable: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct BulkEditTimeEntriesTool;

impl BulkEditTimeEntriesTool {
    pub const NAME: &'static str = "bulk_edit_time_entries";

    pub const DESCRIPTION: &'static str =
        "Apply the same project, task, tags or billable flag to several time entries.";

    pub async fn execute(params: &BulkEditTimeEntriesParams, api: &TogglApi) -> CallToolResult {
        info!(
            "Bulk editing {} time entries in workspace {}",
            params.time_entry_ids.len(),
            params.workspace_id
        );

        if params.time_entry_ids.is_empty() {
            return format_error(&TogglError::validation("timeEntryIds must not be empty"));
        }

        let body = BulkTimeEntryUpdate {
            time_entry_ids: params.time_entry_ids.clone(),
            project_id: params.project_id,
            task_id: params.task_id,
            tags: params.tags.clone(),
            billable: params.billable,
        };

        let url = api.url(&format!("/workspaces/{}/time_entries", params.workspace_id));
        respond(api.patch(&url, Some(&body)).await)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        api: Arc<TogglApi>,
    ) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::{http_response, parse_http_arguments};

        let params: BulkEditTimeEntriesParams = parse_http_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &api).await))
    }

    pub fn to_tool() -> Tool {
        tool_model::<BulkEditTimeEntriesParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(api: Arc<TogglApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(
            Self::to_tool(),
            api,
            |params: BulkEditTimeEntriesParams, api: Arc<TogglApi>| async move {
                Self::execute(&params, &api).await
            },
        )
    }
}
