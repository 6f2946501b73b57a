//! Time entry deletion tool.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::toggl::TogglApi;
use crate::domains::tools::definitions::common::{api_route, respond, tool_model};

/// Identifies a single time entry in a workspace.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryRefParams {
    #[schemars(description = "Workspace ID")]
    pub workspace_id: u64,

    #[schemars(description = "Time entry ID")]
    pub time_entry_id: u64,
}

#[derive(Debug, Clone)]
pub struct DeleteTimeEntryTool;

impl DeleteTimeEntryTool {
    pub const NAME: &'static str = "delete_time_entry";

    pub const DESCRIPTION: &'static str = "Delete a time entry.";

    pub async fn execute(params: &TimeEntryRefParams, api: &TogglApi) -> CallToolResult {
        info!(
            "Deleting time entry {} in workspace {}",
            params.time_entry_id, params.workspace_id
        );

        let url = api.url(&format!(
            "/workspaces/{}/time_entries/{}",
            params.workspace_id, params.time_entry_id
        ));
        respond(api.delete(&url).await)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        api: Arc<TogglApi>,
    ) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::{http_response, parse_http_arguments};

        let params: TimeEntryRefParams = parse_http_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &api).await))
    }

    pub fn to_tool() -> Tool {
        tool_model::<TimeEntryRefParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(api: Arc<TogglApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(
            Self::to_tool(),
            api,
            |params: TimeEntryRefParams, api: Arc<TogglApi>| async move {
                Self::execute(&params, &api).await
            },
        )
    }
}
