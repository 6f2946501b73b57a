//! Workspace tag listing tool.

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

/// Identifies a workspace.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceParams {
    #[schemars(description = "Workspace ID")]
    pub workspace_id: u64,
}

#[derive(Debug, Clone)]
pub struct GetWorkspaceTagsTool;

impl GetWorkspaceTagsTool {
    pub const NAME: &'static str = "get_workspace_tags";

    pub const DESCRIPTION: &'static str = "List the tags defined in a workspace.";

    pub async fn execute(params: &WorkspaceParams, api: &TogglApi) -> CallToolResult {
        info!("Listing tags of workspace {}", params.workspace_id);
        respond(api.get(&api.url(&format!("/workspaces/{}/tags", params.workspace_id))).await)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        api: Arc<TogglApi>,
    ) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::{http_response, parse_http_arguments};

        let params: WorkspaceParams = parse_http_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &api).await))
    }

    pub fn to_tool() -> Tool {
        tool_model::<WorkspaceParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(api: Arc<TogglApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(
            Self::to_tool(),
            api,
            |params: WorkspaceParams, api: Arc<TogglApi>| async move {
                Self::execute(&params, &api).await
            },
        )
    }
}
