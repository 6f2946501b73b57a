//! Workspace project listing tool.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::toggl::{ProjectsQuery, TogglApi};
use crate::domains::tools::definitions::common::{api_route, format_error, respond, tool_model};

/// Parameters for listing projects.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetWorkspaceProjectsParams {
    #[schemars(description = "Workspace ID")]
    pub workspace_id: u64,

    #[schemars(description = "Only active (true) or archived (false) projects")]
    #[serde(default)]
    pub active: Option<bool>,

    #[schemars(description = "Page number")]
    #[serde(default)]
    pub page: Option<u32>,

    #[schemars(description = "Results per page")]
    #[serde(default)]
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct GetWorkspaceProjectsTool;

impl GetWorkspaceProjectsTool {
    pub const NAME: &'static str = "get_workspace_projects";

    pub const DESCRIPTION: &'static str =
        "List the projects of a workspace, optionally filtered by active state and paginated.";

    pub async fn execute(params: &GetWorkspaceProjectsParams, api: &TogglApi) -> CallToolResult {
        info!("Listing projects of workspace {}", params.workspace_id);

        let query = ProjectsQuery {
            active: params.active,
            page: params.page,
            per_page: params.per_page,
        };

        match api.url_with_query(&format!("/workspaces/{}/projects", params.workspace_id), &query) {
            Ok(url) => respond(api.get(&url).await),
            Err(e) => format_error(&e),
        }
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        api: Arc<TogglApi>,
    ) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::{http_response, parse_http_arguments};

        let params: GetWorkspaceProjectsParams = parse_http_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &api).await))
    }

    pub fn to_tool() -> Tool {
        tool_model::<GetWorkspaceProjectsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(api: Arc<TogglApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(
            Self::to_tool(),
            api,
            |params: GetWorkspaceProjectsParams, api: Arc<TogglApi>| async move {
                Self::execute(&params, &api).await
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::toggl::testing::{ScriptedExecutor, test_api};
    use serde_json::json;

    #[tokio::test]
    async fn test_query_parameters() {
        let executor = Arc::new(ScriptedExecutor::new().ok(json!([])));
        let api = test_api(executor.clone());
        let params: GetWorkspaceProjectsParams = serde_json::from_value(json!({
            "workspaceId": 5,
            "active": true,
            "page": 2,
            "perPage": 50
        }))
        .unwrap();

        GetWorkspaceProjectsTool::execute(&params, &api).await;
        assert_eq!(
            executor.calls()[0].url,
            api.url("/workspaces/5/projects?active=true&page=2&per_page=50")
        );
    }

    #[tokio::test]
    async fn test_active_false_is_sent() {
        let executor = Arc::new(ScriptedExecutor::new().ok(json!([])));
        let api = test_api(executor.clone());
        let params: GetWorkspaceProjectsParams =
            serde_json::from_value(json!({ "workspaceId": 5, "active": false })).unwrap();

        GetWorkspaceProjectsTool::execute(&params, &api).await;
        assert_eq!(
            executor.calls()[0].url,
            api.url("/workspaces/5/projects?active=false")
        );
    }
}
