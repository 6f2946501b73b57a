//! Workspace listing tool.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use tracing::info;

use crate::domains::toggl::TogglApi;
use crate::domains::tools::definitions::common::{NoParams, api_route, respond, tool_model};

#[derive(Debug, Clone)]
pub struct GetWorkspacesTool;

impl GetWorkspacesTool {
    pub const NAME: &'static str = "get_workspaces";

    pub const DESCRIPTION: &'static str = "List the workspaces the current user belongs to.";

    pub async fn execute(api: &TogglApi) -> CallToolResult {
        info!("Listing workspaces");
        respond(api.get(&api.url("/workspaces")).await)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        _arguments: serde_json::Value,
        api: Arc<TogglApi>,
    ) -> Result<serde_json::Value, String> {
        Ok(crate::domains::tools::definitions::common::http_response(
            Self::execute(&api).await,
        ))
    }

    pub fn to_tool() -> Tool {
        tool_model::<NoParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(api: Arc<TogglApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(
            Self::to_tool(),
            api,
            |_: NoParams, api: Arc<TogglApi>| async move { Self::execute(&api).await },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::toggl::testing::{ScriptedExecutor, test_api};
    use crate::domains::tools::definitions::common::text_of;
    use serde_json::json;

    #[tokio::test]
    async fn test_lists_workspaces() {
        let executor = Arc::new(ScriptedExecutor::new().ok(json!([{ "id": 1, "name": "Personal" }])));
        let api = test_api(executor.clone());

        let result = GetWorkspacesTool::execute(&api).await;
        assert!(text_of(&result).contains("Personal"));
        assert_eq!(executor.calls()[0].url, api.url("/workspaces"));
    }
}
