//! Current user tool.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use tracing::info;

use crate::domains::toggl::TogglApi;
use crate::domains::tools::definitions::common::{NoParams, api_route, respond, tool_model};

#[derive(Debug, Clone)]
pub struct GetCurrentUserTool;

impl GetCurrentUserTool {
    pub const NAME: &'static str = "get_current_user";

    pub const DESCRIPTION: &'static str =
        "Get the profile of the user owning the API token, including the default workspace ID.";

    pub async fn execute(api: &TogglApi) -> CallToolResult {
        info!("Fetching current user");
        respond(api.get(&api.url("/me")).await)
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
    use serde_json::json;

    #[tokio::test]
    async fn test_fetches_me() {
        let executor = Arc::new(ScriptedExecutor::new().ok(json!({ "id": 1, "default_workspace_id": 9 })));
        let api = test_api(executor.clone());

        let result = GetCurrentUserTool::execute(&api).await;
        assert_eq!(result.is_error, Some(false));
        assert_eq!(executor.calls()[0].url, api.url("/me"));
    }

    // Integration test (requires TOGGL_API_TOKEN and network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_live_current_user() {
        let config = crate::core::Config::from_env();
        let api = TogglApi::from_config(&config).unwrap();

        let result = GetCurrentUserTool::execute(&api).await;
        assert!(
            !result.is_error.unwrap_or(true),
            "Expected success but got error"
        );
    }
}
