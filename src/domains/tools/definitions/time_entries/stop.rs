//! Running time entry stop tool.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use serde_json::Value;
use tracing::info;

use super::delete::TimeEntryRefParams;
use crate::domains::toggl::TogglApi;
use crate::domains::tools::definitions::common::{api_route, respond, tool_model};

#[derive(Debug, Clone)]
pub struct StopTimeEntryTool;

impl StopTimeEntryTool {
    pub const NAME: &'static str = "stop_time_entry";

    pub const DESCRIPTION: &'static str = "Stop a running time entry.";

    pub async fn execute(params: &TimeEntryRefParams, api: &TogglApi) -> CallToolResult {
        info!(
            "Stopping time entry {} in workspace {}",
            params.time_entry_id, params.workspace_id
        );

        let url = api.url(&format!(
            "/workspaces/{}/time_entries/{}/stop",
            params.workspace_id, params.time_entry_id
        ));
        respond(api.patch::<Value>(&url, None).await)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::toggl::testing::{ScriptedExecutor, test_api};
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_patches_stop_endpoint_without_body() {
        let executor = Arc::new(ScriptedExecutor::new().ok(json!({ "id": 4, "stop": "2024-04-08T10:00:00Z" })));
        let api = test_api(executor.clone());
        let params = TimeEntryRefParams {
            workspace_id: 1,
            time_entry_id: 4,
        };

        let result = StopTimeEntryTool::execute(&params, &api).await;
        assert_eq!(result.is_error, Some(false));

        let call = &executor.calls()[0];
        assert_eq!(call.method, Method::PATCH);
        assert_eq!(call.url, api.url("/workspaces/1/time_entries/4/stop"));
        assert!(call.body.is_none());
    }
}
