//! Running time entry tool.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use tracing::info;

use crate::domains::toggl::TogglApi;
use crate::domains::tools::definitions::common::{NoParams, api_route, respond, tool_model};

/// Returns the currently running time entry, or `null` when none is running.
#[derive(Debug, Clone)]
pub struct GetCurrentTimeEntryTool;

impl GetCurrentTimeEntryTool {
    pub const NAME: &'static str = "get_current_time_entry";

    pub const DESCRIPTION: &'static str =
        "Get the currently running time entry (null when no timer is running).";

    pub async fn execute(api: &TogglApi) -> CallToolResult {
        info!("Fetching current time entry");
        respond(api.get(&api.url("/me/time_entries/current")).await)
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
    use serde_json::Value;

    #[tokio::test]
    async fn test_no_running_entry_renders_null() {
        let executor = Arc::new(ScriptedExecutor::new().ok(Value::Null));
        let api = test_api(executor.clone());

        let result = GetCurrentTimeEntryTool::execute(&api).await;
        assert_eq!(text_of(&result), "null");
        assert_eq!(executor.calls()[0].url, api.url("/me/time_entries/current"));
    }
}
