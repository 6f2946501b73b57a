//! Time entry update tool.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::toggl::{
    TimeEntryUpdate, TogglApi, TogglError, time::validate_optional_iso,
};
use crate::domains::tools::definitions::common::{api_route, format_error, respond, tool_model};

/// Parameters for updating a time entry. Only supplied fields are changed.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimeEntryParams {
    #[schemars(description = "Workspace ID")]
    pub workspace_id: u64,

    #[schemars(description = "Time entry ID")]
    pub time_entry_id: u64,

    #[schemars(description = "New description")]
    #[serde(default)]
    pub description: Option<String>,

    #[schemars(description = "New project ID")]
    #[serde(default)]
    pub project_id: Option<u64>,

    #[schemars(description = "New task ID")]
    #[serde(default)]
    pub task_id: Option<u64>,

    #[schemars(description = "Billable flag")]
    #[serde(default)]
    pub billable: Option<bool>,

    #[schemars(description = "New start time (ISO 8601)")]
    #[serde(default)]
    pub start: Option<String>,

    #[schemars(description = "New stop time (ISO 8601)")]
    #[serde(default)]
    pub stop: Option<String>,

    #[schemars(description = "New duration in seconds")]
    #[serde(default)]
    pub duration: Option<i64>,

    #[schemars(description = "Replacement tag names")]
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl UpdateTimeEntryParams {
    pub fn to_body(&self) -> Result<TimeEntryUpdate, TogglError> {
        validate_optional_iso("start", self.start.as_deref())?;
        validate_optional_iso("stop", self.stop.as_deref())?;

        Ok(TimeEntryUpdate {
            description: self.description.clone(),
            project_id: self.project_id,
            task_id: self.task_id,
            billable: self.billable,
            start: self.start.clone(),
            stop: self.stop.clone(),
            duration: self.duration,
            tags: self.tags.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateTimeEntryTool;

impl UpdateTimeEntryTool {
    pub const NAME: &'static str = "update_time_entry";

    pub const DESCRIPTION: &'static str =
        "Update an existing time entry. Only the fields provided are sent.";

    pub async fn execute(params: &UpdateTimeEntryParams, api: &TogglApi) -> CallToolResult {
        info!(
            "Updating time entry {} in workspace {}",
            params.time_entry_id, params.workspace_id
        );

        let body = match params.to_body() {
            Ok(body) => body,
            Err(e) => return format_error(&e),
        };

        let url = api.url(&format!(
            "/workspaces/{}/time_entries/{}",
            params.workspace_id, params.time_entry_id
        ));
        respond(api.put(&url, &body).await)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        api: Arc<TogglApi>,
    ) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::{http_response, parse_http_arguments};

        let params: UpdateTimeEntryParams = parse_http_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &api).await))
    }

    pub fn to_tool() -> Tool {
        tool_model::<UpdateTimeEntryParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(api: Arc<TogglApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(
            Self::to_tool(),
            api,
            |params: UpdateTimeEntryParams, api: Arc<TogglApi>| async move {
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
    async fn test_sends_only_supplied_fields() {
        let executor = Arc::new(ScriptedExecutor::new().ok(json!({ "id": 5 })));
        let api = test_api(executor.clone());
        let params: UpdateTimeEntryParams = serde_json::from_value(json!({
            "workspaceId": 1,
            "timeEntryId": 5,
            "description": "Renamed",
            "tags": []
        }))
        .unwrap();

        let result = UpdateTimeEntryTool::execute(&params, &api).await;
        assert_eq!(result.is_error, Some(false));

        let call = &executor.calls()[0];
        assert_eq!(call.method, Method::PUT);
        assert_eq!(call.url, api.url("/workspaces/1/time_entries/5"));
        assert_eq!(call.body, Some(json!({ "description": "Renamed", "tags": [] })));
    }

    #[tokio::test]
    async fn test_rejects_bare_date_start() {
        let executor = Arc::new(ScriptedExecutor::new());
        let api = test_api(executor.clone());
        let params: UpdateTimeEntryParams = serde_json::from_value(json!({
            "workspaceId": 1,
            "timeEntryId": 5,
            "start": "2024-04-08"
        }))
        .unwrap();

        let result = UpdateTimeEntryTool::execute(&params, &api).await;
        assert_eq!(result.is_error, Some(true));
        assert!(executor.calls().is_empty());
    }
}
