//! Time entry creation tool.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::toggl::{
    NewTimeEntry, TogglApi, TogglError,
    time::{derive_duration, require_iso_datetime},
};
use crate::domains::tools::definitions::common::{api_route, format_error, respond, tool_model};

/// Parameters for creating a time entry.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeEntryParams {
    #[schemars(description = "Workspace ID")]
    pub workspace_id: u64,

    #[schemars(description = "Start time (ISO 8601, e.g. 2024-04-08T09:00:00Z)")]
    pub start: String,

    #[schemars(description = "Stop time (ISO 8601); used to compute the duration when none is given")]
    #[serde(default)]
    pub stop: Option<String>,

    #[schemars(description = "Duration in seconds (takes precedence over stop)")]
    #[serde(default)]
    pub duration: Option<i64>,

    #[schemars(description = "Description of the time entry")]
    #[serde(default)]
    pub description: Option<String>,

    #[schemars(description = "Project ID")]
    #[serde(default)]
    pub project_id: Option<u64>,

    #[schemars(description = "Task ID")]
    #[serde(default)]
    pub task_id: Option<u64>,

    #[schemars(description = "Whether the entry is billable (default: false)")]
    #[serde(default)]
    pub billable: Option<bool>,

    #[schemars(description = "Tag names")]
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl CreateTimeEntryParams {
    /// Validate dates and build the request body.
    pub fn to_body(&self, created_with: &str) -> Result<NewTimeEntry, TogglError> {
        let start = require_iso_datetime("start", &self.start)?;
        let stop = self
            .stop
            .as_deref()
            .map(|s| require_iso_datetime("stop", s))
            .transpose()?;

        Ok(NewTimeEntry {
            created_with: created_with.to_string(),
            description: self.description.clone(),
            project_id: self.project_id,
            task_id: self.task_id,
            billable: self.billable.unwrap_or(false),
            start: self.start.clone(),
            stop: self.stop.clone(),
            duration: derive_duration(self.duration, start, stop),
            tags: self.tags.clone().unwrap_or_default(),
            workspace_id: self.workspace_id,
        })
    }
}

/// Time entry creation tool implementation.
#[derive(Debug, Clone)]
pub struct CreateTimeEntryTool;

impl CreateTimeEntryTool {
    pub const NAME: &'static str = "create_time_entry";

    pub const DESCRIPTION: &'static str = "Create a time entry in a workspace. \
         The duration is taken from `duration`, else computed from start/stop, else 0.";

    pub async fn execute(params: &CreateTimeEntryParams, api: &TogglApi) -> CallToolResult {
        info!("Creating time entry in workspace {}", params.workspace_id);

        let body = match params.to_body(api.created_with()) {
            Ok(body) => body,
            Err(e) => return format_error(&e),
        };

        let url = api.url(&format!("/workspaces/{}/time_entries", params.workspace_id));
        respond(api.post(&url, &body).await)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        api: Arc<TogglApi>,
    ) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::{http_response, parse_http_arguments};

        let params: CreateTimeEntryParams = parse_http_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &api).await))
    }

    pub fn to_tool() -> Tool {
        tool_model::<CreateTimeEntryParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(api: Arc<TogglApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(
            Self::to_tool(),
            api,
            |params: CreateTimeEntryParams, api: Arc<TogglApi>| async move {
                Self::execute(&params, &api).await
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::toggl::testing::{ScriptedExecutor, test_api};
    use crate::domains::tools::definitions::common::text_of;
    use serde_json::json;

    fn params(value: serde_json::Value) -> CreateTimeEntryParams {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_workspace_and_start_required() {
        assert!(serde_json::from_value::<CreateTimeEntryParams>(json!({ "start": "x" })).is_err());
        assert!(
            serde_json::from_value::<CreateTimeEntryParams>(json!({ "workspaceId": 1 })).is_err()
        );
    }

    #[test]
    fn test_duration_from_stop() {
        let body = params(json!({
            "workspaceId": 1,
            "start": "2024-04-08T09:00:00Z",
            "stop": "2024-04-08T09:45:30.900Z"
        }))
        .to_body("toggl-mcp-server")
        .unwrap();
        assert_eq!(body.duration, 2730);
        assert_eq!(body.stop.as_deref(), Some("2024-04-08T09:45:30.900Z"));
    }

    #[test]
    fn test_explicit_duration_wins() {
        let body = params(json!({
            "workspaceId": 1,
            "start": "2024-04-08T09:00:00Z",
            "stop": "2024-04-08T10:00:00Z",
            "duration": 60
        }))
        .to_body("toggl-mcp-server")
        .unwrap();
        assert_eq!(body.duration, 60);
    }

    #[tokio::test]
    async fn test_posts_body_with_defaults() {
        let executor = Arc::new(ScriptedExecutor::new().ok(json!({ "id": 555, "duration": 0 })));
        let api = test_api(executor.clone());
        let params = params(json!({
            "workspaceId": 9,
            "start": "2024-04-08T09:00:00Z",
            "description": "Planning"
        }));

        let result = CreateTimeEntryTool::execute(&params, &api).await;
        assert_eq!(result.is_error, Some(false));
        assert!(text_of(&result).contains("555"));

        let call = &executor.calls()[0];
        assert_eq!(call.url, api.url("/workspaces/9/time_entries"));
        assert_eq!(
            call.body,
            Some(json!({
                "created_with": "toggl-mcp-server",
                "description": "Planning",
                "billable": false,
                "start": "2024-04-08T09:00:00Z",
                "duration": 0,
                "tags": [],
                "workspace_id": 9
            }))
        );
    }

    #[tokio::test]
    async fn test_bare_date_start_rejected() {
        let executor = Arc::new(ScriptedExecutor::new());
        let api = test_api(executor.clone());
        let params = params(json!({ "workspaceId": 9, "start": "2024-04-08" }));

        let result = CreateTimeEntryTool::execute(&params, &api).await;
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("start"));
        assert!(executor.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_is_formatted() {
        let executor = Arc::new(
            ScriptedExecutor::new().fail(TogglError::upstream(400, "Bad Request", Some("bad tag".into()))),
        );
        let api = test_api(executor);
        let params = params(json!({ "workspaceId": 9, "start": "2024-04-08T09:00:00Z" }));

        let result = CreateTimeEntryTool::execute(&params, &api).await;
        assert_eq!(
            text_of(&result),
            "An error occurred: API error: 400 Bad Request - bad tag"
        );
    }
}
