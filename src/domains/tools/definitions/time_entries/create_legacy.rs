//! Flat-body time entry creation tool.
//!
//! Uses the `pid`/`tid`/`wid` body accepted with `?meta=true`, the same shape
//! bulk creation submits. The response includes expanded project metadata.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::toggl::{
    LegacyTimeEntry, MetaQuery, TogglApi, TogglError,
    time::{derive_duration, require_iso_datetime},
};
use crate::domains::tools::definitions::common::{api_route, format_error, respond, tool_model};

/// Parameters for flat-body creation.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLegacyTimeEntryParams {
    #[schemars(description = "Workspace ID")]
    pub workspace_id: u64,

    #[schemars(description = "Start time (ISO 8601, e.g. 2024-04-08T09:00:00Z)")]
    pub start: String,

    #[schemars(description = "Stop time (ISO 8601)")]
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

    #[schemars(description = "Whether the entry is billable (default: false)")]
    #[serde(default)]
    pub billable: Option<bool>,

    #[schemars(description = "Tag names")]
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl CreateLegacyTimeEntryParams {
    pub fn to_body(&self, created_with: &str) -> Result<LegacyTimeEntry, TogglError> {
        let start = require_iso_datetime("start", &self.start)?;
        let stop = self
            .stop
            .as_deref()
            .map(|s| require_iso_datetime("stop", s))
            .transpose()?;

        let mut body = LegacyTimeEntry::new(self.workspace_id, created_with, &self.start);
        body.billable = self.billable.unwrap_or(false);
        body.description = self.description.clone();
        body.duration = derive_duration(self.duration, start, stop);
        body.pid = self.project_id;
        body.stop = self.stop.clone();
        body.tags = self.tags.clone().unwrap_or_default();
        Ok(body)
    }
}

#[derive(Debug, Clone)]
pub struct CreateLegacyTimeEntryTool;

impl CreateLegacyTimeEntryTool {
    pub const NAME: &'static str = "create_time_entry_legacy";

    pub const DESCRIPTION: &'static str = "Create a time entry using the flat pid/tid/wid body \
         with meta=true, returning the entry with expanded project metadata.";

    pub async fn execute(params: &CreateLegacyTimeEntryParams, api: &TogglApi) -> CallToolResult {
        info!(
            "Creating time entry (flat body) in workspace {}",
            params.workspace_id
        );

        let body = match params.to_body(api.created_with()) {
            Ok(body) => body,
            Err(e) => return format_error(&e),
        };

        let url = match api.url_with_query(
            &format!("/workspaces/{}/time_entries", params.workspace_id),
            &MetaQuery { meta: true },
        ) {
            Ok(url) => url,
            Err(e) => return format_error(&e),
        };

        respond(api.post(&url, &body).await)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        api: Arc<TogglApi>,
    ) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::{http_response, parse_http_arguments};

        let params: CreateLegacyTimeEntryParams = parse_http_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &api).await))
    }

    pub fn to_tool() -> Tool {
        tool_model::<CreateLegacyTimeEntryParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(api: Arc<TogglApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(
            Self::to_tool(),
            api,
            |params: CreateLegacyTimeEntryParams, api: Arc<TogglApi>| async move {
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
    async fn test_posts_flat_body_with_meta() {
        let executor = Arc::new(ScriptedExecutor::new().ok(json!({ "id": 12 })));
        let api = test_api(executor.clone()).with_created_with("my-client");
        let params: CreateLegacyTimeEntryParams = serde_json::from_value(json!({
            "workspaceId": 3,
            "start": "2024-04-08T09:00:00Z",
            "stop": "2024-04-08T09:30:00Z",
            "projectId": 8,
            "tags": ["deep-work"]
        }))
        .unwrap();

        let result = CreateLegacyTimeEntryTool::execute(&params, &api).await;
        assert_eq!(result.is_error, Some(false));

        let call = &executor.calls()[0];
        assert_eq!(call.url, api.url("/workspaces/3/time_entries?meta=true"));
        assert_eq!(
            call.body,
            Some(json!({
                "billable": false,
                "created_with": "my-client",
                "duration": 1800,
                "pid": 8,
                "start": "2024-04-08T09:00:00Z",
                "stop": "2024-04-08T09:30:00Z",
                "tags": ["deep-work"],
                "tid": null,
                "wid": 3,
                "groupBy": ""
            }))
        );
    }

    #[tokio::test]
    async fn test_invalid_stop_rejected() {
        let executor = Arc::new(ScriptedExecutor::new());
        let api = test_api(executor.clone());
        let params: CreateLegacyTimeEntryParams = serde_json::from_value(json!({
            "workspaceId": 3,
            "start": "2024-04-08T09:00:00Z",
            "stop": "soon"
        }))
        .unwrap();

        let result = CreateLegacyTimeEntryTool::execute(&params, &api).await;
        assert_eq!(result.is_error, Some(true));
        assert!(executor.calls().is_empty());
    }
}
