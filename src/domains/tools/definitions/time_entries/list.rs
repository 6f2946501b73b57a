//! Time entry listing tool.
//!
//! Lists the current user's time entries, optionally bounded by ISO 8601
//! dates or a UNIX timestamp.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::toggl::{TimeEntriesQuery, TogglApi, TogglError, time::validate_optional_iso};
use crate::domains::tools::definitions::common::{api_route, format_error, respond, tool_model};

/// Parameters for listing time entries.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTimeEntriesParams {
    #[schemars(description = "Start of the range (ISO 8601, e.g. 2024-04-08T00:00:00Z)")]
    #[serde(default)]
    pub start_date: Option<String>,

    #[schemars(description = "End of the range (ISO 8601, e.g. 2024-04-14T23:59:59Z)")]
    #[serde(default)]
    pub end_date: Option<String>,

    #[schemars(description = "Only entries before this date-time (ISO 8601)")]
    #[serde(default)]
    pub before: Option<String>,

    #[schemars(description = "Only entries modified since this UNIX timestamp")]
    #[serde(default)]
    pub since: Option<i64>,
}

impl GetTimeEntriesParams {
    fn validate(&self) -> Result<(), TogglError> {
        validate_optional_iso("startDate", self.start_date.as_deref())?;
        validate_optional_iso("endDate", self.end_date.as_deref())?;
        validate_optional_iso("before", self.before.as_deref())
    }
}

/// Time entry listing tool implementation.
#[derive(Debug, Clone)]
pub struct GetTimeEntriesTool;

impl GetTimeEntriesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_time_entries";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the current user's time entries. \
         Optionally filter by startDate/endDate, entries before a date-time, \
         or entries modified since a UNIX timestamp.";

    /// Execute the tool logic.
    pub async fn execute(params: &GetTimeEntriesParams, api: &TogglApi) -> CallToolResult {
        info!("Listing time entries");

        if let Err(e) = params.validate() {
            return format_error(&e);
        }

        let query = TimeEntriesQuery {
            start_date: params.start_date.as_deref(),
            end_date: params.end_date.as_deref(),
            before: params.before.as_deref(),
            // 0 means no lower bound
            since: params.since.filter(|s| *s != 0),
        };

        match api.url_with_query("/me/time_entries", &query) {
            Ok(url) => respond(api.get(&url).await),
            Err(e) => format_error(&e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        api: Arc<TogglApi>,
    ) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::{http_response, parse_http_arguments};

        let params: GetTimeEntriesParams = parse_http_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &api).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_model::<GetTimeEntriesParams>(Self::NAME, Self::DESCRIPTION)
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(api: Arc<TogglApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(
            Self::to_tool(),
            api,
            |params: GetTimeEntriesParams, api: Arc<TogglApi>| async move {
                Self::execute(&params, &api).await
            },
        )
    }
}
