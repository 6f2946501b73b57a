//! Project lookup by exact name.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::domains::toggl::{TogglApi, TogglError};
use crate::domains::tools::definitions::common::{
    api_route, format_error, format_response, tool_model,
};

/// Parameters for finding a project.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FindProjectByNameParams {
    #[schemars(description = "Workspace ID")]
    pub workspace_id: u64,

    #[schemars(description = "Exact project name (case-sensitive)")]
    pub project_name: String,
}

/// Return the first project whose `name` equals `name` exactly.
pub fn find_project<'a>(projects: &'a [Value], name: &str) -> Option<&'a Value> {
    projects
        .iter()
        .find(|p| p.get("name").and_then(Value::as_str) == Some(name))
}

#[derive(Debug, Clone)]
pub struct FindProjectByNameTool;

impl FindProjectByNameTool {
    pub const NAME: &'static str = "find_project_by_name";

    pub const DESCRIPTION: &'static str =
        "Find a project in a workspace by its exact, case-sensitive name and return it.";

    pub async fn execute(params: &FindProjectByNameParams, api: &TogglApi) -> CallToolResult {
        info!(
            "Looking up project '{}' in workspace {}",
            params.project_name, params.workspace_id
        );

        match Self::lookup(params, api).await {
            Ok(project) => format_response(&project),
            Err(e) => format_error(&e),
        }
    }

    async fn lookup(params: &FindProjectByNameParams, api: &TogglApi) -> Result<Value, TogglError> {
        let projects = api.list_projects(params.workspace_id).await?;

        find_project(&projects, &params.project_name)
            .cloned()
            .ok_or_else(|| {
                TogglError::not_found(format!(
                    "Project '{}' not found in workspace {}",
                    params.project_name, params.workspace_id
                ))
            })
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        api: Arc<TogglApi>,
    ) -> Result<serde_json::Value, String> {
        use crate::domains::tools::definitions::common::{http_response, parse_http_arguments};

        let params: FindProjectByNameParams = parse_http_arguments(arguments)?;
        Ok(http_response(Self::execute(&params, &api).await))
    }

    pub fn to_tool() -> Tool {
        tool_model::<FindProjectByNameParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(api: Arc<TogglApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        api_route(
            Self::to_tool(),
            api,
            |params: FindProjectByNameParams, api: Arc<TogglApi>| async move {
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

    fn projects() -> Value {
        json!([
            { "name": "Alpha", "id": 1, "color": "#06aaf5" },
            { "name": "beta", "id": 2 }
        ])
    }

    fn params(name: &str) -> FindProjectByNameParams {
        FindProjectByNameParams {
            workspace_id: 10,
            project_name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_exact_match_returns_project_verbatim() {
        let executor = Arc::new(ScriptedExecutor::new().ok(projects()));
        let api = test_api(executor.clone());

        let result = FindProjectByNameTool::execute(&params("Alpha"), &api).await;
        assert_eq!(result.is_error, Some(false));

        let project: Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(project, json!({ "name": "Alpha", "id": 1, "color": "#06aaf5" }));
        assert_eq!(executor.calls()[0].url, api.url("/workspaces/10/projects"));
    }

    #[tokio::test]
    async fn test_case_mismatch_is_not_found() {
        let executor = Arc::new(ScriptedExecutor::new().ok(projects()));
        let api = test_api(executor);

        let result = FindProjectByNameTool::execute(&params("alpha"), &api).await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "An error occurred: Not found: Project 'alpha' not found in workspace 10"
        );
    }

    #[test]
    fn test_find_project_first_match_wins() {
        let list = vec![json!({ "name": "Dup", "id": 1 }), json!({ "name": "Dup", "id": 2 })];
        assert_eq!(find_project(&list, "Dup").unwrap()["id"], 1);
        assert!(find_project(&list, "dup").is_none());
    }
}
