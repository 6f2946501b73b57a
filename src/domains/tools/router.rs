//! Tool Router - builds the rmcp ToolRouter for STDIO/TCP transport.
//!
//! Each tool knows how to create its own route; this module only lists them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::toggl::{PacingPolicy, TogglApi};

use super::definitions::{
    BulkCreateTimeEntriesTool, BulkEditTimeEntriesTool, CreateLegacyTimeEntryTool,
    CreateTimeEntryTool, DeleteTimeEntryTool, FindProjectByNameTool, GetCurrentTimeEntryTool,
    GetCurrentUserTool, GetTimeEntriesTool, GetWorkspaceProjectsTool, GetWorkspaceTagsTool,
    GetWorkspacesTool, StopTimeEntryTool, UpdateTimeEntryTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(api: Arc<TogglApi>, pacing: PacingPolicy) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetTimeEntriesTool::create_route(api.clone()))
        .with_route(GetCurrentTimeEntryTool::create_route(api.clone()))
        .with_route(CreateTimeEntryTool::create_route(api.clone()))
        .with_route(CreateLegacyTimeEntryTool::create_route(api.clone()))
        .with_route(UpdateTimeEntryTool::create_route(api.clone()))
        .with_route(DeleteTimeEntryTool::create_route(api.clone()))
        .with_route(StopTimeEntryTool::create_route(api.clone()))
        .with_route(BulkEditTimeEntriesTool::create_route(api.clone()))
        .with_route(BulkCreateTimeEntriesTool::create_route(api.clone(), pacing))
        .with_route(GetWorkspacesTool::create_route(api.clone()))
        .with_route(GetWorkspaceProjectsTool::create_route(api.clone()))
        .with_route(FindProjectByNameTool::create_route(api.clone()))
        .with_route(GetWorkspaceTagsTool::create_route(api.clone()))
        .with_route(GetCurrentUserTool::create_route(api))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::domains::toggl::testing::{ScriptedExecutor, test_api};

    struct TestServer {}

    fn api() -> Arc<TogglApi> {
        Arc::new(test_api(Arc::new(ScriptedExecutor::new())))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(api(), PacingPolicy::None);
        let tools = router.list_all();
        assert_eq!(tools.len(), 14);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_time_entries"));
        assert!(names.contains(&"create_time_entry_legacy"));
        assert!(names.contains(&"bulk_create_time_entries"));
        assert!(names.contains(&"find_project_by_name"));
        assert!(names.contains(&"get_current_user"));
    }

    #[test]
    fn test_every_tool_has_object_schema() {
        let router: ToolRouter<TestServer> = build_tool_router(api(), PacingPolicy::None);
        for tool in router.list_all() {
            assert_eq!(
                tool.input_schema.get("type").and_then(|t| t.as_str()),
                Some("object"),
                "{} schema",
                tool.name
            );
            assert!(tool.description.is_some());
        }
    }

    #[test]
    fn test_registry_matches_router() {
        let registry = ToolRegistry::new(api(), PacingPolicy::None);
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(api(), PacingPolicy::None);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
