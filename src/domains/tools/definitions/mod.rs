//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file, grouped by the Toggl resource it acts on.

pub mod common;
pub mod time_entries;
pub mod users;
pub mod workspaces;

pub use time_entries::{
    BulkCreateTimeEntriesParams, BulkCreateTimeEntriesTool, BulkEditTimeEntriesParams,
    BulkEditTimeEntriesTool, CreateLegacyTimeEntryParams, CreateLegacyTimeEntryTool,
    CreateTimeEntryParams, CreateTimeEntryTool, DeleteTimeEntryTool, GetCurrentTimeEntryTool,
    GetTimeEntriesParams, GetTimeEntriesTool, StopTimeEntryTool, TimeEntryRefParams,
    UpdateTimeEntryParams, UpdateTimeEntryTool,
};
pub use users::GetCurrentUserTool;
pub use workspaces::{
    FindProjectByNameParams, FindProjectByNameTool, GetWorkspaceProjectsParams,
    GetWorkspaceProjectsTool, GetWorkspaceTagsTool, GetWorkspacesTool, WorkspaceParams,
};
