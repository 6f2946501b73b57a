//! Workspace, project and tag tools.

pub mod find_project;
pub mod list;
pub mod projects;
pub mod tags;

pub use find_project::{FindProjectByNameParams, FindProjectByNameTool};
pub use list::GetWorkspacesTool;
pub use projects::{GetWorkspaceProjectsParams, GetWorkspaceProjectsTool};
pub use tags::{GetWorkspaceTagsTool, WorkspaceParams};
