//! Request bodies and query strings sent to the Toggl Track API.
//!
//! Optional fields are omitted when absent rather than sent as `null`. The
//! exceptions are the fields the upstream insists on: creation always carries
//! `billable` and `tags`, and the legacy flat body pins `tid` to `null` and
//! `groupBy` to an empty string.

use serde::Serialize;

/// Body for `POST /workspaces/{wid}/time_entries`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTimeEntry {
    pub created_with: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,
    pub billable: bool,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,
    pub duration: i64,
    pub tags: Vec<String>,
    pub workspace_id: u64,
}

/// Flat body accepted by the `?meta=true` creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegacyTimeEntry {
    pub billable: bool,
    pub created_with: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u64>,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,
    pub tags: Vec<String>,
    pub tid: Option<u64>,
    pub wid: u64,
    #[serde(rename = "groupBy")]
    pub group_by: String,
}

impl LegacyTimeEntry {
    /// Build a body with the fixed `tid`/`groupBy` shape.
    pub fn new(workspace_id: u64, created_with: impl Into<String>, start: impl Into<String>) -> Self {
        Self {
            billable: false,
            created_with: created_with.into(),
            description: None,
            duration: 0,
            pid: None,
            start: start.into(),
            stop: None,
            tags: Vec::new(),
            tid: None,
            wid: workspace_id,
            group_by: String::new(),
        }
    }
}

/// Body for `PUT /workspaces/{wid}/time_entries/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Body for `PATCH /workspaces/{wid}/time_entries`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkTimeEntryUpdate {
    pub time_entry_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
}

/// Query for `GET /me/time_entries`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TimeEntriesQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
}

/// Query for `GET /workspaces/{wid}/projects`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// `?meta=true` flag for the legacy creation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MetaQuery {
    pub meta: bool,
}
