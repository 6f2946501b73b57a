//! Bulk creation of time entries.
//!
//! A bulk call lists the workspace's projects once, resolves each entry's
//! project by name against that snapshot, then submits entries one at a time
//! with a pause after each. An entry that fails is recorded and the loop moves
//! on; only the initial project listing can abort the whole call.

use std::collections::HashMap;
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::api::TogglApi;
use super::error::TogglError;
use super::models::{LegacyTimeEntry, MetaQuery};
use super::time::{elapsed_seconds, require_iso_datetime, seconds_to_hours};

/// Upstream limit is one request per second.
pub const DEFAULT_PACING_INTERVAL: Duration = Duration::from_secs(1);

/// How long to wait between bulk submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingPolicy {
    /// Submit back to back.
    None,
    /// Sleep for a fixed interval after every submission.
    Fixed(Duration),
}

impl PacingPolicy {
    /// Fixed pacing of `millis`, or no pacing for zero.
    pub fn from_millis(millis: u64) -> Self {
        if millis == 0 {
            Self::None
        } else {
            Self::Fixed(Duration::from_millis(millis))
        }
    }

    pub fn interval(&self) -> Duration {
        match self {
            Self::None => Duration::ZERO,
            Self::Fixed(interval) => *interval,
        }
    }

    /// Suspend the current call for one interval.
    pub async fn pause(&self) {
        if let Self::Fixed(interval) = self {
            tokio::time::sleep(*interval).await;
        }
    }
}

impl Default for PacingPolicy {
    fn default() -> Self {
        Self::Fixed(DEFAULT_PACING_INTERVAL)
    }
}

/// One entry of a bulk creation request.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkEntryInput {
    /// Entry description, also used to label the result.
    #[schemars(description = "Description of the time entry")]
    pub description: String,

    #[schemars(description = "Start time (ISO 8601, e.g. 2024-04-08T09:00:00Z)")]
    pub start: String,

    #[schemars(description = "Stop time (ISO 8601, e.g. 2024-04-08T10:00:00Z)")]
    pub stop: String,

    #[schemars(description = "Project ID (takes precedence over projectName)")]
    #[serde(default)]
    pub project_id: Option<u64>,

    #[schemars(description = "Project name, matched exactly against the workspace's projects")]
    #[serde(default)]
    pub project_name: Option<String>,

    #[schemars(description = "Whether the entry is billable (default: false)")]
    #[serde(default)]
    pub billable: Option<bool>,

    #[schemars(description = "Tag names")]
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Details of an entry the upstream accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedEntry {
    pub description: String,
    pub id: Value,
    pub duration_seconds: i64,
    pub hours: f64,
    pub billable: bool,
}

/// Details of an entry that could not be created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedEntry {
    pub description: String,
    pub error: String,
}

/// Outcome of one bulk entry.
#[derive(Debug, Clone, PartialEq)]
pub enum BulkEntryResult {
    Created(CreatedEntry),
    Failed(FailedEntry),
}

impl BulkEntryResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Created(entry) => &entry.description,
            Self::Failed(entry) => &entry.description,
        }
    }
}

impl Serialize for BulkEntryResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Flagged<'a, T> {
            success: bool,
            #[serde(flatten)]
            entry: &'a T,
        }

        match self {
            Self::Created(entry) => Flagged {
                success: true,
                entry,
            }
            .serialize(serializer),
            Self::Failed(entry) => Flagged {
                success: false,
                entry,
            }
            .serialize(serializer),
        }
    }
}

/// Aggregate returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct BulkSummary {
    pub total_entries: usize,
    pub successful: usize,
    pub failed: usize,
    /// Sum over successful billable entries, two decimals.
    pub total_billable_hours: String,
    pub results: Vec<BulkEntryResult>,
}

impl BulkSummary {
    pub fn from_results(results: Vec<BulkEntryResult>) -> Self {
        let successful = results.iter().filter(|r| r.is_success()).count();
        let billable_seconds: i64 = results
            .iter()
            .filter_map(|r| match r {
                BulkEntryResult::Created(entry) if entry.billable => Some(entry.duration_seconds),
                _ => None,
            })
            .sum();

        Self {
            total_entries: results.len(),
            successful,
            failed: results.len() - successful,
            total_billable_hours: format!("{:.2}", billable_seconds as f64 / 3600.0),
            results,
        }
    }
}

/// Project name to ID snapshot for one bulk call.
///
/// If the workspace holds several projects with the same name, the one listed
/// last wins.
#[derive(Debug, Clone, Default)]
pub struct ProjectCache {
    by_name: HashMap<String, u64>,
}

impl ProjectCache {
    /// Index raw project objects; entries without a string `name` and numeric
    /// `id` are skipped.
    pub fn from_projects(projects: &[Value]) -> Self {
        let by_name = projects
            .iter()
            .filter_map(|p| {
                let name = p.get("name")?.as_str()?;
                let id = p.get("id")?.as_u64()?;
                Some((name.to_string(), id))
            })
            .collect();

        Self { by_name }
    }

    /// List the workspace's projects and index them.
    pub async fn fetch(api: &TogglApi, workspace_id: u64) -> Result<Self, TogglError> {
        let projects = api.list_projects(workspace_id).await?;
        Ok(Self::from_projects(&projects))
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Pick the project for an entry: explicit ID, else cached name, else none.
    fn resolve(&self, workspace_id: u64, entry: &BulkEntryInput) -> Result<Option<u64>, TogglError> {
        if let Some(id) = entry.project_id {
            return Ok(Some(id));
        }

        match entry.project_name.as_deref() {
            Some(name) => self.get(name).map(Some).ok_or_else(|| {
                TogglError::not_found(format!(
                    "Project '{}' not found in workspace {}",
                    name, workspace_id
                ))
            }),
            None => Ok(None),
        }
    }
}

/// Sequential bulk submitter.
pub struct BulkOrchestrator<'a> {
    api: &'a TogglApi,
    pacing: PacingPolicy,
}

impl<'a> BulkOrchestrator<'a> {
    pub fn new(api: &'a TogglApi, pacing: PacingPolicy) -> Self {
        Self { api, pacing }
    }

    /// Create every entry in order and summarize the outcomes.
    ///
    /// Fails only when the workspace's project list cannot be fetched, in
    /// which case no entry is submitted.
    #[instrument(skip(self, entries), fields(entries = entries.len()))]
    pub async fn bulk_create(
        &self,
        workspace_id: u64,
        entries: &[BulkEntryInput],
    ) -> Result<BulkSummary, TogglError> {
        let cache = ProjectCache::fetch(self.api, workspace_id).await?;
        info!(
            "Cached {} project name(s) for workspace {}",
            cache.len(),
            workspace_id
        );

        let mut results = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let result = match self.create_entry(workspace_id, entry, &cache).await {
                Ok(created) => {
                    info!("Entry {} '{}' created", index + 1, entry.description);
                    BulkEntryResult::Created(created)
                }
                Err(e) => {
                    warn!("Entry {} '{}' failed: {}", index + 1, entry.description, e);
                    BulkEntryResult::Failed(FailedEntry {
                        description: entry.description.clone(),
                        error: e.to_string(),
                    })
                }
            };
            results.push(result);

            self.pacing.pause().await;
        }

        Ok(BulkSummary::from_results(results))
    }

    async fn create_entry(
        &self,
        workspace_id: u64,
        entry: &BulkEntryInput,
        cache: &ProjectCache,
    ) -> Result<CreatedEntry, TogglError> {
        let project_id = cache.resolve(workspace_id, entry)?;
        let start = require_iso_datetime("start", &entry.start)?;
        let stop = require_iso_datetime("stop", &entry.stop)?;
        let duration = elapsed_seconds(start, stop);
        let billable = entry.billable.unwrap_or(false);

        let mut body = LegacyTimeEntry::new(workspace_id, self.api.created_with(), &entry.start);
        body.billable = billable;
        body.description = Some(entry.description.clone());
        body.duration = duration;
        body.pid = project_id;
        body.stop = Some(entry.stop.clone());
        body.tags = entry.tags.clone().unwrap_or_default();

        let url = self.api.url_with_query(
            &format!("/workspaces/{}/time_entries", workspace_id),
            &MetaQuery { meta: true },
        )?;
        let created = self.api.post(&url, &body).await?;

        Ok(CreatedEntry {
            description: entry.description.clone(),
            id: created.get("id").cloned().unwrap_or(Value::Null),
            duration_seconds: duration,
            hours: seconds_to_hours(duration),
            billable,
        })
    }
}
