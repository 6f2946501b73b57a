//! Toggl Track API domain.
//!
//! Everything needed to talk to the upstream API: credentials, the request
//! executor, request bodies, ISO 8601 handling and the bulk orchestrator.
//! Tools in `domains/tools/definitions/` build on this module and never touch
//! `reqwest` directly.

pub mod api;
pub mod auth;
pub mod bulk;
pub mod client;
mod error;
pub mod models;
pub mod time;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{DEFAULT_BASE_URL, TogglApi};
pub use auth::basic_auth_header;
pub use bulk::{
    BulkEntryInput, BulkEntryResult, BulkOrchestrator, BulkSummary, PacingPolicy, ProjectCache,
};
pub use client::{ApiExecutor, HttpExecutor};
pub use error::TogglError;
pub use models::{
    BulkTimeEntryUpdate, LegacyTimeEntry, MetaQuery, NewTimeEntry, ProjectsQuery,
    TimeEntriesQuery, TimeEntryUpdate,
};
