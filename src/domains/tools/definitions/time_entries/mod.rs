//! Time entry tools.
//!
//! - `list`/`current`: read entries
//! - `create`/`create_legacy`: create one entry
//! - `update`/`delete`/`stop`: act on one entry
//! - `bulk_edit`/`bulk_create`: act on many entries

pub mod bulk_create;
pub mod bulk_edit;
pub mod create;
pub mod create_legacy;
pub mod current;
pub mod delete;
pub mod list;
pub mod stop;
pub mod update;

pub use bulk_create::{BulkCreateTimeEntriesParams, BulkCreateTimeEntriesTool};
pub use bulk_edit::{BulkEditTimeEntriesParams, BulkEditTimeEntriesTool};
pub use create::{CreateTimeEntryParams, CreateTimeEntryTool};
pub use create_legacy::{CreateLegacyTimeEntryParams, CreateLegacyTimeEntryTool};
pub use current::GetCurrentTimeEntryTool;
pub use delete::{DeleteTimeEntryTool, TimeEntryRefParams};
pub use list::{GetTimeEntriesParams, GetTimeEntriesTool};
pub use stop::StopTimeEntryTool;
pub use update::{UpdateTimeEntryParams, UpdateTimeEntryTool};
