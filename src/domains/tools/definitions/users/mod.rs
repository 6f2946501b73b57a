//! User profile tools.

pub mod current;

pub use current::GetCurrentUserTool;
