//! Message handlers organized by category.
//!
//! - `archive` - archive lifecycle (read, decode, stale-result suppression)
//! - `upload` - file picker and auto-download messages
//! - `viewer` - search and selection messages

mod archive;
mod upload;
mod viewer;
