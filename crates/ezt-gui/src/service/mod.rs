//! Services for background tasks.
//!
//! These are async functions designed for Iced's `Task::perform` pattern;
//! results come back into `App::update` as generation-tagged messages.

mod archive;

pub use archive::{decode, download, read_archive};
