//! GUI-specific error type.
//!
//! Wraps the library errors so background task results can travel through
//! Iced messages (which must be `Clone`) with user-presentable text.

use thiserror::Error;

use ezt_core::{DecodeError, FetchError};

/// Errors surfaced to the user by the GUI.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuiError {
    /// A dropped or picked file could not be read.
    #[error("failed to read {name}: {reason}")]
    FileRead {
        /// Display name of the file.
        name: String,
        /// Description of what went wrong.
        reason: String,
    },

    /// The auto-download failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Decoding the archive failed.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
