//! Message module for Eszip Studio.
//!
//! All user interactions and background task results flow through these
//! types into `App::update`.
//!
//! Async results are tagged with the archive generation that was current
//! when their task started; `update` drops any result whose generation is no
//! longer current (stale-result suppression, no true cancellation).

pub mod upload;
pub mod viewer;

use std::path::PathBuf;

pub use upload::UploadMessage;
pub use viewer::ViewerMessage;

use crate::error::GuiError;
use ezt_core::{RawArchive, SourceIndex};

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // View-specific messages
    // =========================================================================
    /// Upload view messages (file picker, auto-download)
    Upload(UploadMessage),

    /// Viewer messages (search, selection)
    Viewer(ViewerMessage),

    // =========================================================================
    // Window file-drop events
    // =========================================================================
    /// A file was dropped onto the window
    ArchiveDropped(PathBuf),

    /// A dragged file is hovering over the window
    DropZoneHovered,

    /// The dragged file left the window
    DropZoneLeft,

    // =========================================================================
    // Background task results (generation-tagged)
    // =========================================================================
    /// Reading a dropped/picked file finished
    ArchiveRead(u64, Result<RawArchive, GuiError>),

    /// Decoding an archive finished
    ArchiveDecoded(u64, Result<SourceIndex, GuiError>),

    /// No operation - used for placeholder actions
    Noop,
}
