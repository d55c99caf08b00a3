//! Upload view messages.

use std::path::PathBuf;

use crate::error::GuiError;
use ezt_core::RawArchive;

/// Messages for the upload screen and startup auto-download.
#[derive(Debug, Clone)]
pub enum UploadMessage {
    /// User clicked the "Choose a file" button
    PickFileClicked,

    /// The native file dialog returned (None if dismissed)
    FilePicked(Option<PathBuf>),

    /// The startup download finished, tagged with its generation
    DownloadFinished(u64, Result<RawArchive, GuiError>),
}
