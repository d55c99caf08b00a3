//! View state - the archive lifecycle as an explicit state machine.

use ezt_core::{BrowseState, SourceIndex};

/// Current view and its associated state.
///
/// The lifecycle is linear with no backward transitions except "a new file
/// selection restarts the machine":
///
/// ```text
/// Upload -> Reading -> Decoding -> Viewer
///                                | DecodeFailed
/// ```
///
/// Each variant holds exactly the state that view needs; navigating replaces
/// the whole variant, which is what resets search and selection when a new
/// archive arrives.
#[derive(Debug)]
pub enum ViewState {
    /// No archive yet: drop zone and file picker. `downloading` is set while
    /// the startup auto-download is in flight and renders the drop zone in
    /// its active state.
    Upload {
        /// Whether the startup download is in flight.
        downloading: bool,
    },

    /// An archive was selected; its bytes are being read into memory.
    Reading {
        /// Display name of the file being read.
        file_name: String,
    },

    /// The decode pipeline is running.
    Decoding {
        /// Display name of the archive being decoded.
        file_name: String,
    },

    /// A fully populated index is on screen.
    Viewer {
        /// Display name of the decoded archive.
        file_name: String,
        /// The ordered specifier-to-source mapping.
        index: SourceIndex,
        /// Search term and selection over the index.
        browse: BrowseState,
    },

    /// The decode pipeline failed; shown instead of hanging in `Decoding`.
    DecodeFailed {
        /// Display name of the archive that failed.
        file_name: String,
        /// User-presentable failure description.
        error: String,
    },
}

impl Default for ViewState {
    fn default() -> Self {
        Self::upload()
    }
}

impl ViewState {
    /// The idle upload view.
    pub fn upload() -> Self {
        Self::Upload { downloading: false }
    }

    /// The name of the archive currently on screen, if any.
    pub fn archive_name(&self) -> Option<&str> {
        match self {
            Self::Upload { .. } => None,
            Self::Reading { file_name }
            | Self::Decoding { file_name }
            | Self::Viewer { file_name, .. }
            | Self::DecodeFailed { file_name, .. } => Some(file_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_has_no_archive_name() {
        assert_eq!(ViewState::upload().archive_name(), None);
    }

    #[test]
    fn lifecycle_states_carry_the_archive_name() {
        let state = ViewState::Decoding {
            file_name: "app.eszip".to_string(),
        };
        assert_eq!(state.archive_name(), Some("app.eszip"));
    }
}
