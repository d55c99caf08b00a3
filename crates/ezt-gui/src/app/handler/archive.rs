//! Archive lifecycle handlers.
//!
//! A dropped/picked path is read into a `RawArchive`, then decoded into a
//! `SourceIndex`. Both steps are async and tagged with the generation that
//! was current when they started; results from a superseded generation are
//! discarded on arrival.

use std::path::PathBuf;

use iced::Task;

use crate::app::App;
use crate::app::util::notify_error;
use crate::error::GuiError;
use crate::message::Message;
use crate::service;
use crate::state::ViewState;
use ezt_core::{BrowseState, RawArchive, SourceIndex};

impl App {
    /// Start reading an archive file.
    ///
    /// A multi-file drop arrives as one event per path; ignoring drops while
    /// a read is already in flight keeps only the first of the batch.
    pub(crate) fn read_archive(&mut self, path: PathBuf) -> Task<Message> {
        if matches!(self.state.view, ViewState::Reading { .. }) {
            tracing::debug!(path = %path.display(), "ignoring drop while a read is in flight");
            return Task::none();
        }

        let generation = self.state.next_generation();
        self.state.drop_hover = false;
        self.state.view = ViewState::Reading {
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        };

        Task::perform(service::read_archive(path), move |result| {
            Message::ArchiveRead(generation, result)
        })
    }

    /// A file read finished.
    pub(crate) fn handle_archive_read(
        &mut self,
        generation: u64,
        result: Result<RawArchive, GuiError>,
    ) -> Task<Message> {
        if !self.state.is_current(generation) {
            tracing::debug!(generation, "discarding stale file read result");
            return Task::none();
        }

        match result {
            Ok(archive) => self.start_decode(archive),
            Err(error) => {
                tracing::error!(%error, "failed to read archive file");
                self.state.view = ViewState::upload();
                notify_error("Could not read file", &error.to_string())
            }
        }
    }

    /// Kick off the decode pipeline for an acquired archive.
    ///
    /// Runs under the acquisition's generation; a newer acquisition
    /// invalidates the pending decode result.
    pub(crate) fn start_decode(&mut self, archive: RawArchive) -> Task<Message> {
        let generation = self.state.generation();
        self.state.view = ViewState::Decoding {
            file_name: archive.name.clone(),
        };

        Task::perform(service::decode(archive), move |result| {
            Message::ArchiveDecoded(generation, result)
        })
    }

    /// The decode pipeline finished.
    pub(crate) fn handle_archive_decoded(
        &mut self,
        generation: u64,
        result: Result<SourceIndex, GuiError>,
    ) -> Task<Message> {
        if !self.state.is_current(generation) {
            tracing::debug!(generation, "discarding stale decode result");
            return Task::none();
        }

        let ViewState::Decoding { file_name } = &self.state.view else {
            tracing::debug!("decode result arrived outside the decoding state");
            return Task::none();
        };
        let file_name = file_name.clone();

        match result {
            Ok(index) => {
                tracing::info!(modules = index.len(), "archive ready for browsing");
                self.state.view = ViewState::Viewer {
                    file_name,
                    index,
                    browse: BrowseState::new(),
                };
            }
            Err(error) => {
                tracing::error!(%error, "archive decode failed");
                self.state.view = ViewState::DecodeFailed {
                    file_name,
                    error: error.to_string(),
                };
            }
        }

        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(None).0
    }

    fn index_of(specifiers: &[&str]) -> SourceIndex {
        let mut index = SourceIndex::new();
        for specifier in specifiers {
            index.push(*specifier, "");
        }
        index
    }

    fn read_error() -> GuiError {
        GuiError::FileRead {
            name: "x.eszip".to_string(),
            reason: "permission denied".to_string(),
        }
    }

    #[test]
    fn drop_moves_through_reading_and_decoding_to_viewer() {
        let mut app = app();

        let _ = app.update(Message::ArchiveDropped(PathBuf::from("/tmp/x.eszip")));
        assert!(matches!(app.state.view, ViewState::Reading { .. }));
        let generation = app.state.generation();

        let archive = RawArchive::new("x.eszip", vec![1, 2, 3]);
        let _ = app.update(Message::ArchiveRead(generation, Ok(archive)));
        assert!(matches!(app.state.view, ViewState::Decoding { .. }));

        let _ = app.update(Message::ArchiveDecoded(generation, Ok(index_of(&["a.ts"]))));
        match &app.state.view {
            ViewState::Viewer { index, browse, .. } => {
                assert_eq!(index.len(), 1);
                assert_eq!(browse.selected(), None);
            }
            other => panic!("expected viewer, got {other:?}"),
        }
    }

    #[test]
    fn stale_decode_result_is_discarded() {
        let mut app = app();

        // Archive X reaches the decoding state.
        let _ = app.update(Message::ArchiveDropped(PathBuf::from("/tmp/x.eszip")));
        let generation_x = app.state.generation();
        let _ = app.update(Message::ArchiveRead(
            generation_x,
            Ok(RawArchive::new("x.eszip", vec![1])),
        ));

        // Archive Y supersedes it before X's decode completes.
        let _ = app.update(Message::ArchiveDropped(PathBuf::from("/tmp/y.eszip")));
        let generation_y = app.state.generation();
        assert_ne!(generation_x, generation_y);
        let _ = app.update(Message::ArchiveRead(
            generation_y,
            Ok(RawArchive::new("y.eszip", vec![2])),
        ));

        // X's decode result arrives late and must not be shown.
        let _ = app.update(Message::ArchiveDecoded(
            generation_x,
            Ok(index_of(&["x.ts"])),
        ));
        match &app.state.view {
            ViewState::Decoding { file_name } => assert_eq!(file_name, "y.eszip"),
            other => panic!("expected decoding of y.eszip, got {other:?}"),
        }

        // Y's result lands normally.
        let _ = app.update(Message::ArchiveDecoded(
            generation_y,
            Ok(index_of(&["y.ts"])),
        ));
        match &app.state.view {
            ViewState::Viewer {
                file_name, index, ..
            } => {
                assert_eq!(file_name, "y.eszip");
                assert!(index.contains("y.ts"));
            }
            other => panic!("expected viewer for y.eszip, got {other:?}"),
        }
    }

    #[test]
    fn stale_read_result_is_discarded() {
        let mut app = app();

        let _ = app.update(Message::ArchiveDropped(PathBuf::from("/tmp/x.eszip")));
        let stale = app.state.generation();
        // The view left Reading (simulate by replacing it), then a new drop
        // bumps the generation.
        app.state.view = ViewState::upload();
        let _ = app.update(Message::ArchiveDropped(PathBuf::from("/tmp/y.eszip")));

        let _ = app.update(Message::ArchiveRead(
            stale,
            Ok(RawArchive::new("x.eszip", vec![1])),
        ));
        match &app.state.view {
            ViewState::Reading { file_name } => assert_eq!(file_name, "y.eszip"),
            other => panic!("expected reading of y.eszip, got {other:?}"),
        }
    }

    #[test]
    fn failed_read_returns_to_upload() {
        let mut app = app();

        let _ = app.update(Message::ArchiveDropped(PathBuf::from("/tmp/x.eszip")));
        let generation = app.state.generation();
        let _ = app.update(Message::ArchiveRead(generation, Err(read_error())));

        assert!(matches!(
            app.state.view,
            ViewState::Upload { downloading: false }
        ));
    }

    #[test]
    fn failed_decode_shows_the_error_state() {
        let mut app = app();

        let _ = app.update(Message::ArchiveDropped(PathBuf::from("/tmp/x.eszip")));
        let generation = app.state.generation();
        let _ = app.update(Message::ArchiveRead(
            generation,
            Ok(RawArchive::new("x.eszip", vec![1])),
        ));

        let error = GuiError::Decode(ezt_core::DecodeError::Malformed {
            reason: "bad magic".to_string(),
        });
        let _ = app.update(Message::ArchiveDecoded(generation, Err(error)));

        match &app.state.view {
            ViewState::DecodeFailed { file_name, error } => {
                assert_eq!(file_name, "x.eszip");
                assert!(error.contains("bad magic"));
            }
            other => panic!("expected decode failure, got {other:?}"),
        }
    }

    #[test]
    fn drops_are_ignored_while_a_read_is_in_flight() {
        let mut app = app();

        let _ = app.update(Message::ArchiveDropped(PathBuf::from("/tmp/first.eszip")));
        let generation = app.state.generation();

        // Second path of the same multi-file drop.
        let _ = app.update(Message::ArchiveDropped(PathBuf::from("/tmp/second.eszip")));
        assert_eq!(app.state.generation(), generation);
        match &app.state.view {
            ViewState::Reading { file_name } => assert_eq!(file_name, "first.eszip"),
            other => panic!("expected reading of first.eszip, got {other:?}"),
        }
    }
}
