//! Upload view handlers: file picker and auto-download results.

use iced::Task;

use crate::app::App;
use crate::app::util::notify_error;
use crate::message::{Message, UploadMessage};
use crate::state::ViewState;

impl App {
    /// Handle upload view messages.
    pub(crate) fn handle_upload_message(&mut self, msg: UploadMessage) -> Task<Message> {
        match msg {
            UploadMessage::PickFileClicked => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .set_title("Select an eszip archive")
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                |path| Message::Upload(UploadMessage::FilePicked(path)),
            ),

            UploadMessage::FilePicked(Some(path)) => self.read_archive(path),

            // Dialog dismissed without a selection.
            UploadMessage::FilePicked(None) => Task::none(),

            UploadMessage::DownloadFinished(generation, result) => {
                if !self.state.is_current(generation) {
                    tracing::debug!(generation, "discarding stale download result");
                    return Task::none();
                }

                match result {
                    Ok(archive) => self.start_decode(archive),
                    Err(error) => {
                        tracing::error!(%error, "archive download failed");
                        self.state.view = ViewState::upload();
                        notify_error("Download failed", &error.to_string())
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuiError;
    use ezt_core::{FetchError, RawArchive};

    #[test]
    fn auto_download_starts_in_the_active_upload_state() {
        let (app, _startup) = App::new(Some("https://example.com/app.eszip".to_string()));
        assert!(matches!(
            app.state.view,
            ViewState::Upload { downloading: true }
        ));
    }

    #[test]
    fn failed_download_returns_to_the_idle_upload_state() {
        let (mut app, _startup) = App::new(Some("https://example.com/app.eszip".to_string()));
        let generation = app.state.generation();

        let error = GuiError::Fetch(FetchError::Status {
            url: "https://example.com/app.eszip".to_string(),
            status: 404,
        });
        let _ = app.update(Message::Upload(UploadMessage::DownloadFinished(
            generation,
            Err(error),
        )));

        // No index was produced; the app is back to waiting for a file.
        assert!(matches!(
            app.state.view,
            ViewState::Upload { downloading: false }
        ));
    }

    #[test]
    fn successful_download_moves_to_decoding() {
        let (mut app, _startup) = App::new(Some("https://example.com/app.eszip".to_string()));
        let generation = app.state.generation();

        let archive = RawArchive::new(ezt_core::DOWNLOADED_ARCHIVE_NAME, vec![1, 2]);
        let _ = app.update(Message::Upload(UploadMessage::DownloadFinished(
            generation,
            Ok(archive),
        )));

        match &app.state.view {
            ViewState::Decoding { file_name } => {
                assert_eq!(file_name, ezt_core::DOWNLOADED_ARCHIVE_NAME);
            }
            other => panic!("expected decoding, got {other:?}"),
        }
    }

    #[test]
    fn download_superseded_by_a_drop_is_discarded() {
        let (mut app, _startup) = App::new(Some("https://example.com/app.eszip".to_string()));
        let stale = app.state.generation();

        // User drops a file while the download is still in flight.
        let _ = app.update(Message::ArchiveDropped(std::path::PathBuf::from(
            "/tmp/local.eszip",
        )));

        let archive = RawArchive::new(ezt_core::DOWNLOADED_ARCHIVE_NAME, vec![1, 2]);
        let _ = app.update(Message::Upload(UploadMessage::DownloadFinished(
            stale,
            Ok(archive),
        )));

        // The drop's read is still what is on screen.
        match &app.state.view {
            ViewState::Reading { file_name } => assert_eq!(file_name, "local.eszip"),
            other => panic!("expected reading of local.eszip, got {other:?}"),
        }
    }

    #[test]
    fn dismissed_file_dialog_changes_nothing() {
        let (mut app, _task) = App::new(None);
        let _ = app.update(Message::Upload(UploadMessage::FilePicked(None)));
        assert!(matches!(
            app.state.view,
            ViewState::Upload { downloading: false }
        ));
    }
}
