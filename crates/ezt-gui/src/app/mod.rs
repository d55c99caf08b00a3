//! Main application module for Eszip Studio.
//!
//! Implements the Iced 0.14 application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//!
//! All state changes happen in `update()`; views are pure functions. Async
//! work runs through `Task::perform` and returns as generation-tagged
//! messages so results from a superseded archive are dropped on arrival.

mod handler;
pub mod subscription;
pub mod util;

use iced::{Element, Subscription, Task, Theme};

use crate::message::{Message, UploadMessage};
use crate::service;
use crate::state::{AppState, ViewState};
use crate::theme::studio_theme;
use crate::view::view_root;

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. When `download_from` is set the auto-download
    /// starts immediately and the upload view opens in its active state;
    /// this happens at most once per process.
    pub fn new(download_from: Option<String>) -> (Self, Task<Message>) {
        let mut app = Self {
            state: AppState::default(),
        };

        let startup = match download_from {
            Some(url) => {
                tracing::info!(%url, "auto-download requested");
                let generation = app.state.next_generation();
                app.state.view = ViewState::Upload { downloading: true };
                Task::perform(service::download(url), move |result| {
                    Message::Upload(UploadMessage::DownloadFinished(generation, result))
                })
            }
            None => Task::none(),
        };

        (app, startup)
    }

    /// Window title: the application name, plus the archive name once one is
    /// on screen.
    pub fn title(&self) -> String {
        match self.state.view.archive_name() {
            Some(name) => format!("Eszip Studio - {name}"),
            None => String::from("Eszip Studio"),
        }
    }

    /// The application theme.
    pub fn theme(&self) -> Theme {
        studio_theme()
    }

    /// Event subscriptions (window file-drop events).
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Upload view messages
            // =================================================================
            Message::Upload(upload_msg) => self.handle_upload_message(upload_msg),

            // =================================================================
            // Viewer messages
            // =================================================================
            Message::Viewer(viewer_msg) => self.handle_viewer_message(viewer_msg),

            // =================================================================
            // Window file-drop events
            // =================================================================
            Message::ArchiveDropped(path) => self.read_archive(path),

            Message::DropZoneHovered => {
                self.state.drop_hover = true;
                Task::none()
            }

            Message::DropZoneLeft => {
                self.state.drop_hover = false;
                Task::none()
            }

            // =================================================================
            // Background task results
            // =================================================================
            Message::ArchiveRead(generation, result) => {
                self.handle_archive_read(generation, result)
            }

            Message::ArchiveDecoded(generation, result) => {
                self.handle_archive_decoded(generation, result)
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the current view.
    pub fn view(&self) -> Element<'_, Message> {
        view_root(&self.state)
    }
}
