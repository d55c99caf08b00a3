//! Viewer handlers: search and selection over the decoded index.

use iced::Task;

use crate::app::App;
use crate::message::{Message, ViewerMessage};
use crate::state::ViewState;

impl App {
    /// Handle viewer messages. Ignored outside the viewer state.
    pub(crate) fn handle_viewer_message(&mut self, msg: ViewerMessage) -> Task<Message> {
        let ViewState::Viewer { index, browse, .. } = &mut self.state.view else {
            return Task::none();
        };

        match msg {
            ViewerMessage::SearchChanged(term) => browse.set_search_term(term),
            ViewerMessage::SearchCleared => browse.set_search_term(String::new()),
            ViewerMessage::SpecifierSelected(specifier) => browse.select(index, &specifier),
        }

        Task::none()
    }
}
