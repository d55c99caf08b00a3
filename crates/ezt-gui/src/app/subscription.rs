//! Application subscriptions.
//!
//! File drag-and-drop arrives as window events, so the app listens to the
//! raw event stream and maps the three drag states to messages. Everything
//! else (picker, download, decode) flows through `Task::perform` instead.

use iced::window;
use iced::{Event, Subscription};

use crate::message::Message;
use crate::state::AppState;

/// Create all application subscriptions.
pub fn create_subscription(_state: &AppState) -> Subscription<Message> {
    iced::event::listen_with(|event, _status, _window| match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::ArchiveDropped(path)),
        Event::Window(window::Event::FileHovered(_)) => Some(Message::DropZoneHovered),
        Event::Window(window::Event::FilesHoveredLeft) => Some(Message::DropZoneLeft),
        _ => None,
    })
}
