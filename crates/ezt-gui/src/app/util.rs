//! Utility helpers for the application layer.

use iced::Task;

use crate::message::Message;

/// Show a blocking native error dialog.
///
/// Runs through `Task::perform` so the dialog does not stall the update
/// loop; from the user's point of view it is a modal alert.
pub fn notify_error(title: &str, description: &str) -> Task<Message> {
    let dialog = rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(title)
        .set_description(description);

    Task::perform(async move { dialog.show().await }, |_| Message::Noop)
}
