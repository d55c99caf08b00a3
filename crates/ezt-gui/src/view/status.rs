//! Progress and failure views for the phases between upload and browsing.

use iced::widget::{Space, column, container, text};
use iced::{Alignment, Element, Length, Theme};

use crate::message::Message;
use crate::theme::{SPACING_SM, text_muted};

/// Centered progress label with the archive name underneath.
pub fn view_progress<'a>(label: &'a str, file_name: &'a str) -> Element<'a, Message> {
    centered(
        column![
            text(label).size(16),
            Space::new().height(SPACING_SM),
            muted(file_name),
        ]
        .align_x(Alignment::Center),
    )
}

/// Decode failure view; an explicit state rather than an endless spinner.
pub fn view_decode_failed<'a>(file_name: &'a str, error: &'a str) -> Element<'a, Message> {
    centered(
        column![
            text(format!("Could not decode {file_name}")).size(16),
            Space::new().height(SPACING_SM),
            muted(error),
            Space::new().height(SPACING_SM),
            muted("Drop another file to try again."),
        ]
        .align_x(Alignment::Center),
    )
}

fn muted(value: &str) -> Element<'_, Message> {
    text(value)
        .size(13)
        .style(|theme: &Theme| text::Style {
            color: Some(text_muted(theme)),
        })
        .into()
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
