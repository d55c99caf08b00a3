//! Empty state component.

use iced::widget::{container, text};
use iced::{Element, Length, Theme};

use crate::theme::text_muted;

/// Centered muted message for panes with nothing to show.
pub fn empty_state<'a, M: 'a>(message: &'a str) -> Element<'a, M> {
    container(
        text(message)
            .size(14)
            .style(|theme: &Theme| text::Style {
                color: Some(text_muted(theme)),
            }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
