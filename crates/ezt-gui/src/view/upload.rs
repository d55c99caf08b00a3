//! Upload view - the drop zone shown while no archive is loaded.

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length, Theme};

use crate::message::{Message, UploadMessage};
use crate::theme::{
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, button_primary, drop_zone, text_muted,
};

/// Render the upload screen.
///
/// `active` highlights the drop zone (drag hover or download in flight);
/// `downloading` swaps the file picker button for a progress label.
pub fn view_upload<'a>(active: bool, downloading: bool) -> Element<'a, Message> {
    let action: Element<'a, Message> = if downloading {
        text("Downloading archive...")
            .size(14)
            .style(|theme: &Theme| text::Style {
                color: Some(text_muted(theme)),
            })
            .into()
    } else {
        button(text("Choose a file").size(14))
            .on_press(Message::Upload(UploadMessage::PickFileClicked))
            .padding([SPACING_SM, SPACING_LG])
            .style(button_primary)
            .into()
    };

    let content = column![
        text("Drop or upload an eszip file to get started.").size(16),
        Space::new().height(SPACING_MD),
        action,
    ]
    .align_x(Alignment::Center);

    let zone = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(SPACING_XL)
        .style(move |theme: &Theme| drop_zone(theme, active));

    container(zone)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(SPACING_MD)
        .into()
}
