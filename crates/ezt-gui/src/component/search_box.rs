//! Search box component.
//!
//! A text input with a clear button, sized for the module list panel.

use iced::widget::{button, container, row, text, text_input};
use iced::{Element, Length, Theme};

use crate::theme::{SPACING_XS, button_ghost, text_input_default, text_muted};

/// Creates a search input with a clear button.
///
/// The clear button only appears once there is text to clear.
///
/// # Arguments
///
/// * `value` - Current search text
/// * `placeholder` - Placeholder text
/// * `on_change` - Message factory for text changes
/// * `on_clear` - Message to send when the clear button is clicked
pub fn search_box<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    on_clear: M,
) -> Element<'a, M> {
    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding([6.0, 8.0])
        .size(13)
        .width(Length::Fill)
        .style(text_input_default);

    let mut content = row![input].spacing(SPACING_XS);

    if !value.is_empty() {
        let clear = button(
            container(text("\u{2715}").size(12)).style(|theme: &Theme| container::Style {
                text_color: Some(text_muted(theme)),
                ..Default::default()
            }),
        )
        .on_press(on_clear)
        .padding([2.0, 6.0])
        .style(button_ghost);
        content = content.push(clear);
    }

    container(content).width(Length::Fill).into()
}
