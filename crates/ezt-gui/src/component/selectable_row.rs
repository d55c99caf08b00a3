//! Selectable row component for the module list.

use iced::widget::{button, text};
use iced::{Element, Length, Theme};

use crate::theme::{SPACING_SM, SPACING_XS, list_row};

/// A clickable list row with hover and selection states.
///
/// # Usage
///
/// ```rust,ignore
/// SelectableRow::new("file:///src/main.ts", Message::Selected(specifier))
///     .selected(is_selected)
///     .view()
/// ```
pub struct SelectableRow<M> {
    label: String,
    selected: bool,
    on_click: M,
}

impl<M: Clone> SelectableRow<M> {
    /// Create a new row with its label and click message.
    pub fn new(label: impl Into<String>, on_click: M) -> Self {
        Self {
            label: label.into(),
            selected: false,
            on_click,
        }
    }

    /// Set selection state.
    pub fn selected(mut self, is_selected: bool) -> Self {
        self.selected = is_selected;
        self
    }

    /// Build the element.
    pub fn view<'a>(self) -> Element<'a, M>
    where
        M: 'a,
    {
        let selected = self.selected;

        // Specifiers can be long URLs; clip rather than wrap so each row
        // stays one line tall.
        let label = text(self.label)
            .size(13)
            .wrapping(text::Wrapping::None);

        button(label)
            .on_press(self.on_click)
            .width(Length::Fill)
            .padding([SPACING_XS, SPACING_SM])
            .style(move |theme: &Theme, status| list_row(theme, status, selected))
            .into()
    }
}
