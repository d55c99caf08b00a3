//! Viewer - the two-pane module browser.
//!
//! Left: searchable module list in index order. Right: the selected
//! module's source, one widget row per line so future line numbering or
//! highlighting can address individual lines.

use iced::widget::{column, container, row, scrollable, text};
use iced::{Element, Font, Length};

use crate::component::{SelectableRow, empty_state, search_box};
use crate::message::{Message, ViewerMessage};
use crate::theme::{LIST_PANEL_WIDTH, SPACING_MD, SPACING_SM, SPACING_XS, list_panel};
use ezt_core::{BrowseState, SourceIndex};

/// Render the two-pane viewer.
pub fn view_viewer<'a>(index: &'a SourceIndex, browse: &'a BrowseState) -> Element<'a, Message> {
    let source_pane: Element<'a, Message> = match browse.selected().and_then(|s| index.source(s)) {
        Some(source) => view_source(source),
        None => empty_state("Select a module to view its source."),
    };

    row![
        container(view_module_list(index, browse))
            .width(Length::Fixed(LIST_PANEL_WIDTH))
            .height(Length::Fill)
            .style(list_panel),
        container(source_pane)
            .width(Length::Fill)
            .height(Length::Fill),
    ]
    .height(Length::Fill)
    .into()
}

/// Render the searchable module list.
fn view_module_list<'a>(index: &'a SourceIndex, browse: &'a BrowseState) -> Element<'a, Message> {
    let search = search_box(
        browse.search_term(),
        "Search...",
        |term| Message::Viewer(ViewerMessage::SearchChanged(term)),
        Message::Viewer(ViewerMessage::SearchCleared),
    );

    let mut rows = column![].spacing(2.0);
    for specifier in browse.visible_specifiers(index) {
        let selected = browse.selected() == Some(specifier);
        rows = rows.push(
            SelectableRow::new(
                specifier,
                Message::Viewer(ViewerMessage::SpecifierSelected(specifier.to_string())),
            )
            .selected(selected)
            .view(),
        );
    }

    column![
        container(search).padding(SPACING_SM),
        scrollable(container(rows).padding([0.0, SPACING_XS]))
            .width(Length::Fill)
            .height(Length::Fill),
    ]
    .into()
}

/// Render the source pane for the selected module.
fn view_source(source: &str) -> Element<'_, Message> {
    let mut lines = column![];
    for line in source.split('\n') {
        // An empty text widget still reserves its line height, so blank
        // lines keep their place.
        lines = lines.push(
            text(line)
                .size(12)
                .font(Font::MONOSPACE)
                .wrapping(text::Wrapping::None),
        );
    }

    scrollable(container(lines).padding(SPACING_MD))
        .direction(scrollable::Direction::Both {
            vertical: scrollable::Scrollbar::new(),
            horizontal: scrollable::Scrollbar::new(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
