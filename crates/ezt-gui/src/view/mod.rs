//! Views - pure functions from state to elements.

mod status;
mod upload;
mod viewer;

use iced::widget::{column, container, row, text};
use iced::{Element, Length};

pub use status::{view_decode_failed, view_progress};
pub use upload::view_upload;
pub use viewer::view_viewer;

use crate::message::Message;
use crate::state::{AppState, ViewState};
use crate::theme::{HEADER_HEIGHT, SPACING_MD, header_bar};

/// Render the whole window: header bar plus the current view.
pub fn view_root(state: &AppState) -> Element<'_, Message> {
    let body = match &state.view {
        ViewState::Upload { downloading } => {
            view_upload(*downloading || state.drop_hover, *downloading)
        }
        ViewState::Reading { file_name } => view_progress("Loading file...", file_name),
        ViewState::Decoding { file_name } => view_progress("Parsing eszip...", file_name),
        ViewState::Viewer {
            index, browse, ..
        } => view_viewer(index, browse),
        ViewState::DecodeFailed { file_name, error } => view_decode_failed(file_name, error),
    };

    column![view_header(), body].into()
}

/// Render the header bar.
fn view_header<'a>() -> Element<'a, Message> {
    container(
        row![text("Eszip Studio").size(20)]
            .padding([0.0, SPACING_MD])
            .align_y(iced::Alignment::Center)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_HEIGHT))
    .style(header_bar)
    .into()
}
