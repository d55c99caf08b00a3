//! Reusable UI components.

mod empty_state;
mod search_box;
mod selectable_row;

pub use empty_state::empty_state;
pub use search_box::search_box;
pub use selectable_row::SelectableRow;
