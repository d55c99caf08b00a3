//! Application state management.
//!
//! - **AppState**: root state - current view, drop hover flag, and the
//!   archive generation counter behind stale-result suppression
//! - **ViewState**: explicit linear state machine over the archive lifecycle

mod app_state;
mod view_state;

pub use app_state::AppState;
pub use view_state::ViewState;
