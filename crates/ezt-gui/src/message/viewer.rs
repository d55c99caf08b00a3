//! Viewer messages.

/// Messages for the two-pane viewer.
#[derive(Debug, Clone)]
pub enum ViewerMessage {
    /// Search input changed
    SearchChanged(String),

    /// Clear button pressed on the search box
    SearchCleared,

    /// User clicked a specifier in the module list
    SpecifierSelected(String),
}
