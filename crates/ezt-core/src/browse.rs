//! Browse model: search term and selection over a source index.

use crate::index::SourceIndex;

/// Interactive state layered over an immutable [`SourceIndex`].
///
/// Holds the current search substring and the selected specifier. A new
/// archive replaces the index and gets a fresh `BrowseState`, which is how
/// the "selection is always a key of the current index" invariant survives
/// archive changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseState {
    search_term: String,
    selected: Option<String>,
}

impl BrowseState {
    /// Create a browse state with no search term and no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current search substring.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Replace the search substring. No validation; the empty string matches
    /// every specifier.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The currently selected specifier, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select a specifier.
    ///
    /// A specifier that is not a key of `index` is silently ignored; the UI
    /// only offers valid keys, so this is a defensive no-op rather than an
    /// error.
    pub fn select(&mut self, index: &SourceIndex, specifier: &str) {
        if index.contains(specifier) {
            self.selected = Some(specifier.to_string());
        }
    }

    /// The ordered subsequence of `index` keys that contain the search term
    /// as a case-sensitive substring.
    ///
    /// Index order is preserved; with an empty search term this is the full
    /// key list.
    pub fn visible_specifiers<'a>(&self, index: &'a SourceIndex) -> Vec<&'a str> {
        index
            .specifiers()
            .filter(|specifier| specifier.contains(&self.search_term))
            .collect()
    }
}
