//! Application-level state.

use super::ViewState;

/// Top-level application state.
///
/// The generation counter implements stale-result suppression: every async
/// task (download, file read, decode) is tagged with the generation current
/// when it starts, and its result is dropped if the counter has moved on by
/// the time it completes. Nothing is actively cancelled.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current view/screen.
    pub view: ViewState,
    /// Whether a dragged file is hovering over the window.
    pub drop_hover: bool,
    /// Current archive generation.
    generation: u64,
}

impl AppState {
    /// The current archive generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new archive generation, invalidating all in-flight work.
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether a tagged async result is still current.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_generation_invalidates_older_tags() {
        let mut state = AppState::default();
        let first = state.next_generation();
        assert!(state.is_current(first));

        let second = state.next_generation();
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }
}
