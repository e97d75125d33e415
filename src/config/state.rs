// src/config/state.rs
use std::collections::HashMap;

use super::options::{ContentKind, FeedConfig};
use crate::view::Filter;

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Category + query per page; survives tab switches.
    pub filters: HashMap<ContentKind, Filter>,

    /// Show the raw diagnostics block under errors.
    pub show_diagnostics: bool,
}

impl GuiState {
    pub fn filter(&self, kind: ContentKind) -> Filter {
        self.filters.get(&kind).cloned().unwrap_or_default()
    }

    pub fn filter_mut(&mut self, kind: ContentKind) -> &mut Filter {
        self.filters.entry(kind).or_default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub config: FeedConfig,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(config: FeedConfig) -> Self {
        Self { config, gui: GuiState::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::CategorySelector;

    #[test]
    fn filters_are_kept_per_page() {
        let mut gui = GuiState::default();
        gui.filter_mut(ContentKind::News).query = s!("award");
        gui.filter_mut(ContentKind::People).category = CategorySelector::Key(s!("alumni"));

        assert_eq!(gui.filter(ContentKind::News).query, "award");
        assert_eq!(gui.filter(ContentKind::News).category, CategorySelector::All);
        assert_eq!(gui.filter(ContentKind::People).category, CategorySelector::Key(s!("alumni")));
        assert_eq!(gui.filter(ContentKind::Projects), Filter::default());
    }
}
