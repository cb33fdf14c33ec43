//! Ephemeral filter/search criteria for the visible transaction list.
use shared::FilterType;

/// Current view criteria. Never persisted; starts as `All` with an empty search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    filter_type: FilterType,
    search_text: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    /// Search text as entered (untrimmed)
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Normalized search needle: trimmed and lower-cased. `None` when it matches everything.
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    pub fn set_filter_type(&mut self, filter_type: FilterType) {
        self.filter_type = filter_type;
    }

    pub fn set_search_text(&mut self, search_text: impl Into<String>) {
        self.search_text = search_text.into();
    }
}
