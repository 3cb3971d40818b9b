use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Filter tag and 1-based page over a fixed page size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    filter_tag: Option<String>,
    page: usize,
    page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter_tag: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn filter_tag(&self) -> Option<&str> {
        self.filter_tag.as_deref()
    }

    /// Selecting the active tag (or an empty one) clears the filter.
    pub fn toggle_filter(&mut self, tag: &str) {
        if tag.is_empty() || self.filter_tag.as_deref() == Some(tag) {
            self.filter_tag = None;
        } else {
            self.filter_tag = Some(tag.to_string());
        }
        self.reset_page();
    }

    pub fn matches(&self, category: &str) -> bool {
        match &self.filter_tag {
            Some(tag) => tag == category,
            None => true,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    pub fn can_advance(&self, filtered_count: usize) -> bool {
        self.page * self.page_size < filtered_count
    }

    pub fn can_retreat(&self) -> bool {
        self.page > 1
    }

    pub fn advance(&mut self, filtered_count: usize) -> bool {
        if !self.can_advance(filtered_count) {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Index range of the current page within the filtered set.
    pub fn window(&self) -> Range<usize> {
        let start = (self.page - 1) * self.page_size;
        start..start + self.page_size
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_size_is_raised_to_one() {
        assert_eq!(ViewState::new(0).page_size(), 1);
    }

    #[test]
    fn empty_tag_clears_filter() {
        let mut state = ViewState::default();
        state.toggle_filter("Beef");
        assert_eq!(state.filter_tag(), Some("Beef"));
        state.toggle_filter("");
        assert_eq!(state.filter_tag(), None);
        assert!(state.matches("anything"));
    }

    #[test]
    fn switching_tags_replaces_filter() {
        let mut state = ViewState::default();
        state.toggle_filter("Beef");
        state.toggle_filter("Chicken");
        assert_eq!(state.filter_tag(), Some("Chicken"));
        assert!(!state.matches("Beef"));
    }

    #[test]
    fn window_tracks_page() {
        let mut state = ViewState::new(4);
        assert_eq!(state.window(), 0..4);
        assert!(state.advance(5));
        assert_eq!(state.window(), 4..8);
        assert!(!state.advance(5));
        assert!(state.retreat());
        assert!(!state.retreat());
        assert_eq!(state.page(), 1);
    }
}
