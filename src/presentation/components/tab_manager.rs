use std::collections::HashMap;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Tab {
    Recipes,
    Favorites,
    Log,
}

pub struct TabState {
    pub loaded: bool,
}

impl TabState {
    pub fn new() -> Self {
        Self { loaded: false }
    }
}

pub struct TabManager {
    current_tab: Tab,
    tab_states: HashMap<Tab, TabState>,
}

impl TabManager {
    pub fn new() -> Self {
        let mut tab_states = HashMap::new();
        tab_states.insert(Tab::Recipes, TabState::new());
        tab_states.insert(Tab::Favorites, TabState::new());
        tab_states.insert(Tab::Log, TabState::new());

        Self {
            current_tab: Tab::Recipes,
            tab_states,
        }
    }

    pub fn switch_to(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    pub fn current(&self) -> Tab {
        self.current_tab
    }

    pub fn is_current(&self, tab: Tab) -> bool {
        self.current_tab == tab
    }

    pub fn is_loaded(&self, tab: Tab) -> bool {
        self.tab_states
            .get(&tab)
            .map(|state| state.loaded)
            .unwrap_or(false)
    }

    pub fn mark_loaded(&mut self, tab: Tab) {
        if let Some(state) = self.tab_states.get_mut(&tab) {
            state.loaded = true;
        }
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_unloaded_recipes_tab() {
        let mut tabs = TabManager::new();
        assert!(tabs.is_current(Tab::Recipes));
        assert!(!tabs.is_loaded(Tab::Recipes));

        tabs.mark_loaded(Tab::Recipes);
        tabs.switch_to(Tab::Favorites);
        assert_eq!(tabs.current(), Tab::Favorites);
        assert!(tabs.is_loaded(Tab::Recipes));
        assert!(!tabs.is_loaded(Tab::Favorites));
    }
}
