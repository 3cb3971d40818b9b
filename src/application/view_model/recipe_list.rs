use super::{DEFAULT_PAGE_SIZE, FavoritesStore, RequestSequence, RequestToken, ViewState};
use crate::domain::{
    entities::{FavoriteSet, Recipe},
    repositories::KeyValueStore,
    services::{Notifier, Severity},
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Direction of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

/// Paginated, tag-filterable view over the current record set plus the
/// persisted favorites.
///
/// None of the operations fail: out-of-range paging and unknown ids are
/// no-ops, and fetch failures degrade to an empty record set.
pub struct RecipeListViewModel {
    records: Vec<Recipe>,
    view: ViewState,
    favorites: FavoritesStore,
    notifier: Arc<dyn Notifier>,
    requests: RequestSequence,
    awaiting: Option<RequestToken>,
    lookups: RequestSequence,
    pending_lookup: Option<(RequestToken, String)>,
    resolved_favorites: HashMap<String, Recipe>,
    unavailable_favorites: HashSet<String>,
}

impl RecipeListViewModel {
    pub fn new(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_page_size(store, notifier, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
        page_size: usize,
    ) -> Self {
        Self {
            records: Vec::new(),
            view: ViewState::new(page_size),
            favorites: FavoritesStore::new(store),
            notifier,
            requests: RequestSequence::new(),
            awaiting: None,
            lookups: RequestSequence::new(),
            pending_lookup: None,
            resolved_favorites: HashMap::new(),
            unavailable_favorites: HashSet::new(),
        }
    }

    /// Replaces the record set wholesale. Entries without an id are dropped.
    pub fn load_records(&mut self, records: Vec<Recipe>) {
        let received = records.len();
        self.records = records.into_iter().filter(Recipe::has_id).collect();

        let dropped = received - self.records.len();
        if dropped > 0 {
            tracing::debug!("Dropped {} recipes without an id", dropped);
        }

        self.unavailable_favorites.clear();
        self.view.reset_page();
        tracing::debug!("Loaded {} recipes", self.records.len());
    }

    pub fn records(&self) -> &[Recipe] {
        &self.records
    }

    pub fn set_filter(&mut self, tag: &str) {
        self.view.toggle_filter(tag);
        tracing::debug!("Filter is now {:?}", self.view.filter_tag());
    }

    pub fn filter_tag(&self) -> Option<&str> {
        self.view.filter_tag()
    }

    fn filtered(&self) -> impl Iterator<Item = &Recipe> + '_ {
        self.records
            .iter()
            .filter(move |recipe| self.view.matches(&recipe.category))
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().count()
    }

    pub fn page(&self) -> usize {
        self.view.page()
    }

    pub fn page_size(&self) -> usize {
        self.view.page_size()
    }

    /// Number of pages in the filtered set; an empty set still has one page.
    pub fn page_count(&self) -> usize {
        self.filtered_count().div_ceil(self.view.page_size()).max(1)
    }

    pub fn has_next_page(&self) -> bool {
        self.view.can_advance(self.filtered_count())
    }

    pub fn has_prev_page(&self) -> bool {
        self.view.can_retreat()
    }

    pub fn next_page(&mut self) -> bool {
        let filtered_count = self.filtered_count();
        self.view.advance(filtered_count)
    }

    pub fn prev_page(&mut self) -> bool {
        self.view.retreat()
    }

    pub fn visible_page(&self) -> Vec<&Recipe> {
        let window = self.view.window();
        self.filtered()
            .skip(window.start)
            .take(window.len())
            .collect()
    }

    /// Read-modify-write against the store; every toggle is persisted at once.
    pub fn toggle_favorite(&mut self, id: &str) -> FavoriteToggle {
        let mut favorites = self.favorites.load();

        let outcome = if favorites.toggle(id) {
            FavoriteToggle::Added
        } else {
            FavoriteToggle::Removed
        };

        if let Err(e) = self.favorites.save(&favorites) {
            tracing::error!("Failed to persist favorites: {}", e);
            self.notifier
                .notify("Could not save favorites", Severity::Danger);
        }

        match outcome {
            FavoriteToggle::Added => {
                tracing::info!("Added {} to favorites", id);
                self.notifier.notify("Added to favorites", Severity::Success);
            }
            FavoriteToggle::Removed => {
                tracing::info!("Removed {} from favorites", id);
                self.notifier
                    .notify("Removed from favorites", Severity::Warning);
            }
        }

        outcome
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.load().contains(id)
    }

    pub fn favorites(&self) -> FavoriteSet {
        self.favorites.load()
    }

    /// Favorites in id order, taken from the record set or from earlier lookups.
    /// Ids that are not resolved yet are left out.
    pub fn favorite_records(&self) -> Vec<&Recipe> {
        self.favorites
            .load()
            .iter()
            .filter_map(|id| {
                self.records
                    .iter()
                    .find(|recipe| recipe.id == id)
                    .or_else(|| self.resolved_favorites.get(id))
            })
            .collect()
    }

    /// Favorite ids with no known record that still need a lookup.
    pub fn unresolved_favorites(&self) -> Vec<String> {
        self.favorites
            .load()
            .iter()
            .filter(|id| {
                !self.resolved_favorites.contains_key(*id)
                    && !self.unavailable_favorites.contains(*id)
                    && !self.records.iter().any(|recipe| recipe.id == *id)
            })
            .map(str::to_string)
            .collect()
    }

    /// Records the lookup outcome for a favorite missing from the record set.
    /// Missing or failed ids are not retried until the next load.
    pub fn resolve_favorite(&mut self, id: &str, outcome: anyhow::Result<Option<Recipe>>) {
        match outcome {
            Ok(Some(recipe)) if recipe.has_id() => {
                self.resolved_favorites.insert(id.to_string(), recipe);
            }
            Ok(_) => {
                tracing::debug!("Favorite {} no longer exists upstream", id);
                self.unavailable_favorites.insert(id.to_string());
            }
            Err(e) => {
                tracing::warn!("Could not resolve favorite {}: {:#}", id, e);
                self.unavailable_favorites.insert(id.to_string());
            }
        }
    }

    /// Starts a preview lookup for `id`, superseding any earlier one.
    /// Returns `None` when the latest pending lookup is already for `id`.
    pub fn begin_lookup(&mut self, id: &str) -> Option<RequestToken> {
        if self.pending_lookup_id() == Some(id) {
            return None;
        }
        let token = self.lookups.issue();
        self.pending_lookup = Some((token, id.to_string()));
        Some(token)
    }

    pub fn pending_lookup_id(&self) -> Option<&str> {
        self.pending_lookup.as_ref().map(|(_, id)| id.as_str())
    }

    /// Drops the pending preview so its late result is ignored.
    pub fn cancel_lookup(&mut self) {
        if let Some((token, id)) = self.pending_lookup.take() {
            tracing::debug!("Cancelled lookup {:?} for {}", token, id);
        }
    }

    /// Returns the record to preview when `token` is the pending lookup.
    /// Stale and cancelled lookups yield `None` without notifying.
    pub fn apply_lookup(
        &mut self,
        token: RequestToken,
        outcome: anyhow::Result<Option<Recipe>>,
    ) -> Option<Recipe> {
        let Some((_, id)) = self.pending_lookup.take_if(|(pending, _)| *pending == token) else {
            tracing::debug!("Discarding stale lookup {:?}", token);
            return None;
        };

        match outcome {
            Ok(Some(recipe)) => Some(recipe),
            Ok(None) => {
                self.notifier.notify("Recipe not found", Severity::Info);
                None
            }
            Err(e) => {
                tracing::warn!("Lookup of {} failed: {:#}", id, e);
                self.notifier
                    .notify("Failed to load recipe details", Severity::Danger);
                None
            }
        }
    }

    /// Issues the token for a new query; earlier outstanding tokens become stale.
    pub fn begin_request(&mut self) -> RequestToken {
        let token = self.requests.issue();
        self.awaiting = Some(token);
        token
    }

    /// True while the most recent request has not been applied yet.
    pub fn is_loading(&self) -> bool {
        self.awaiting.is_some()
    }

    /// Applies a fetch outcome if `token` is still the most recent request.
    /// Returns whether anything was applied.
    pub fn apply_response(
        &mut self,
        token: RequestToken,
        outcome: anyhow::Result<Vec<Recipe>>,
    ) -> bool {
        if !self.requests.is_current(token) {
            tracing::debug!("Discarding stale response for {:?}", token);
            return false;
        }

        self.awaiting = None;
        match outcome {
            Ok(records) => self.load_records(records),
            Err(e) => {
                tracing::warn!("Fetch failed: {:#}", e);
                self.notifier
                    .notify("Failed to fetch recipes", Severity::Danger);
                self.load_records(Vec::new());
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::view_model::FAVORITES_KEY;
    use crate::domain::DomainError;
    use crate::infrastructure::storage::MemoryStore;
    use crate::testing::{RecordingNotifier, recipe};

    fn view_model(
        page_size: usize,
    ) -> (RecipeListViewModel, Arc<MemoryStore>, Arc<RecordingNotifier>) {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let vm = RecipeListViewModel::with_page_size(store.clone(), notifier.clone(), page_size);
        (vm, store, notifier)
    }

    fn tagged(tags: &[&str]) -> Vec<Recipe> {
        tags.iter()
            .enumerate()
            .map(|(i, tag)| recipe(&(i + 1).to_string(), tag))
            .collect()
    }

    fn ids(page: Vec<&Recipe>) -> Vec<&str> {
        page.into_iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn filtered_pages_follow_original_order() {
        let (mut vm, _, _) = view_model(4);
        vm.load_records(tagged(&["A", "A", "B", "A", "B", "B", "A", "A", "B", "A"]));

        vm.set_filter("A");
        assert_eq!(ids(vm.visible_page()), vec!["1", "2", "4", "7"]);

        assert!(vm.next_page());
        assert_eq!(ids(vm.visible_page()), vec!["8", "10"]);
        assert!(!vm.has_next_page());
        assert!(!vm.next_page());
        assert_eq!(vm.page(), 2);
    }

    #[test]
    fn pages_reconstruct_filtered_set() {
        let tags = ["A", "B", "C", "A", "A", "B", "C", "C", "A", "B", "A", "A", "C"];
        for page_size in 1..=6 {
            for filter in ["", "A", "B", "C", "D"] {
                let (mut vm, _, _) = view_model(page_size);
                vm.load_records(tagged(&tags));
                vm.set_filter(filter);

                let expected: Vec<String> = vm
                    .records()
                    .iter()
                    .filter(|r| filter.is_empty() || r.category == filter)
                    .map(|r| r.id.clone())
                    .collect();

                let mut collected = Vec::new();
                for _ in 0..vm.page_count() {
                    let page = vm.visible_page();
                    assert!(page.len() <= page_size);
                    collected.extend(page.into_iter().map(|r| r.id.clone()));
                    vm.next_page();
                }

                assert_eq!(collected, expected, "page_size={page_size} filter={filter:?}");
            }
        }
    }

    #[test]
    fn same_filter_twice_restores_unfiltered_view() {
        let (mut vm, _, _) = view_model(2);
        vm.load_records(tagged(&["A", "B", "A", "B", "A"]));
        let unfiltered = ids(vm.visible_page()).join(",");

        vm.next_page();
        vm.set_filter("B");
        assert_eq!(vm.page(), 1);
        vm.next_page();
        vm.set_filter("B");

        assert_eq!(vm.filter_tag(), None);
        assert_eq!(vm.page(), 1);
        assert_eq!(ids(vm.visible_page()).join(","), unfiltered);
        assert_eq!(vm.filtered_count(), 5);
    }

    #[test]
    fn empty_record_set_pages_are_no_ops() {
        let (mut vm, _, _) = view_model(8);
        vm.load_records(Vec::new());

        assert!(vm.visible_page().is_empty());
        assert!(!vm.next_page());
        assert!(!vm.prev_page());
        assert_eq!(vm.page(), 1);
        assert_eq!(vm.page_count(), 1);
    }

    #[test]
    fn prev_page_stops_at_first_page() {
        let (mut vm, _, _) = view_model(2);
        vm.load_records(tagged(&["A", "A", "A"]));
        assert!(!vm.prev_page());
        assert!(vm.next_page());
        assert!(vm.has_prev_page());
        assert!(vm.prev_page());
        assert_eq!(vm.page(), 1);
    }

    #[test]
    fn loading_resets_page_and_drops_idless_entries() {
        let (mut vm, _, _) = view_model(2);
        vm.load_records(tagged(&["A", "A", "A", "A"]));
        vm.next_page();

        vm.load_records(vec![
            recipe("1", "A"),
            recipe("", "A"),
            recipe("  ", "B"),
            recipe("4", "B"),
        ]);

        assert_eq!(vm.page(), 1);
        assert_eq!(vm.records().len(), 2);
        assert_eq!(ids(vm.visible_page()), vec!["1", "4"]);
    }

    #[test]
    fn filter_survives_reload() {
        let (mut vm, _, _) = view_model(8);
        vm.set_filter("Beef");
        vm.load_records(vec![recipe("1", "Beef"), recipe("2", "Side")]);
        assert_eq!(vm.filter_tag(), Some("Beef"));
        assert_eq!(ids(vm.visible_page()), vec!["1"]);
    }

    #[test]
    fn toggle_favorite_twice_round_trips() {
        let (mut vm, store, notifier) = view_model(8);

        assert_eq!(vm.toggle_favorite("52977"), FavoriteToggle::Added);
        assert!(vm.is_favorite("52977"));
        assert_eq!(store.get(FAVORITES_KEY).unwrap().as_deref(), Some(r#"["52977"]"#));

        assert_eq!(vm.toggle_favorite("52977"), FavoriteToggle::Removed);
        assert!(!vm.is_favorite("52977"));
        assert!(vm.favorites().is_empty());
        assert_eq!(store.get(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));

        assert_eq!(
            notifier.messages(),
            vec![
                ("Added to favorites".to_string(), Severity::Success),
                ("Removed from favorites".to_string(), Severity::Warning),
            ]
        );
    }

    #[test]
    fn toggle_preserves_other_favorites() {
        let (mut vm, store, _) = view_model(8);
        store.set(FAVORITES_KEY, r#"["1","2"]"#).unwrap();

        vm.toggle_favorite("3");
        vm.toggle_favorite("3");

        assert_eq!(store.get(FAVORITES_KEY).unwrap().as_deref(), Some(r#"["1","2"]"#));
    }

    #[test]
    fn favorites_are_independent_of_record_set() {
        let (mut vm, _, _) = view_model(8);
        vm.toggle_favorite("999");
        vm.load_records(vec![recipe("1", "Beef")]);
        assert!(vm.is_favorite("999"));
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), DomainError> {
            Err(DomainError::Storage("read-only".to_string()))
        }
    }

    #[test]
    fn failed_persist_is_reported_not_raised() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut vm = RecipeListViewModel::new(Arc::new(ReadOnlyStore), notifier.clone());

        assert_eq!(vm.toggle_favorite("1"), FavoriteToggle::Added);
        assert_eq!(
            notifier.severities(),
            vec![Severity::Danger, Severity::Success]
        );
    }

    #[test]
    fn stale_response_is_discarded() {
        let (mut vm, _, _) = view_model(8);
        let warm_up = vm.begin_request();
        let search = vm.begin_request();

        assert!(vm.is_loading());
        assert!(vm.apply_response(search, Ok(vec![recipe("52771", "Vegetarian")])));
        assert!(!vm.is_loading());
        assert!(!vm.apply_response(warm_up, Ok(tagged(&["A", "A", "A"]))));
        assert!(!vm.is_loading());

        assert_eq!(ids(vm.visible_page()), vec!["52771"]);
    }

    #[test]
    fn failed_fetch_loads_nothing_and_notifies() {
        let (mut vm, _, notifier) = view_model(8);
        vm.load_records(tagged(&["A", "B"]));

        let token = vm.begin_request();
        assert!(vm.apply_response(token, Err(anyhow::anyhow!("connection reset"))));

        assert!(vm.records().is_empty());
        assert_eq!(
            notifier.messages(),
            vec![("Failed to fetch recipes".to_string(), Severity::Danger)]
        );
    }

    #[test]
    fn default_page_size_is_eight() {
        let vm = RecipeListViewModel::new(
            Arc::new(MemoryStore::new()),
            Arc::new(RecordingNotifier::new()),
        );
        assert_eq!(vm.page_size(), 8);
    }

    #[test]
    fn out_of_order_lookups_show_latest_preview() {
        let (mut vm, _, notifier) = view_model(8);
        let first = vm.begin_lookup("52977").unwrap();
        let second = vm.begin_lookup("52772").unwrap();
        assert_eq!(vm.pending_lookup_id(), Some("52772"));

        let shown = vm.apply_lookup(second, Ok(Some(recipe("52772", "Chicken"))));
        assert_eq!(shown.map(|r| r.id), Some("52772".to_string()));

        assert!(vm.apply_lookup(first, Ok(Some(recipe("52977", "Side")))).is_none());
        assert!(vm.pending_lookup_id().is_none());
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn cancelled_lookup_is_ignored() {
        let (mut vm, _, notifier) = view_model(8);
        let token = vm.begin_lookup("52977").unwrap();
        vm.cancel_lookup();

        assert!(vm.apply_lookup(token, Ok(Some(recipe("52977", "Side")))).is_none());
        assert!(vm.apply_lookup(token, Ok(None)).is_none());
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn repeated_lookup_of_pending_id_is_not_reissued() {
        let (mut vm, _, _) = view_model(8);
        assert!(vm.begin_lookup("1").is_some());
        assert!(vm.begin_lookup("1").is_none());
        assert!(vm.begin_lookup("2").is_some());
        assert!(vm.begin_lookup("1").is_some());
    }

    #[test]
    fn missing_lookup_notifies_info() {
        let (mut vm, _, notifier) = view_model(8);
        let token = vm.begin_lookup("0").unwrap();

        assert!(vm.apply_lookup(token, Ok(None)).is_none());
        assert_eq!(
            notifier.messages(),
            vec![("Recipe not found".to_string(), Severity::Info)]
        );
    }

    #[test]
    fn favorites_view_combines_records_and_lookups() {
        let (mut vm, store, _) = view_model(8);
        store.set(FAVORITES_KEY, r#"["1","7","9"]"#).unwrap();
        vm.load_records(vec![recipe("1", "Beef"), recipe("2", "Side")]);

        assert_eq!(ids(vm.favorite_records()), vec!["1"]);
        assert_eq!(vm.unresolved_favorites(), vec!["7", "9"]);

        vm.resolve_favorite("7", Ok(Some(recipe("7", "Dessert"))));
        vm.resolve_favorite("9", Ok(None));

        assert_eq!(ids(vm.favorite_records()), vec!["1", "7"]);
        assert!(vm.unresolved_favorites().is_empty());
    }

    #[test]
    fn favorites_view_follows_toggles() {
        let (mut vm, _, _) = view_model(8);
        vm.load_records(tagged(&["A", "B", "A"]));

        vm.toggle_favorite("3");
        vm.toggle_favorite("1");
        assert_eq!(ids(vm.favorite_records()), vec!["1", "3"]);

        vm.toggle_favorite("1");
        assert_eq!(ids(vm.favorite_records()), vec!["3"]);
    }

    #[test]
    fn failed_favorite_lookup_retries_after_reload() {
        let (mut vm, _, _) = view_model(8);
        vm.toggle_favorite("7");
        vm.resolve_favorite("7", Err(anyhow::anyhow!("timeout")));
        assert!(vm.unresolved_favorites().is_empty());

        vm.load_records(Vec::new());
        assert_eq!(vm.unresolved_favorites(), vec!["7"]);
    }
}
