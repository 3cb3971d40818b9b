use crate::application::UseCaseContainer;
use crate::application::view_model::RecipeListViewModel;
use crate::domain::repositories::KeyValueStore;
use crate::domain::services::{Notifier, SearchQueryValidator, Severity};
use crate::presentation::components::{
    DetailsPanel, FilterState, LogEntry, LogManager, PageAction, RecipeAction, Tab, TabManager,
    ToastQueue,
};
use crate::presentation::services::{AsyncExecutor, AsyncTask, AsyncTaskManager, slot};
use crate::presentation::ui::tabs::{FavoritesTab, LogAction, LogTab, RecipesAction, RecipesTab};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::{Duration, Instant};

const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct MealbookApp {
    view_model: RecipeListViewModel,
    tab_manager: TabManager,
    filter_state: FilterState,
    details: DetailsPanel,
    toasts: ToastQueue,
    notifier: Arc<dyn Notifier>,
    log_manager: LogManager,
    log_rx: Receiver<LogEntry>,

    task_manager: AsyncTaskManager,
    use_cases: Arc<UseCaseContainer>,
    executor: AsyncExecutor,

    status_message: String,
}

impl MealbookApp {
    pub fn new(
        use_cases: Arc<UseCaseContainer>,
        store: Arc<dyn KeyValueStore>,
        executor: AsyncExecutor,
        toasts: ToastQueue,
        log_rx: Receiver<LogEntry>,
    ) -> Self {
        let notifier: Arc<dyn Notifier> = Arc::new(toasts.clone());

        Self {
            view_model: RecipeListViewModel::new(store, Arc::clone(&notifier)),
            tab_manager: TabManager::new(),
            filter_state: FilterState::new(),
            details: DetailsPanel::new(),
            toasts,
            notifier,
            log_manager: LogManager::new(),
            log_rx,
            task_manager: AsyncTaskManager::new(),
            use_cases,
            executor,
            status_message: String::new(),
        }
    }

    fn warm_up(&mut self) {
        let token = self.view_model.begin_request();
        let result = slot();

        self.task_manager.track(AsyncTask::LoadRecipes {
            token,
            result: Arc::clone(&result),
            started_at: Instant::now(),
        });

        self.status_message = "Loading recipes...".to_string();
        tracing::info!("Starting warm-up load");

        let use_case = Arc::clone(&self.use_cases.warm_up);
        self.executor.spawn(async move {
            let outcome = use_case.execute().await;
            if let Ok(mut guard) = result.lock() {
                *guard = Some(outcome);
            }
        });
    }

    fn handle_search(&mut self) {
        let query = match SearchQueryValidator::validate(self.filter_state.search_query()) {
            Ok(query) => query.to_string(),
            Err(e) => {
                tracing::debug!("Rejected search: {}", e);
                self.notifier
                    .notify("Please enter a search term", Severity::Danger);
                return;
            }
        };

        let token = self.view_model.begin_request();
        let result = slot();

        self.task_manager.track(AsyncTask::LoadRecipes {
            token,
            result: Arc::clone(&result),
            started_at: Instant::now(),
        });

        self.status_message = format!("Searching for '{}'...", query);
        tracing::info!("Searching for '{}'", query);

        let use_case = Arc::clone(&self.use_cases.search);
        self.executor.spawn(async move {
            let outcome = use_case.execute(&query).await;
            if let Ok(mut guard) = result.lock() {
                *guard = Some(outcome);
            }
        });
    }

    fn handle_preview(&mut self, id: String) {
        let Some(token) = self.view_model.begin_lookup(&id) else {
            return;
        };

        let result = slot();
        self.task_manager.track(AsyncTask::LookupRecipe {
            token,
            result: Arc::clone(&result),
        });

        let use_case = Arc::clone(&self.use_cases.lookup);
        self.executor.spawn(async move {
            let outcome = use_case.execute(&id).await;
            if let Ok(mut guard) = result.lock() {
                *guard = Some(outcome);
            }
        });
    }

    /// Looks up favorites that are not part of the loaded record set.
    fn resolve_missing_favorites(&mut self) {
        for id in self.view_model.unresolved_favorites() {
            if self.task_manager.is_resolving(&id) {
                continue;
            }

            let result = slot();
            self.task_manager.track(AsyncTask::ResolveFavorite {
                id: id.clone(),
                result: Arc::clone(&result),
            });

            let use_case = Arc::clone(&self.use_cases.lookup);
            self.executor.spawn(async move {
                let outcome = use_case.execute(&id).await;
                if let Ok(mut guard) = result.lock() {
                    *guard = Some(outcome);
                }
            });
        }
    }

    fn handle_recipe_action(&mut self, action: RecipeAction) {
        match action {
            RecipeAction::ToggleFavorite(id) => {
                self.view_model.toggle_favorite(&id);
            }
            RecipeAction::Preview(id) => self.handle_preview(id),
            RecipeAction::ClosePreview => {
                self.details.close();
                self.view_model.cancel_lookup();
            }
        }
    }

    fn poll_async_tasks(&mut self) {
        let result = self.task_manager.poll();

        for (token, outcome) in result.loaded_recipes {
            if self.view_model.apply_response(token, outcome) {
                self.status_message = format!("{} recipes loaded", self.view_model.records().len());
            }
        }

        for (token, outcome) in result.lookups {
            if let Some(recipe) = self.view_model.apply_lookup(token, outcome) {
                self.details.show(recipe);
            }
        }

        for (id, outcome) in result.resolved_favorites {
            self.view_model.resolve_favorite(&id, outcome);
        }
    }

    fn poll_logs(&mut self) {
        while let Ok(entry) = self.log_rx.try_recv() {
            self.log_manager.push(entry);
        }
    }
}

impl eframe::App for MealbookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_logs();
        self.poll_async_tasks();
        ctx.request_repaint_after(REPAINT_INTERVAL);

        if !self.tab_manager.is_loaded(Tab::Recipes) {
            self.tab_manager.mark_loaded(Tab::Recipes);
            self.warm_up();
        }

        if self.tab_manager.is_current(Tab::Favorites) && !self.view_model.is_loading() {
            self.resolve_missing_favorites();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Mealbook");
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();

                if ui
                    .selectable_label(self.tab_manager.is_current(Tab::Recipes), "Recipes")
                    .clicked()
                {
                    self.tab_manager.switch_to(Tab::Recipes);
                }
                if ui
                    .selectable_label(self.tab_manager.is_current(Tab::Favorites), "Favorites")
                    .clicked()
                {
                    self.tab_manager.switch_to(Tab::Favorites);
                }
                if ui
                    .selectable_label(self.tab_manager.is_current(Tab::Log), "Log")
                    .clicked()
                {
                    self.tab_manager.switch_to(Tab::Log);
                }

                ui.separator();

                ui.label("Search:");
                let response = ui.text_edit_singleline(self.filter_state.search_query_mut());
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.handle_search();
                }
                if ui.button("Search").clicked() {
                    self.handle_search();
                }
                if ui.button("Refresh").clicked() {
                    self.warm_up();
                }
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} favorites", self.view_model.favorites().len()));
                    let pending = self.task_manager.pending_count();
                    if pending > 0 {
                        ui.separator();
                        ui.label(format!("{} requests in flight", pending));
                    }
                });
            });
        });

        let details_favorite = self
            .details
            .recipe_id()
            .map(|id| self.view_model.is_favorite(id))
            .unwrap_or(false);
        if let Some(action) = self.details.render(ctx, details_favorite) {
            self.handle_recipe_action(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.tab_manager.current() {
            Tab::Recipes => {
                let loading = self.view_model.is_loading();
                let view_model = &self.view_model;
                let actions = RecipesTab::show(ui, view_model, &self.filter_state, loading, |id| {
                    view_model.pending_lookup_id() == Some(id)
                });

                for action in actions {
                    match action {
                        RecipesAction::SetFilter(tag) => self.view_model.set_filter(&tag),
                        RecipesAction::Page(PageAction::Next) => {
                            self.view_model.next_page();
                        }
                        RecipesAction::Page(PageAction::Prev) => {
                            self.view_model.prev_page();
                        }
                        RecipesAction::Recipe(action) => self.handle_recipe_action(action),
                    }
                }
            }
            Tab::Favorites => {
                let resolving = self
                    .view_model
                    .unresolved_favorites()
                    .iter()
                    .filter(|id| self.task_manager.is_resolving(id))
                    .count();
                for action in FavoritesTab::show(ui, &self.view_model, resolving) {
                    self.handle_recipe_action(action);
                }
            }
            Tab::Log => {
                for action in LogTab::show(ui, &self.log_manager) {
                    match action {
                        LogAction::CopyAll => {
                            let output = self
                                .log_manager
                                .all_logs()
                                .map(|entry| {
                                    format!("[{}] {}", entry.format_timestamp(), entry.message)
                                })
                                .collect::<Vec<_>>()
                                .join("\n");
                            ctx.copy_text(output);
                        }
                        LogAction::Clear => self.log_manager.clear(),
                    }
                }
            }
        });

        self.toasts.render(ctx);
    }
}
