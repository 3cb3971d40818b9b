use crate::application::view_model::RecipeListViewModel;
use crate::presentation::components::{FilterState, PageAction, RecipeAction, RecipeGrid, TagBar};
use eframe::egui;

pub enum RecipesAction {
    SetFilter(String),
    Recipe(RecipeAction),
    Page(PageAction),
}

pub struct RecipesTab;

impl RecipesTab {
    pub fn show(
        ui: &mut egui::Ui,
        view_model: &RecipeListViewModel,
        filter_state: &FilterState,
        loading: bool,
        is_previewing: impl Fn(&str) -> bool,
    ) -> Vec<RecipesAction> {
        let mut actions = Vec::new();

        if let Some(tag) = TagBar::show(ui, filter_state.tags(), view_model.filter_tag()) {
            actions.push(RecipesAction::SetFilter(tag));
        }

        ui.separator();

        if loading {
            ui.vertical_centered(|ui| {
                ui.add_space(100.0);
                ui.spinner();
                ui.label("Loading recipes...");
            });
            return actions;
        }

        ui.horizontal(|ui| {
            ui.label(format!(
                "{} of {} recipes",
                view_model.filtered_count(),
                view_model.records().len()
            ));
            ui.separator();
            if let Some(action) = RecipeGrid::pager(
                ui,
                view_model.page(),
                view_model.page_count(),
                view_model.has_prev_page(),
                view_model.has_next_page(),
            ) {
                actions.push(RecipesAction::Page(action));
            }
        });

        ui.separator();

        let favorites = view_model.favorites();
        let page = view_model.visible_page();
        for action in RecipeGrid::show(ui, &page, &favorites, is_previewing) {
            actions.push(RecipesAction::Recipe(action));
        }

        actions
    }
}
