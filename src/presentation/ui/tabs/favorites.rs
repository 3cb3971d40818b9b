use crate::application::view_model::RecipeListViewModel;
use crate::presentation::components::{RecipeAction, RecipeGrid};
use eframe::egui;

pub struct FavoritesTab;

impl FavoritesTab {
    /// Lists every favorite, including ones outside the loaded record set.
    pub fn show(
        ui: &mut egui::Ui,
        view_model: &RecipeListViewModel,
        resolving: usize,
    ) -> Vec<RecipeAction> {
        let favorites = view_model.favorites();

        ui.horizontal(|ui| {
            ui.heading("Favorites");
            ui.label(format!("{} saved", favorites.len()));
            if resolving > 0 {
                ui.spinner();
                ui.label(format!("Fetching {} more...", resolving));
            }
        });
        ui.separator();

        if favorites.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.label("No favorites yet. Use the heart on a recipe to save it.");
            });
            return Vec::new();
        }

        let records = view_model.favorite_records();
        RecipeGrid::show(ui, &records, &favorites, |id| {
            view_model.pending_lookup_id() == Some(id)
        })
    }
}
