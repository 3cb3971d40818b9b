use crate::domain::entities::Recipe;
use crate::presentation::components::RecipeAction;
use crate::presentation::style::FAVORITE_COLOR;
use egui::RichText;

/// Non-modal side panel with the fully detailed record from a lookup.
pub struct DetailsPanel {
    recipe: Option<Recipe>,
}

impl DetailsPanel {
    pub fn new() -> Self {
        Self { recipe: None }
    }

    pub fn show(&mut self, recipe: Recipe) {
        self.recipe = Some(recipe);
    }

    pub fn close(&mut self) {
        self.recipe = None;
    }

    pub fn recipe_id(&self) -> Option<&str> {
        self.recipe.as_ref().map(|recipe| recipe.id.as_str())
    }

    /// Draws the panel while a recipe is shown. Closing is reported as
    /// `RecipeAction::ClosePreview` so the caller can drop pending lookups too.
    pub fn render(&self, ctx: &egui::Context, is_favorite: bool) -> Option<RecipeAction> {
        let recipe = self.recipe.as_ref()?;
        let mut action = None;

        egui::SidePanel::right("details_panel")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(&recipe.name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("✖").clicked() {
                            action = Some(RecipeAction::ClosePreview);
                        }
                    });
                });
                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Category:").strong());
                        ui.label(&recipe.category);
                        ui.add_space(8.0);

                        if !recipe.thumbnail_url.is_empty() {
                            ui.hyperlink_to("View image", &recipe.thumbnail_url);
                            ui.add_space(8.0);
                        }

                        ui.label(RichText::new("Instructions:").strong());
                        ui.label(&recipe.instructions);
                        ui.add_space(8.0);

                        if let Some(video) = &recipe.video_url {
                            ui.hyperlink_to("Watch on YouTube", video);
                            ui.add_space(8.0);
                        }

                        ui.separator();
                        let label = if is_favorite {
                            RichText::new("♥ Remove from favorites").color(FAVORITE_COLOR)
                        } else {
                            RichText::new("♡ Add to favorites")
                        };
                        if ui.button(label).clicked() {
                            action = Some(RecipeAction::ToggleFavorite(recipe.id.clone()));
                        }
                    });
            });

        action
    }
}

impl Default for DetailsPanel {
    fn default() -> Self {
        Self::new()
    }
}
