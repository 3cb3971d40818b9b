use crate::domain::entities::{FavoriteSet, Recipe};
use crate::presentation::style::FAVORITE_COLOR;
use egui::{RichText, ScrollArea};

const COLUMNS: usize = 4;
const CARD_WIDTH: f32 = 220.0;

pub enum RecipeAction {
    ToggleFavorite(String),
    Preview(String),
    ClosePreview,
}

pub enum PageAction {
    Prev,
    Next,
}

pub struct RecipeGrid;

impl RecipeGrid {
    pub fn show(
        ui: &mut egui::Ui,
        recipes: &[&Recipe],
        favorites: &FavoriteSet,
        is_previewing: impl Fn(&str) -> bool,
    ) -> Vec<RecipeAction> {
        let mut actions = Vec::new();

        if recipes.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.label("No recipes to show.");
            });
            return actions;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("recipe_grid")
                    .num_columns(COLUMNS)
                    .spacing([12.0, 12.0])
                    .show(ui, |ui| {
                        for row in recipes.chunks(COLUMNS) {
                            for recipe in row {
                                Self::card(
                                    ui,
                                    recipe,
                                    favorites.contains(&recipe.id),
                                    is_previewing(&recipe.id),
                                    &mut actions,
                                );
                            }
                            ui.end_row();
                        }
                    });
            });

        actions
    }

    fn card(
        ui: &mut egui::Ui,
        recipe: &Recipe,
        is_favorite: bool,
        is_previewing: bool,
        actions: &mut Vec<RecipeAction>,
    ) {
        ui.group(|ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.label(RichText::new(&recipe.name).strong());
                ui.label(format!("Category: {}", recipe.category));
                if !recipe.thumbnail_url.is_empty() {
                    ui.hyperlink_to("Thumbnail", &recipe.thumbnail_url);
                }

                ui.horizontal(|ui| {
                    if is_previewing {
                        ui.spinner();
                    } else if ui.button("Preview").clicked() {
                        actions.push(RecipeAction::Preview(recipe.id.clone()));
                    }

                    let heart = if is_favorite {
                        RichText::new("♥").color(FAVORITE_COLOR)
                    } else {
                        RichText::new("♡")
                    };
                    if ui
                        .button(heart)
                        .on_hover_text(if is_favorite {
                            "Remove from favorites"
                        } else {
                            "Add to favorites"
                        })
                        .clicked()
                    {
                        actions.push(RecipeAction::ToggleFavorite(recipe.id.clone()));
                    }
                });
            });
        });
    }

    pub fn pager(
        ui: &mut egui::Ui,
        page: usize,
        page_count: usize,
        has_prev: bool,
        has_next: bool,
    ) -> Option<PageAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            if ui.add_enabled(has_prev, egui::Button::new("◀ Prev")).clicked() {
                action = Some(PageAction::Prev);
            }
            ui.label(format!("Page {} of {}", page, page_count));
            if ui.add_enabled(has_next, egui::Button::new("Next ▶")).clicked() {
                action = Some(PageAction::Next);
            }
        });

        action
    }
}
