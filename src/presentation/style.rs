use crate::domain::services::Severity;
use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

pub const FAVORITE_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Success => Color32::from_rgb(25, 135, 84),
        Severity::Warning => Color32::from_rgb(204, 138, 0),
        Severity::Danger => Color32::from_rgb(220, 53, 69),
        Severity::Info => Color32::from_rgb(13, 110, 253),
    }
}

pub fn configure_style(ctx: &Context) {
    let mut style = (*ctx.style()).clone();

    style.text_styles = [
        (TextStyle::Small, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(12.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.spacing.interact_size = egui::vec2(48.0, 28.0);

    let mut visuals = Visuals::dark();

    visuals.widgets.noninteractive.rounding = Rounding::same(8.0);
    visuals.widgets.inactive.rounding = Rounding::same(8.0);
    visuals.widgets.hovered.rounding = Rounding::same(8.0);
    visuals.widgets.active.rounding = Rounding::same(8.0);
    visuals.widgets.open.rounding = Rounding::same(8.0);
    visuals.window_rounding = Rounding::same(12.0);

    visuals.widgets.noninteractive.bg_fill = Color32::from_gray(32);
    visuals.window_fill = Color32::from_gray(20);
    visuals.panel_fill = Color32::from_gray(28);

    visuals.widgets.inactive.weak_bg_fill = Color32::from_gray(45);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, Color32::from_gray(60));
    visuals.widgets.hovered.weak_bg_fill = Color32::from_gray(60);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, Color32::from_gray(100));

    visuals.selection.bg_fill = Color32::from_rgb(0, 122, 255);
    visuals.hyperlink_color = Color32::from_rgb(58, 150, 255);

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}
