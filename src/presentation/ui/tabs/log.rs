use crate::presentation::components::LogManager;
use eframe::egui;
use tracing::Level;

pub enum LogAction {
    CopyAll,
    Clear,
}

pub struct LogTab;

impl LogTab {
    pub fn show(ui: &mut egui::Ui, log_manager: &LogManager) -> Vec<LogAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.heading("Activity Log");
            ui.label(format!("{} entries", log_manager.len()));
        });
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("📋 Copy All").clicked() {
                actions.push(LogAction::CopyAll);
            }
            if ui.button("🗑 Clear").clicked() {
                actions.push(LogAction::Clear);
            }
        });

        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                let bg_frame = egui::Frame::default()
                    .fill(egui::Color32::BLACK)
                    .inner_margin(8.0);
                bg_frame.show(ui, |ui| {
                    ui.set_width(ui.available_width());

                    for entry in log_manager.all_logs() {
                        let color = match entry.level {
                            Level::ERROR => egui::Color32::from_rgb(255, 90, 90),
                            Level::WARN => egui::Color32::from_rgb(255, 200, 0),
                            _ => egui::Color32::from_rgb(0, 255, 0),
                        };
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(format!("[{}]", entry.format_timestamp()))
                                    .color(egui::Color32::GRAY)
                                    .monospace(),
                            );
                            ui.label(egui::RichText::new(&entry.message).color(color).monospace());
                        });
                    }
                });
            });

        actions
    }
}
