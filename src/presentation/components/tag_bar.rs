pub struct TagBar;

impl TagBar {
    /// Returns the tag the user clicked, if any.
    pub fn show(ui: &mut egui::Ui, tags: &[String], active: Option<&str>) -> Option<String> {
        let mut clicked = None;

        ui.horizontal_wrapped(|ui| {
            ui.label("Filter:");
            for tag in tags {
                let selected = active == Some(tag.as_str());
                if ui.selectable_label(selected, tag).clicked() {
                    clicked = Some(tag.clone());
                }
            }
        });

        clicked
    }
}
