//! # Mood Form Module
//!
//! Renders the mood picker (fixed set of four options) and the log button.

use eframe::egui;

use shared::MoodOption;

use crate::ui::app_state::MoodTrackerApp;

impl MoodTrackerApp {
    /// Render the mood picker and the log button
    pub fn render_mood_form(&mut self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("How are you feeling today?")
                .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                .strong(),
        );

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            egui::ComboBox::from_id_source("mood_picker")
                .selected_text(self.selected_mood.label())
                .show_ui(ui, |ui| {
                    for option in MoodOption::ALL {
                        ui.selectable_value(&mut self.selected_mood, option, option.label());
                    }
                });

            if ui.button("💾 Log Mood").clicked() {
                self.log_selected_mood();
            }
        });
    }
}
