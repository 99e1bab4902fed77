use eframe::egui;

use crate::ui::app_state::MoodTrackerApp;

impl eframe::App for MoodTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clear messages after a delay
        if self.error_message.is_some() || self.success_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(5));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);

            ui.separator();

            self.render_messages(ui);

            self.render_mood_form(ui);

            ui.add_space(16.0);

            self.render_chart_section(ui);
        });
    }
}

impl MoodTrackerApp {
    /// Render the application header
    fn render_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            // Use Proportional font for emoji-containing text
            ui.label(
                egui::RichText::new("🙂 Mood Tracker")
                    .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                    .strong(),
            );
        });
    }

    /// Render error and success messages
    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.error_message {
            ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
        }
        if let Some(success) = &self.success_message {
            ui.colored_label(egui::Color32::GREEN, format!("✅ {}", success));
        }
    }
}
