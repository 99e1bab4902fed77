//! # Chart Renderer Module
//!
//! This module handles the mood frequency visualization.
//!
//! ## Key Functions:
//! - `render_chart_section()` - Chart view with warning/error states
//! - `render_mood_chart()` - Render the bar chart using egui_plot
//!
//! ## Purpose:
//! One bar per mood label, bar height = number of logged entries for that
//! mood. When there is no valid data a warning is shown instead of a chart.

use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};
use std::collections::BTreeMap;

use crate::backend::domain::MoodSummary;
use crate::ui::app_state::MoodTrackerApp;

impl MoodTrackerApp {
    /// Draw the chart section: bar chart of counts, or a warning state
    pub fn render_chart_section(&mut self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("Mood Trends")
                .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                .strong(),
        );

        ui.add_space(8.0);

        match &self.summary {
            Some(MoodSummary::Counts(counts)) => {
                self.render_mood_chart(ui, counts);
            }
            Some(MoodSummary::Empty) => {
                ui.colored_label(
                    egui::Color32::from_rgb(230, 160, 0),
                    "⚠️ No mood data available yet. Please log your mood first.",
                );
            }
            Some(MoodSummary::MissingDateColumn) => {
                ui.colored_label(
                    egui::Color32::RED,
                    "❌ Error: 'Date' column not found in data!",
                );
            }
            None => {
                ui.label("Loading mood data...");
            }
        }
    }

    /// Render the bar chart, one bar per mood label
    fn render_mood_chart(&self, ui: &mut egui::Ui, counts: &BTreeMap<String, u64>) {
        let labels: Vec<String> = counts.keys().cloned().collect();

        let bars: Vec<Bar> = counts
            .values()
            .enumerate()
            .map(|(index, count)| Bar::new(index as f64, *count as f64).width(0.6))
            .collect();
        let chart = BarChart::new(bars).name("Mood frequency");

        let axis_labels = labels.clone();
        Plot::new("mood_chart")
            .height(260.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| {
                // Label whole-number ticks with the mood they represent
                let index = mark.value.round() as usize;
                if (mark.value - index as f64).abs() < 1e-6 && index < axis_labels.len() {
                    axis_labels[index].clone()
                } else {
                    String::new()
                }
            })
            .y_axis_formatter(|mark, _range| {
                // Counts are whole numbers, hide fractional ticks
                if mark.value >= 0.0 && mark.value.fract() == 0.0 {
                    format!("{:.0}", mark.value)
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
            });
    }
}
