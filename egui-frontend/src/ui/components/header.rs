//! Application header: title band plus view navigation

use eframe::egui;

use crate::ui::app_state::{BoardingTrackerApp, CurrentView};
use crate::ui::components::styling::colors;

impl BoardingTrackerApp {
    /// Render the header with navigation buttons
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(colors::HEADER_PURPLE)
            .inner_margin(egui::Margin::symmetric(16.0, 12.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("🐾 Boarding Tracker")
                            .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(egui::Color32::WHITE),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        self.nav_button(ui, "All Bookings", CurrentView::BookingList);
                        self.nav_button(ui, "New Booking", CurrentView::BookingForm);
                        self.nav_button(ui, "Home", CurrentView::Home);
                    });
                });
            });
    }

    fn nav_button(&mut self, ui: &mut egui::Ui, label: &str, view: CurrentView) {
        let selected = self.current_view == view;
        let text = egui::RichText::new(label).color(if selected {
            egui::Color32::WHITE
        } else {
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, 190)
        });

        if ui.selectable_label(selected, text).clicked() {
            self.current_view = view;
        }
    }
}
