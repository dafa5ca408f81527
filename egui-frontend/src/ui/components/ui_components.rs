//! Reusable UI helpers shared by the views

use eframe::egui;

use crate::ui::components::styling::colors;

/// Section heading in the dashboard/list style
pub fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.label(
        egui::RichText::new(title)
            .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
            .strong()
            .color(colors::TEXT_PRIMARY),
    );
}

/// Centered empty-state box with icon, title and subtitle
pub fn empty_state(ui: &mut egui::Ui, icon: &str, title: &str, subtitle: &str) {
    egui::Frame::none()
        .fill(egui::Color32::WHITE)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(24.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(icon)
                        .font(egui::FontId::new(32.0, egui::FontFamily::Proportional)),
                );
                ui.label(
                    egui::RichText::new(title)
                        .font(egui::FontId::new(17.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.label(egui::RichText::new(subtitle).color(colors::TEXT_MUTED));
            });
        });
}

/// Small count badge, e.g. next to "Today's Bookings"
pub fn count_badge(ui: &mut egui::Ui, count: usize) {
    egui::Frame::none()
        .fill(colors::HEADER_PURPLE)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(10.0, 2.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(count.to_string())
                    .color(egui::Color32::WHITE)
                    .strong(),
            );
        });
}
