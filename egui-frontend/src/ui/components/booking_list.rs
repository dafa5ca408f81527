//! Booking list view: search box, filter chips, result cards and the
//! delete-confirmation dialog

use eframe::egui;
use shared::BookingCategory;

use crate::ui::app_state::BoardingTrackerApp;
use crate::ui::components::booking_card::{render_booking_card, BookingCardAction};
use crate::ui::components::styling::colors;
use crate::ui::components::ui_components::{empty_state, section_heading};

impl BoardingTrackerApp {
    /// Render the all-bookings view
    pub fn render_booking_list(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "All Bookings");
        ui.label(
            egui::RichText::new("Manage your pet boarding reservations").color(colors::TEXT_MUTED),
        );
        ui.add_space(8.0);

        // Search bar with clear button
        ui.horizontal(|ui| {
            ui.label("🔍");
            ui.add(
                egui::TextEdit::singleline(&mut self.search_query)
                    .hint_text("Search bookings...")
                    .desired_width(300.0),
            );
            if !self.search_query.is_empty() && ui.button("✖").clicked() {
                self.search_query.clear();
            }
        });

        // Filter chips
        ui.horizontal(|ui| {
            for category in BookingCategory::ALL {
                let selected = self.selected_category == category;
                if ui.selectable_label(selected, category.label()).clicked() {
                    self.selected_category = category;
                }
            }
        });

        ui.add_space(10.0);

        let bookings = self.filtered_bookings();
        if bookings.is_empty() {
            let (icon, title, subtitle) = if !self.search_query.is_empty() {
                ("🔍", "No results found", "Try adjusting your search or filters")
            } else if self.selected_category != BookingCategory::All {
                ("📋", "No bookings found", "No bookings match the selected filter")
            } else {
                ("🐾", "No bookings yet", "Add your first booking to get started")
            };
            empty_state(ui, icon, title, subtitle);
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for booking in &bookings {
                if render_booking_card(ui, booking, true) == Some(BookingCardAction::Delete) {
                    self.request_delete(booking.id.clone(), booking.pet_name.clone());
                }
                ui.add_space(6.0);
            }
        });
    }

    /// Render the delete-confirmation dialog when a delete is pending
    pub fn render_delete_confirmation(&mut self, ctx: &egui::Context) {
        let Some((_, pet_name)) = self.pending_delete.clone() else {
            return;
        };

        egui::Window::new("Delete booking?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(format!(
                    "Are you sure you want to delete the booking for {}?",
                    pet_name
                ));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui
                        .button(egui::RichText::new("Delete").color(colors::ERROR_RED))
                        .clicked()
                    {
                        self.confirm_pending_delete();
                    }
                    if ui.button("Cancel").clicked() {
                        self.pending_delete = None;
                    }
                });
            });
    }
}
