//! Booking card: pet name and type badge, owner details, stay period, notes

use eframe::egui;
use shared::Booking;

use crate::ui::components::styling::{colors, pet_primary_color, pet_secondary_color};

/// Action requested from a booking card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingCardAction {
    Delete,
}

/// Render one booking card. Returns the action the user requested, if any;
/// the delete button only appears when `deletable` is set.
pub fn render_booking_card(
    ui: &mut egui::Ui,
    booking: &Booking,
    deletable: bool,
) -> Option<BookingCardAction> {
    let mut action = None;

    egui::Frame::none()
        .fill(egui::Color32::WHITE)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(14.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&booking.pet_name)
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );

                // Type badge
                egui::Frame::none()
                    .fill(pet_secondary_color(booking.pet_type))
                    .rounding(egui::Rounding::same(6.0))
                    .inner_margin(egui::Margin::symmetric(8.0, 2.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(booking.pet_type.label())
                                .small()
                                .strong()
                                .color(pet_primary_color(booking.pet_type)),
                        );
                    });

                if deletable {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(egui::RichText::new("🗑").color(colors::ERROR_RED))
                            .on_hover_text("Delete booking")
                            .clicked()
                        {
                            action = Some(BookingCardAction::Delete);
                        }
                    });
                }
            });

            info_row(ui, "Owner", &booking.owner_name);
            info_row(ui, "Phone", &booking.owner_phone);
            info_row(ui, "Stay Period", &booking.stay_period());
            if let Some(notes) = &booking.notes {
                info_row(ui, "Notes", notes);
            }
        });

    action
}

fn info_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{}:", label))
                .small()
                .color(colors::TEXT_MUTED),
        );
        ui.label(egui::RichText::new(value).color(colors::TEXT_PRIMARY));
    });
}
