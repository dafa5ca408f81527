//! # Styling Module
//!
//! Global egui styling and the color constants used throughout the app:
//! warm pink for cats, blue for dogs, purple for the header band.

use eframe::egui;
use egui::Color32;

pub mod colors {
    use super::Color32;

    pub const CAT_PRIMARY: Color32 = Color32::from_rgb(236, 72, 153);
    pub const CAT_SECONDARY: Color32 = Color32::from_rgb(252, 231, 243);
    pub const DOG_PRIMARY: Color32 = Color32::from_rgb(59, 130, 246);
    pub const DOG_SECONDARY: Color32 = Color32::from_rgb(219, 234, 254);

    pub const HEADER_PURPLE: Color32 = Color32::from_rgb(139, 92, 246);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(17, 24, 39);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(107, 114, 128);
    pub const ERROR_RED: Color32 = Color32::from_rgb(220, 38, 38);
    pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(22, 163, 74);
    pub const CARD_BORDER: Color32 = Color32::from_rgb(229, 231, 235);
}

/// Setup application-wide egui styling
pub fn setup_app_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.window_fill = Color32::from_rgb(249, 250, 251);
        style.visuals.panel_fill = Color32::from_rgb(249, 250, 251);
        style.visuals.button_frame = true;
        // Light background so text fields stand out from the panel
        style.visuals.extreme_bg_color = Color32::WHITE;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(26.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and roomy padding
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// Accent color for a pet type badge or icon
pub fn pet_primary_color(pet_type: shared::PetType) -> Color32 {
    match pet_type {
        shared::PetType::Cat => colors::CAT_PRIMARY,
        shared::PetType::Dog => colors::DOG_PRIMARY,
    }
}

/// Soft background color behind a pet type badge
pub fn pet_secondary_color(pet_type: shared::PetType) -> Color32 {
    match pet_type {
        shared::PetType::Cat => colors::CAT_SECONDARY,
        shared::PetType::Dog => colors::DOG_SECONDARY,
    }
}
