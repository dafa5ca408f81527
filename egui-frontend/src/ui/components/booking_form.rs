//! Booking creation form, with the guided voice-style entry panel attached

use eframe::egui;
use egui_extras::DatePickerButton;
use shared::PetType;

use crate::ui::app_state::BoardingTrackerApp;
use crate::ui::components::styling::{colors, pet_primary_color, pet_secondary_color};
use crate::ui::components::ui_components::section_heading;

impl BoardingTrackerApp {
    /// Render the new-booking form
    pub fn render_booking_form(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Pet Information");
        ui.add_space(4.0);

        labeled_text_field(
            ui,
            "Pet Name",
            "Enter pet name",
            &mut self.form.pet_name,
            &self.form.pet_name_error,
        );

        ui.label(egui::RichText::new("Pet Type").color(colors::TEXT_MUTED));
        ui.horizontal(|ui| {
            pet_type_button(ui, PetType::Cat, &mut self.form.pet_type);
            pet_type_button(ui, PetType::Dog, &mut self.form.pet_type);
        });
        inline_error(ui, &self.form.pet_type_error);

        ui.add_space(12.0);
        section_heading(ui, "Owner Information");
        ui.add_space(4.0);

        labeled_text_field(
            ui,
            "Owner Name",
            "Enter owner name",
            &mut self.form.owner_name,
            &self.form.owner_name_error,
        );
        labeled_text_field(
            ui,
            "Phone Number",
            "Enter phone number",
            &mut self.form.owner_phone,
            &self.form.owner_phone_error,
        );

        ui.add_space(12.0);
        section_heading(ui, "Booking Details");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new("Check-in Date").color(colors::TEXT_MUTED));
                ui.add(DatePickerButton::new(&mut self.form.check_in).id_source("check_in"));
            });
            ui.add_space(16.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new("Check-out Date").color(colors::TEXT_MUTED));
                ui.add(DatePickerButton::new(&mut self.form.check_out).id_source("check_out"));
            });
        });
        inline_error(ui, &self.form.date_error);

        ui.label(egui::RichText::new("Special Notes (Optional)").color(colors::TEXT_MUTED));
        ui.add(
            egui::TextEdit::multiline(&mut self.form.notes)
                .hint_text("Any special instructions or notes...")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(12.0);
        if ui
            .add_sized(
                [ui.available_width(), 44.0],
                egui::Button::new(egui::RichText::new("Create Booking").strong()),
            )
            .clicked()
        {
            self.submit_booking_form();
        }

        ui.add_space(20.0);
        self.render_guided_entry_panel(ui);
    }

    /// Guided entry: asks the script's questions one at a time and sends the
    /// finished payload to the remote table, not into the local store
    fn render_guided_entry_panel(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            section_heading(ui, "Voice Facilitator");
            ui.label(
                egui::RichText::new(
                    "Experimental guided booking: answer one question at a time. \
                     Entries go to the remote bookings table only.",
                )
                .small()
                .color(colors::TEXT_MUTED),
            );
            ui.add_space(6.0);

            let current = self.guided_session.as_ref().and_then(|s| s.current_step());
            match current {
                None => {
                    if ui.button("🎤 Start Guided Booking").clicked() {
                        self.start_guided_entry();
                    }
                }
                Some(step) => {
                    let step_index = self
                        .guided_session
                        .as_ref()
                        .map(|s| s.step_index())
                        .unwrap_or(0);
                    ui.label(
                        egui::RichText::new(format!(
                            "Question {} of {}",
                            step_index + 1,
                            crate::backend::domain::guided_entry::ENTRY_STEPS.len()
                        ))
                        .small()
                        .color(colors::TEXT_MUTED),
                    );
                    ui.label(egui::RichText::new(step.question).strong());

                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.guided_answer)
                            .hint_text("Your answer")
                            .desired_width(320.0),
                    );
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    ui.horizontal(|ui| {
                        if ui.button("Answer").clicked() || submitted {
                            self.submit_guided_answer();
                        }
                        if ui.button("Cancel").clicked() {
                            self.cancel_guided_entry();
                        }
                    });
                }
            }
        });
    }
}

fn labeled_text_field(
    ui: &mut egui::Ui,
    label: &str,
    hint: &str,
    value: &mut String,
    error: &Option<String>,
) {
    ui.label(egui::RichText::new(label).color(colors::TEXT_MUTED));
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    inline_error(ui, error);
}

fn inline_error(ui: &mut egui::Ui, error: &Option<String>) {
    if let Some(message) = error {
        ui.label(
            egui::RichText::new(message)
                .small()
                .color(colors::ERROR_RED),
        );
    }
    ui.add_space(6.0);
}

fn pet_type_button(ui: &mut egui::Ui, pet_type: PetType, selection: &mut Option<PetType>) {
    let selected = *selection == Some(pet_type);
    let fill = if selected {
        pet_secondary_color(pet_type)
    } else {
        egui::Color32::WHITE
    };
    let text_color = if selected {
        pet_primary_color(pet_type)
    } else {
        colors::TEXT_MUTED
    };

    let button = egui::Button::new(
        egui::RichText::new(format!("🐾 {}", pet_type.label()))
            .strong()
            .color(text_color),
    )
    .fill(fill)
    .min_size(egui::vec2(120.0, 48.0));

    if ui.add(button).clicked() {
        *selection = Some(pet_type);
    }
}
