//! # App Coordinator Module
//!
//! The main update loop: applies global styling, clears transient messages,
//! renders the header and routes to the current view, then draws any
//! pending confirmation dialog on top.

use eframe::egui;

use crate::ui::app_state::{BoardingTrackerApp, CurrentView};
use crate::ui::components::setup_app_style;
use crate::ui::components::styling::colors;

impl eframe::App for BoardingTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_app_style(ctx);

        // Keep repainting while a transient message is up so it can fade out
        if self.error_message.is_some() || self.success_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(4));
            if ctx.input(|i| i.pointer.any_click()) {
                self.clear_messages();
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::from_rgb(249, 250, 251)))
            .show(ctx, |ui| {
                self.render_header(ui);

                self.render_messages(ui);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        egui::Frame::none()
                            .inner_margin(egui::Margin::symmetric(24.0, 16.0))
                            .show(ui, |ui| match self.current_view {
                                CurrentView::Home => self.render_home_view(ui),
                                CurrentView::BookingForm => self.render_booking_form(ui),
                                CurrentView::BookingList => self.render_booking_list(ui),
                            });
                    });
            });

        self.render_delete_confirmation(ctx);
    }
}

impl BoardingTrackerApp {
    /// Render transient error and success messages below the header
    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.error_message {
            ui.colored_label(colors::ERROR_RED, format!("✖ {}", error));
        }
        if let Some(success) = &self.success_message {
            ui.colored_label(colors::SUCCESS_GREEN, format!("✔ {}", success));
        }
    }
}
