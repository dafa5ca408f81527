//! Home dashboard: capacity overview, quick actions, today's and recent
//! bookings

use chrono::Local;
use eframe::egui;

use crate::ui::app_state::{BoardingTrackerApp, CurrentView};
use crate::ui::components::booking_card::render_booking_card;
use crate::ui::components::capacity_card::render_capacity_card;
use crate::ui::components::styling::colors;
use crate::ui::components::ui_components::{count_badge, empty_state, section_heading};
use crate::ui::mappers;

/// Facility size: fixed room/space counts per pet type
const CAT_ROOM_TOTAL: u32 = 4;
const DOG_SPACE_TOTAL: u32 = 2;

impl BoardingTrackerApp {
    /// Render the home dashboard
    pub fn render_home_view(&mut self, ui: &mut egui::Ui) {
        let today = Local::now().date_naive();
        let capacity = mappers::capacity_to_dto(self.backend.booking_service.capacity_count(today));
        let todays: Vec<_> = self
            .backend
            .booking_service
            .todays_bookings()
            .iter()
            .map(mappers::booking_to_dto)
            .collect();
        let recent: Vec<_> = self
            .backend
            .booking_service
            .recent_bookings(5)
            .iter()
            .map(mappers::booking_to_dto)
            .collect();

        section_heading(ui, "Capacity Overview");
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            render_capacity_card(
                ui,
                "Cat Rooms",
                capacity.cat,
                CAT_ROOM_TOTAL,
                colors::CAT_PRIMARY,
            );
            render_capacity_card(
                ui,
                "Dog Spaces",
                capacity.dog,
                DOG_SPACE_TOTAL,
                colors::DOG_PRIMARY,
            );
        });

        ui.add_space(16.0);
        section_heading(ui, "Quick Actions");
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui
                .add_sized([160.0, 44.0], egui::Button::new("➕ New Booking"))
                .clicked()
            {
                self.current_view = CurrentView::BookingForm;
            }
            if ui
                .add_sized([160.0, 44.0], egui::Button::new("📋 All Bookings"))
                .clicked()
            {
                self.current_view = CurrentView::BookingList;
            }
        });

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            section_heading(ui, "Today's Bookings");
            count_badge(ui, todays.len());
        });
        ui.add_space(6.0);
        if todays.is_empty() {
            empty_state(
                ui,
                "📅",
                "No bookings today",
                "All pets are checked out for today",
            );
        } else {
            for booking in &todays {
                render_booking_card(ui, booking, false);
                ui.add_space(6.0);
            }
        }

        ui.add_space(16.0);
        section_heading(ui, "Recent Bookings");
        ui.add_space(6.0);
        if recent.is_empty() {
            empty_state(
                ui,
                "🐾",
                "No bookings yet",
                "Add your first booking to get started",
            );
        } else {
            for booking in &recent {
                render_booking_card(ui, booking, false);
                ui.add_space(6.0);
            }
        }
    }
}
