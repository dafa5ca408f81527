//! # App State Module
//!
//! Central application state for the boarding tracker: the backend handle,
//! the current view, transient messages, and the per-view UI state (form
//! fields, list filters, guided-entry session, pending delete confirmation).
//!
//! The `BoardingTrackerApp` struct is the single source of truth for UI
//! state; booking data itself lives in the backend's booking service and the
//! views only ever hold derived copies.

use chrono::{Duration, Local, NaiveDate};
use log::info;
use shared::*;

use crate::backend::domain::commands::bookings::{CreateBookingCommand, DeleteBookingCommand};
use crate::backend::domain::guided_entry::{EntryOutcome, GuidedEntrySession};
use crate::backend::Backend;
use crate::ui::mappers;

/// Views reachable from the header navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentView {
    Home,
    BookingForm,
    BookingList,
}

/// Field values and inline errors for the booking form
pub struct BookingFormState {
    pub pet_name: String,
    pub pet_type: Option<PetType>,
    pub owner_name: String,
    pub owner_phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub notes: String,

    pub pet_name_error: Option<String>,
    pub pet_type_error: Option<String>,
    pub owner_name_error: Option<String>,
    pub owner_phone_error: Option<String>,
    pub date_error: Option<String>,
}

impl BookingFormState {
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            pet_name: String::new(),
            pet_type: None,
            owner_name: String::new(),
            owner_phone: String::new(),
            check_in: today,
            check_out: today + Duration::days(1),
            notes: String::new(),
            pet_name_error: None,
            pet_type_error: None,
            owner_name_error: None,
            owner_phone_error: None,
            date_error: None,
        }
    }

    /// Validate all fields, recording inline errors.
    /// Returns true when submission may proceed.
    pub fn validate(&mut self) -> bool {
        self.pet_name_error = self
            .pet_name
            .trim()
            .is_empty()
            .then(|| "Pet name is required".to_string());
        self.pet_type_error = self
            .pet_type
            .is_none()
            .then(|| "Please select a pet type".to_string());
        self.owner_name_error = self
            .owner_name
            .trim()
            .is_empty()
            .then(|| "Owner name is required".to_string());
        self.owner_phone_error = self
            .owner_phone
            .trim()
            .is_empty()
            .then(|| "Phone number is required".to_string());
        self.date_error = (self.check_out <= self.check_in)
            .then(|| "Check-out date must be after check-in date".to_string());

        self.pet_name_error.is_none()
            && self.pet_type_error.is_none()
            && self.owner_name_error.is_none()
            && self.owner_phone_error.is_none()
            && self.date_error.is_none()
    }
}

/// Main application struct for the egui boarding tracker
pub struct BoardingTrackerApp {
    pub backend: Backend,

    // UI state
    pub current_view: CurrentView,
    pub error_message: Option<String>,
    pub success_message: Option<String>,

    // Booking form state
    pub form: BookingFormState,

    // List view state
    pub search_query: String,
    pub selected_category: BookingCategory,
    /// (booking id, pet name) awaiting delete confirmation
    pub pending_delete: Option<(String, String)>,

    // Guided entry state
    pub guided_session: Option<GuidedEntrySession>,
    pub guided_answer: String,
}

impl BoardingTrackerApp {
    /// Create a new BoardingTrackerApp with default values
    pub fn new() -> Result<Self, anyhow::Error> {
        info!("Initializing Boarding Tracker app");

        let backend = Backend::new()?;

        Ok(Self {
            backend,
            current_view: CurrentView::Home,
            error_message: None,
            success_message: None,
            form: BookingFormState::new(),
            search_query: String::new(),
            selected_category: BookingCategory::All,
            pending_delete: None,
            guided_session: None,
            guided_answer: String::new(),
        })
    }

    /// Clear success/error messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    /// Submit the booking form into the store. Blocked while invalid.
    pub fn submit_booking_form(&mut self) {
        if !self.form.validate() {
            return;
        }
        // validate() guarantees a selection
        let Some(pet_type) = self.form.pet_type else {
            return;
        };

        let notes = self.form.notes.trim();
        let command = CreateBookingCommand {
            pet_name: self.form.pet_name.trim().to_string(),
            pet_type: mappers::pet_type_to_domain(pet_type),
            owner_name: self.form.owner_name.trim().to_string(),
            owner_phone: self.form.owner_phone.trim().to_string(),
            check_in: self.form.check_in,
            check_out: self.form.check_out,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        };

        self.backend.booking_service.create_booking(command);

        self.success_message = Some("Booking created successfully!".to_string());
        self.form = BookingFormState::new();
        self.current_view = CurrentView::Home;
    }

    /// Ask for confirmation before deleting a booking
    pub fn request_delete(&mut self, booking_id: String, pet_name: String) {
        self.pending_delete = Some((booking_id, pet_name));
    }

    /// Delete the booking awaiting confirmation
    pub fn confirm_pending_delete(&mut self) {
        if let Some((booking_id, pet_name)) = self.pending_delete.take() {
            self.backend
                .booking_service
                .delete_booking(DeleteBookingCommand { booking_id });
            self.success_message = Some(format!("Booking for {} deleted", pet_name));
        }
    }

    /// Bookings for the list view, searched/filtered/sorted
    pub fn filtered_bookings(&self) -> Vec<Booking> {
        let today = Local::now().date_naive();
        self.backend
            .booking_service
            .filtered_bookings(
                &self.search_query,
                mappers::category_to_filter(self.selected_category),
                today,
            )
            .iter()
            .map(mappers::booking_to_dto)
            .collect()
    }

    /// Start a fresh walk through the guided entry script
    pub fn start_guided_entry(&mut self) {
        self.guided_session = Some(GuidedEntrySession::new());
        self.guided_answer.clear();
    }

    /// Record the typed answer for the current guided step; on completion,
    /// send the payload down the remote insert pathway. The payload never
    /// enters the local store, so a guided booking will not appear in the
    /// list view.
    pub fn submit_guided_answer(&mut self) {
        let Some(session) = self.guided_session.as_mut() else {
            return;
        };

        let outcome = session.record_answer(&self.guided_answer);
        self.guided_answer.clear();

        if let EntryOutcome::Complete(payload) = outcome {
            self.guided_session = None;

            match &self.backend.remote_client {
                Some(client) => match client.insert_booking(&payload) {
                    Ok(()) => {
                        self.success_message =
                            Some("Your booking has been confirmed. Thank you!".to_string());
                    }
                    Err(e) => {
                        self.error_message =
                            Some(format!("Something went wrong while booking: {}", e));
                    }
                },
                None => {
                    self.error_message =
                        Some("Remote booking is not configured on this device".to_string());
                }
            }
        }
    }

    /// Abandon the guided entry script without sending anything
    pub fn cancel_guided_entry(&mut self) {
        self.guided_session = None;
        self.guided_answer.clear();
    }
}
