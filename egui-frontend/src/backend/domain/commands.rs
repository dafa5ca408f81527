//! Domain-level command and result types
//!
//! These structs are the inputs and outputs of the booking service. The UI
//! layer maps form state and the DTOs from the `shared` crate to these
//! internal types.

pub mod bookings {
    use crate::backend::domain::models::booking::{Booking, PetType};
    use chrono::NaiveDate;

    /// Input for creating a new booking.
    ///
    /// Field validity (non-empty names, check-out after check-in) is the
    /// caller's responsibility; the service stores what it is given.
    #[derive(Debug, Clone)]
    pub struct CreateBookingCommand {
        pub pet_name: String,
        pub pet_type: PetType,
        pub owner_name: String,
        pub owner_phone: String,
        pub check_in: NaiveDate,
        pub check_out: NaiveDate,
        pub notes: Option<String>,
    }

    /// Result of creating a booking.
    #[derive(Debug, Clone)]
    pub struct CreateBookingResult {
        pub booking: Booking,
    }

    /// Command for deleting a booking by ID.
    #[derive(Debug, Clone)]
    pub struct DeleteBookingCommand {
        pub booking_id: String,
    }

    /// Result of deleting a booking. Deleting an unknown ID is a no-op,
    /// reported through `removed` rather than an error.
    #[derive(Debug, Clone)]
    pub struct DeleteBookingResult {
        pub removed: bool,
    }
}
