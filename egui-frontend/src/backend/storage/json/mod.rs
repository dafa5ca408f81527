//! # JSON Storage Module
//!
//! File-based storage for the boarding tracker. The entire booking collection
//! lives in a single `bookings.json` file under the data directory, written
//! atomically on every mutation.
//!
//! ## File Format
//!
//! The file holds one JSON array; stay boundaries are date-only strings so a
//! reload reconstructs calendar dates rather than instants:
//!
//! ```json
//! [
//!   {
//!     "id": "booking::6f9c…",
//!     "pet_name": "Whiskers",
//!     "pet_type": "cat",
//!     "owner_name": "Dana",
//!     "owner_phone": "555-0101",
//!     "check_in": "2024-03-01",
//!     "check_out": "2024-03-05",
//!     "notes": null,
//!     "created_at": "2024-02-20T10:00:00+00:00"
//!   }
//! ]
//! ```

pub mod booking_repository;
pub mod connection;

pub use booking_repository::BookingRepository;
pub use connection::JsonConnection;
