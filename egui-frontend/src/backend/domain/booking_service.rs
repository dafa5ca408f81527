use chrono::{Local, NaiveDate, Utc};
use log::{error, info};
use std::sync::Arc;

use crate::backend::domain::booking_queries::{self, FilterCategory};
use crate::backend::domain::commands::bookings::{
    CreateBookingCommand, CreateBookingResult, DeleteBookingCommand, DeleteBookingResult,
};
use crate::backend::domain::models::booking::{Booking, CapacityCount, PetType};
use crate::backend::storage::json::{BookingRepository, JsonConnection};
use crate::backend::storage::BookingStorage;

/// The booking store: single source of truth for the reservation collection.
///
/// Holds the authoritative in-memory list, restores it from disk at startup
/// and rewrites the whole file after every mutation. All operations run on
/// the UI thread; the collection is replaced as one unit, so callers never
/// observe a partial update.
pub struct BookingService {
    bookings: Vec<Booking>,
    repository: BookingRepository,
}

impl BookingService {
    /// Create a new BookingService, restoring any persisted collection.
    ///
    /// A load or parse failure is logged and the store starts empty; startup
    /// never fails on bad data.
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        let repository = BookingRepository::new(connection);

        let bookings = match repository.load_bookings() {
            Ok(bookings) => {
                info!("Restored {} bookings", bookings.len());
                bookings
            }
            Err(e) => {
                error!("Failed to load persisted bookings, starting empty: {:#}", e);
                Vec::new()
            }
        };

        Self {
            bookings,
            repository,
        }
    }

    /// Create a new booking from form data and append it to the collection.
    ///
    /// The service performs no validation; invalid field values are the
    /// caller's responsibility. This operation does not fail: a persistence
    /// write failure is logged and the in-memory state stays authoritative
    /// for the session.
    pub fn create_booking(&mut self, command: CreateBookingCommand) -> CreateBookingResult {
        let booking = Booking {
            id: Booking::generate_id(),
            pet_name: command.pet_name,
            pet_type: command.pet_type,
            owner_name: command.owner_name,
            owner_phone: command.owner_phone,
            check_in: command.check_in,
            check_out: command.check_out,
            notes: command.notes,
            created_at: Utc::now(),
        };

        info!(
            "Created booking {} for {} ({} to {})",
            booking.id, booking.pet_name, booking.check_in, booking.check_out
        );

        self.bookings.push(booking.clone());
        self.persist();

        CreateBookingResult { booking }
    }

    /// Delete the booking with the given ID. Unknown IDs are a silent no-op.
    pub fn delete_booking(&mut self, command: DeleteBookingCommand) -> DeleteBookingResult {
        let before = self.bookings.len();
        self.bookings.retain(|b| b.id != command.booking_id);
        let removed = self.bookings.len() < before;

        if removed {
            info!("Deleted booking {}", command.booking_id);
            self.persist();
        } else {
            info!(
                "Delete requested for unknown booking {}, nothing to do",
                command.booking_id
            );
        }

        DeleteBookingResult { removed }
    }

    /// Count the bookings whose stay covers `date`, per pet type.
    /// Linear scan over the collection.
    pub fn capacity_count(&self, date: NaiveDate) -> CapacityCount {
        let mut count = CapacityCount::default();

        for booking in &self.bookings {
            if booking.covers(date) {
                match booking.pet_type {
                    PetType::Cat => count.cat += 1,
                    PetType::Dog => count.dog += 1,
                }
            }
        }

        count
    }

    /// All bookings covering the current calendar date, in store order
    pub fn todays_bookings(&self) -> Vec<Booking> {
        let today = Local::now().date_naive();
        self.bookings
            .iter()
            .filter(|b| b.covers(today))
            .cloned()
            .collect()
    }

    /// The last `limit` bookings by insertion order, newest first
    pub fn recent_bookings(&self, limit: usize) -> Vec<Booking> {
        self.bookings.iter().rev().take(limit).cloned().collect()
    }

    /// Read-only view of the full collection, insertion-order preserved
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Search/filter pipeline for the list view (see `booking_queries`)
    pub fn filtered_bookings(
        &self,
        query: &str,
        category: FilterCategory,
        today: NaiveDate,
    ) -> Vec<Booking> {
        booking_queries::filter_bookings(&self.bookings, query, category, today)
    }

    fn persist(&self) {
        if let Err(e) = self.repository.save_bookings(&self.bookings) {
            // In-memory state stays authoritative for this session
            error!("Failed to persist bookings: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tempfile::tempdir;

    fn setup_test() -> BookingService {
        // into_path keeps the directory on disk for the rest of the test run
        let conn = JsonConnection::new(tempdir().unwrap().into_path()).unwrap();
        BookingService::new(Arc::new(conn))
    }

    fn command(
        pet_name: &str,
        pet_type: PetType,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> CreateBookingCommand {
        CreateBookingCommand {
            pet_name: pet_name.to_string(),
            pet_type,
            owner_name: "Jordan".to_string(),
            owner_phone: "555-0155".to_string(),
            check_in,
            check_out,
            notes: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn create_booking_assigns_id_and_preserves_insertion_order() {
        let mut service = setup_test();

        let first = service
            .create_booking(command(
                "Whiskers",
                PetType::Cat,
                date(2024, 3, 1),
                date(2024, 3, 5),
            ))
            .booking;
        let second = service
            .create_booking(command(
                "Rex",
                PetType::Dog,
                date(2024, 3, 2),
                date(2024, 3, 4),
            ))
            .booking;

        assert!(first.id.starts_with("booking::"));
        assert_ne!(first.id, second.id);

        let names: Vec<_> = service.bookings().iter().map(|b| b.pet_name.as_str()).collect();
        assert_eq!(names, ["Whiskers", "Rex"]);
    }

    #[test]
    fn add_then_delete_restores_the_original_collection() {
        let mut service = setup_test();
        service.create_booking(command(
            "Whiskers",
            PetType::Cat,
            date(2024, 3, 1),
            date(2024, 3, 5),
        ));
        let original: Vec<_> = service.bookings().to_vec();

        let added = service
            .create_booking(command(
                "Rex",
                PetType::Dog,
                date(2024, 3, 2),
                date(2024, 3, 4),
            ))
            .booking;
        let result = service.delete_booking(DeleteBookingCommand {
            booking_id: added.id,
        });

        assert!(result.removed);
        assert_eq!(service.bookings(), original.as_slice());
    }

    #[test]
    fn deleting_an_unknown_id_is_a_no_op() {
        let mut service = setup_test();
        service.create_booking(command(
            "Whiskers",
            PetType::Cat,
            date(2024, 3, 1),
            date(2024, 3, 5),
        ));

        let result = service.delete_booking(DeleteBookingCommand {
            booking_id: "booking::does-not-exist".to_string(),
        });

        assert!(!result.removed);
        assert_eq!(service.bookings().len(), 1);
    }

    #[test]
    fn capacity_counts_check_in_day_but_not_check_out_day() {
        let mut service = setup_test();
        service.create_booking(command(
            "Whiskers",
            PetType::Cat,
            date(2024, 3, 1),
            date(2024, 3, 5),
        ));

        assert_eq!(service.capacity_count(date(2024, 3, 1)).cat, 1);
        assert_eq!(service.capacity_count(date(2024, 3, 4)).cat, 1);
        assert_eq!(service.capacity_count(date(2024, 3, 5)).cat, 0);
        assert_eq!(service.capacity_count(date(2024, 2, 29)).cat, 0);
    }

    #[test]
    fn capacity_buckets_by_pet_type() {
        let mut service = setup_test();
        service.create_booking(command(
            "Whiskers",
            PetType::Cat,
            date(2024, 3, 1),
            date(2024, 3, 5),
        ));
        service.create_booking(command(
            "Rex",
            PetType::Dog,
            date(2024, 3, 2),
            date(2024, 3, 6),
        ));
        service.create_booking(command(
            "Luna",
            PetType::Cat,
            date(2024, 3, 3),
            date(2024, 3, 4),
        ));

        let count = service.capacity_count(date(2024, 3, 3));
        assert_eq!(count, CapacityCount { cat: 2, dog: 1 });
    }

    #[test]
    fn todays_bookings_excludes_already_departed_stays() {
        let mut service = setup_test();
        let today = Local::now().date_naive();

        service.create_booking(command(
            "Whiskers",
            PetType::Cat,
            today,
            today + Duration::days(1),
        ));
        // Checked out this morning: covered yesterday only
        service.create_booking(command(
            "Rex",
            PetType::Dog,
            today - Duration::days(1),
            today,
        ));

        let todays = service.todays_bookings();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].pet_name, "Whiskers");
    }

    #[test]
    fn recent_bookings_returns_last_entries_newest_first() {
        let mut service = setup_test();
        for name in ["A", "B", "C", "D"] {
            service.create_booking(command(
                name,
                PetType::Dog,
                date(2024, 3, 1),
                date(2024, 3, 2),
            ));
        }

        let recent: Vec<_> = service
            .recent_bookings(3)
            .into_iter()
            .map(|b| b.pet_name)
            .collect();
        assert_eq!(recent, ["D", "C", "B"]);
    }

    #[test]
    fn collection_survives_a_service_restart() {
        let temp_dir = tempdir().unwrap();
        let conn = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());

        let created = {
            let mut service = BookingService::new(conn.clone());
            service
                .create_booking(command(
                    "Whiskers",
                    PetType::Cat,
                    date(2024, 3, 1),
                    date(2024, 3, 5),
                ))
                .booking
        };

        let reloaded = BookingService::new(conn);
        assert_eq!(reloaded.bookings().len(), 1);
        assert_eq!(reloaded.bookings()[0].id, created.id);
        assert_eq!(reloaded.bookings()[0].check_in, created.check_in);
        assert_eq!(reloaded.bookings()[0].check_out, created.check_out);
    }

    #[test]
    fn corrupt_booking_file_falls_back_to_an_empty_collection() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("bookings.json"), "{{ nope").unwrap();

        let conn = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        let service = BookingService::new(conn);

        assert!(service.bookings().is_empty());
    }
}
