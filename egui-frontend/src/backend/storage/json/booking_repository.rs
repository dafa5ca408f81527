use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::sync::Arc;

use super::connection::JsonConnection;
use crate::backend::domain::models::booking::{Booking, PetType};
use crate::backend::storage::traits::BookingStorage;

/// Intermediate struct for JSON serialization with string date fields.
/// `check_in`/`check_out` are stored date-only so a reload yields calendar
/// dates; a raw timestamp round-trip would shift stays across time zones.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonBooking {
    id: String,
    pet_name: String,
    pet_type: String,
    owner_name: String,
    owner_phone: String,
    check_in: String,  // YYYY-MM-DD
    check_out: String, // YYYY-MM-DD
    notes: Option<String>,
    created_at: String, // RFC 3339
}

impl JsonBooking {
    fn from_domain(booking: &Booking) -> Self {
        Self {
            id: booking.id.clone(),
            pet_name: booking.pet_name.clone(),
            pet_type: booking.pet_type.as_str().to_string(),
            owner_name: booking.owner_name.clone(),
            owner_phone: booking.owner_phone.clone(),
            check_in: booking.check_in.format("%Y-%m-%d").to_string(),
            check_out: booking.check_out.format("%Y-%m-%d").to_string(),
            notes: booking.notes.clone(),
            created_at: booking.created_at.to_rfc3339(),
        }
    }

    fn into_domain(self) -> Result<Booking> {
        let pet_type = match self.pet_type.as_str() {
            "cat" => PetType::Cat,
            "dog" => PetType::Dog,
            other => anyhow::bail!("Unknown pet type in stored booking: {}", other),
        };

        Ok(Booking {
            pet_type,
            check_in: chrono::NaiveDate::parse_from_str(&self.check_in, "%Y-%m-%d")
                .with_context(|| format!("Failed to parse check_in for booking {}", self.id))?,
            check_out: chrono::NaiveDate::parse_from_str(&self.check_out, "%Y-%m-%d")
                .with_context(|| format!("Failed to parse check_out for booking {}", self.id))?,
            created_at: chrono::DateTime::parse_from_rfc3339(&self.created_at)
                .with_context(|| format!("Failed to parse created_at for booking {}", self.id))?
                .with_timezone(&chrono::Utc),
            id: self.id,
            pet_name: self.pet_name,
            owner_name: self.owner_name,
            owner_phone: self.owner_phone,
            notes: self.notes,
        })
    }
}

/// JSON-backed booking repository holding the whole collection in one file
#[derive(Clone)]
pub struct BookingRepository {
    connection: Arc<JsonConnection>,
}

impl BookingRepository {
    /// Create a new JSON booking repository
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }
}

impl BookingStorage for BookingRepository {
    /// Load the persisted collection; a missing file means no bookings yet
    fn load_bookings(&self) -> Result<Vec<Booking>> {
        let path = self.connection.bookings_file_path();

        if !path.exists() {
            debug!("No booking file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let stored: Vec<JsonBooking> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        let bookings = stored
            .into_iter()
            .map(JsonBooking::into_domain)
            .collect::<Result<Vec<_>>>()?;

        debug!("Loaded {} bookings from {}", bookings.len(), path.display());
        Ok(bookings)
    }

    /// Persist the full collection with an atomic temp-file write
    fn save_bookings(&self, bookings: &[Booking]) -> Result<()> {
        let path = self.connection.bookings_file_path();
        let stored: Vec<JsonBooking> = bookings.iter().map(JsonBooking::from_domain).collect();
        let content = serde_json::to_string_pretty(&stored)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to move booking file into place at {}", path.display()))?;

        debug!("Saved {} bookings to {}", bookings.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use tempfile::TempDir;

    fn setup_test_repo() -> (BookingRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let repo = BookingRepository::new(Arc::new(connection));
        (repo, temp_dir)
    }

    fn sample_booking(pet_name: &str, notes: Option<&str>) -> Booking {
        Booking {
            id: Booking::generate_id(),
            pet_name: pet_name.to_string(),
            pet_type: PetType::Dog,
            owner_name: "Alex".to_string(),
            owner_phone: "555-0123".to_string(),
            check_in: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            notes: notes.map(|n| n.to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn load_from_empty_directory_returns_no_bookings() {
        let (repo, _temp_dir) = setup_test_repo();
        assert!(repo.load_bookings().unwrap().is_empty());
    }

    #[test]
    fn save_and_load_round_trips_calendar_dates() {
        let (repo, _temp_dir) = setup_test_repo();
        let bookings = vec![
            sample_booking("Rex", Some("allergic to chicken")),
            sample_booking("Buddy", None),
        ];

        repo.save_bookings(&bookings).unwrap();
        let loaded = repo.load_bookings().unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].pet_name, "Rex");
        assert_eq!(loaded[0].check_in, bookings[0].check_in);
        assert_eq!(loaded[0].check_out, bookings[0].check_out);
        assert_eq!(loaded[0].notes.as_deref(), Some("allergic to chicken"));
        assert_eq!(loaded[1].notes, None);
        // created_at survives at second precision through RFC 3339
        assert_eq!(
            loaded[0].created_at.timestamp(),
            bookings[0].created_at.timestamp()
        );
    }

    #[test]
    fn stay_boundaries_are_stored_as_date_only_strings() {
        let (repo, temp_dir) = setup_test_repo();
        repo.save_bookings(&[sample_booking("Rex", None)]).unwrap();

        let content = fs::read_to_string(temp_dir.path().join("bookings.json")).unwrap();
        assert!(content.contains("\"check_in\": \"2024-03-01\""));
        assert!(content.contains("\"check_out\": \"2024-03-05\""));
    }

    #[test]
    fn corrupt_file_is_an_error_not_a_panic() {
        let (repo, temp_dir) = setup_test_repo();
        fs::write(temp_dir.path().join("bookings.json"), "not json at all").unwrap();

        assert!(repo.load_bookings().is_err());
    }

    #[test]
    fn save_replaces_the_previous_collection() {
        let (repo, _temp_dir) = setup_test_repo();
        repo.save_bookings(&[sample_booking("Rex", None), sample_booking("Buddy", None)])
            .unwrap();
        repo.save_bookings(&[sample_booking("Luna", None)]).unwrap();

        let loaded = repo.load_bookings().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].pet_name, "Luna");
    }
}
