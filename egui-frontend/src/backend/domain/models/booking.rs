use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain model representing one pet's reservation.
///
/// A booking is created only through the booking service, is never mutated
/// after creation, and is destroyed only by a delete-by-id. Stay boundaries
/// are calendar dates; time-of-day never participates in occupancy logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub pet_name: String,
    pub pet_type: PetType,
    pub owner_name: String,
    pub owner_phone: String,
    /// First day of the stay (inclusive)
    pub check_in: NaiveDate,
    /// Departure day (exclusive: no space is occupied on this day)
    pub check_out: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Generate a unique ID for a booking
    pub fn generate_id() -> String {
        format!("booking::{}", Uuid::new_v4())
    }

    /// Whether the stay occupies a space on `date`.
    ///
    /// Check-in day counts, check-out day does not: a pet departing on day D
    /// has already freed its space on D.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.check_in <= date && date < self.check_out
    }

    /// Whether the stay has not started yet as of `today`
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.check_in > today
    }
}

/// Kind of pet accepted by the facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Cat,
    Dog,
}

impl PetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Cat => "cat",
            PetType::Dog => "dog",
        }
    }
}

/// Occupied spaces per pet type on a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapacityCount {
    pub cat: u32,
    pub dog: u32,
}
