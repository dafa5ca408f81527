use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Booking ID in format: "booking::<uuid-v4>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    /// Name of the pet staying at the facility
    pub pet_name: String,
    /// Kind of pet, drives capacity bucketing and card styling
    pub pet_type: PetType,
    pub owner_name: String,
    pub owner_phone: String,
    /// First day of the stay (inclusive)
    pub check_in: NaiveDate,
    /// Departure day (the pet does not occupy a space on this day)
    pub check_out: NaiveDate,
    /// Optional care instructions shown on the booking card
    pub notes: Option<String>,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl Booking {
    /// Human-readable stay period, e.g. "Mar 1, 2024 → Mar 5, 2024"
    pub fn stay_period(&self) -> String {
        format!(
            "{} → {}",
            self.check_in.format("%b %-d, %Y"),
            self.check_out.format("%b %-d, %Y")
        )
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

    /// Capitalized form for badges and selectors
    pub fn label(&self) -> &'static str {
        match self {
            PetType::Cat => "Cat",
            PetType::Dog => "Dog",
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Occupied spaces per pet type on a given date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CapacityCount {
    pub cat: u32,
    pub dog: u32,
}

/// Filter chips available on the booking list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingCategory {
    All,
    Active,
    Upcoming,
    Cat,
    Dog,
}

impl BookingCategory {
    /// Chip order as rendered on the list view
    pub const ALL: [BookingCategory; 5] = [
        BookingCategory::All,
        BookingCategory::Active,
        BookingCategory::Upcoming,
        BookingCategory::Cat,
        BookingCategory::Dog,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BookingCategory::All => "All",
            BookingCategory::Active => "Active",
            BookingCategory::Upcoming => "Upcoming",
            BookingCategory::Cat => "Cats",
            BookingCategory::Dog => "Dogs",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PetType::Cat).unwrap(), "\"cat\"");
        assert_eq!(serde_json::to_string(&PetType::Dog).unwrap(), "\"dog\"");

        let parsed: PetType = serde_json::from_str("\"dog\"").unwrap();
        assert_eq!(parsed, PetType::Dog);
    }

    #[test]
    fn stay_period_formats_calendar_dates() {
        let booking = Booking {
            id: "booking::test".to_string(),
            pet_name: "Whiskers".to_string(),
            pet_type: PetType::Cat,
            owner_name: "Dana".to_string(),
            owner_phone: "555-0101".to_string(),
            check_in: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            notes: None,
            created_at: "2024-02-20T10:00:00Z".to_string(),
        };

        assert_eq!(booking.stay_period(), "Mar 1, 2024 → Mar 5, 2024");
    }
}
