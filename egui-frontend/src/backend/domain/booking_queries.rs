//! Search and filter pipeline for the booking list view.
//!
//! Pure functions over the store's collection; nothing here is stored state.

use chrono::NaiveDate;

use crate::backend::domain::models::booking::{Booking, PetType};

/// Category filter applied by the list view's chips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCategory {
    All,
    /// Stay covers today (check-in inclusive, check-out exclusive)
    Active,
    /// Check-in strictly after today
    Upcoming,
    Cat,
    Dog,
}

/// Apply text search and category filter, then sort by check-in descending.
///
/// Search is a case-insensitive substring match against pet name, owner name
/// and pet type; it composes with the category filter as a logical AND. Ties
/// in the sort keep their relative store order.
pub fn filter_bookings(
    bookings: &[Booking],
    query: &str,
    category: FilterCategory,
    today: NaiveDate,
) -> Vec<Booking> {
    let mut filtered: Vec<Booking> = bookings
        .iter()
        .filter(|b| matches_query(b, query))
        .filter(|b| matches_category(b, category, today))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| b.check_in.cmp(&a.check_in));
    filtered
}

fn matches_query(booking: &Booking, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    booking.pet_name.to_lowercase().contains(&needle)
        || booking.owner_name.to_lowercase().contains(&needle)
        || booking.pet_type.as_str().contains(&needle)
}

fn matches_category(booking: &Booking, category: FilterCategory, today: NaiveDate) -> bool {
    match category {
        FilterCategory::All => true,
        FilterCategory::Active => booking.covers(today),
        FilterCategory::Upcoming => booking.is_upcoming(today),
        FilterCategory::Cat => booking.pet_type == PetType::Cat,
        FilterCategory::Dog => booking.pet_type == PetType::Dog,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn booking(pet_name: &str, owner_name: &str, pet_type: PetType, check_in: NaiveDate) -> Booking {
        Booking {
            id: Booking::generate_id(),
            pet_name: pet_name.to_string(),
            pet_type,
            owner_name: owner_name.to_string(),
            owner_phone: "555-0142".to_string(),
            check_in,
            check_out: check_in + chrono::Duration::days(3),
            notes: None,
            created_at: Utc::now(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn search_matches_pet_owner_and_type_case_insensitively() {
        let bookings = vec![
            booking("Fluffy", "Morgan", PetType::Cat, date(2024, 1, 10)),
            booking("Rex", "Fluffington", PetType::Dog, date(2024, 1, 11)),
            booking("Luna", "Casey", PetType::Dog, date(2024, 1, 12)),
        ];
        let today = date(2024, 1, 1);

        let by_pet = filter_bookings(&bookings, "FLUFFY", FilterCategory::All, today);
        assert_eq!(by_pet.len(), 1);
        assert_eq!(by_pet[0].pet_name, "Fluffy");

        let by_owner = filter_bookings(&bookings, "fluffington", FilterCategory::All, today);
        assert_eq!(by_owner.len(), 1);
        assert_eq!(by_owner[0].pet_name, "Rex");

        let by_type = filter_bookings(&bookings, "dog", FilterCategory::All, today);
        assert_eq!(by_type.len(), 2);
    }

    #[test]
    fn search_and_category_compose_as_logical_and() {
        let bookings = vec![
            booking("Fluffy", "Morgan", PetType::Cat, date(2024, 1, 10)),
            booking("Fluffy Jr", "Morgan", PetType::Dog, date(2024, 1, 11)),
            booking("Rex", "Casey", PetType::Cat, date(2024, 1, 12)),
        ];

        let result = filter_bookings(&bookings, "fluffy", FilterCategory::Cat, date(2024, 1, 1));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].pet_name, "Fluffy");
        assert_eq!(result[0].pet_type, PetType::Cat);
    }

    #[test]
    fn active_uses_the_occupancy_rule_and_upcoming_is_strict() {
        let today = date(2024, 3, 10);
        let bookings = vec![
            // Covers today
            booking("Here", "A", PetType::Cat, date(2024, 3, 9)),
            // Checks out today: no longer active
            booking("Gone", "B", PetType::Cat, date(2024, 3, 7)),
            // Checks in today: active, not upcoming
            booking("Arriving", "C", PetType::Dog, today),
            // Checks in tomorrow: upcoming only
            booking("Later", "D", PetType::Dog, date(2024, 3, 11)),
        ];

        let active: Vec<_> = filter_bookings(&bookings, "", FilterCategory::Active, today)
            .into_iter()
            .map(|b| b.pet_name)
            .collect();
        assert_eq!(active, ["Arriving", "Here"]);

        let upcoming: Vec<_> = filter_bookings(&bookings, "", FilterCategory::Upcoming, today)
            .into_iter()
            .map(|b| b.pet_name)
            .collect();
        assert_eq!(upcoming, ["Later"]);
    }

    #[test]
    fn results_sort_by_check_in_descending() {
        let bookings = vec![
            booking("January", "A", PetType::Cat, date(2024, 1, 1)),
            booking("March", "B", PetType::Dog, date(2024, 3, 1)),
            booking("February", "C", PetType::Cat, date(2024, 2, 1)),
        ];

        let sorted: Vec<_> = filter_bookings(&bookings, "", FilterCategory::All, date(2024, 1, 1))
            .into_iter()
            .map(|b| b.check_in)
            .collect();

        assert_eq!(sorted, [date(2024, 3, 1), date(2024, 2, 1), date(2024, 1, 1)]);
    }
}
