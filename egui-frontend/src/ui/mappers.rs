use shared::*;

use crate::backend::domain::booking_queries::FilterCategory;
use crate::backend::domain::models::booking;

/// Convert a domain booking to the shared DTO rendered by the views
pub fn booking_to_dto(domain: &booking::Booking) -> Booking {
    Booking {
        id: domain.id.clone(),
        pet_name: domain.pet_name.clone(),
        pet_type: pet_type_to_dto(domain.pet_type),
        owner_name: domain.owner_name.clone(),
        owner_phone: domain.owner_phone.clone(),
        check_in: domain.check_in,
        check_out: domain.check_out,
        notes: domain.notes.clone(),
        created_at: domain.created_at.to_rfc3339(),
    }
}

pub fn pet_type_to_dto(pet_type: booking::PetType) -> PetType {
    match pet_type {
        booking::PetType::Cat => PetType::Cat,
        booking::PetType::Dog => PetType::Dog,
    }
}

pub fn pet_type_to_domain(pet_type: PetType) -> booking::PetType {
    match pet_type {
        PetType::Cat => booking::PetType::Cat,
        PetType::Dog => booking::PetType::Dog,
    }
}

pub fn capacity_to_dto(count: booking::CapacityCount) -> CapacityCount {
    CapacityCount {
        cat: count.cat,
        dog: count.dog,
    }
}

/// Map a list-view filter chip to the domain filter category
pub fn category_to_filter(category: BookingCategory) -> FilterCategory {
    match category {
        BookingCategory::All => FilterCategory::All,
        BookingCategory::Active => FilterCategory::Active,
        BookingCategory::Upcoming => FilterCategory::Upcoming,
        BookingCategory::Cat => FilterCategory::Cat,
        BookingCategory::Dog => FilterCategory::Dog,
    }
}
