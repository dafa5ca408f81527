//! # Storage Traits
//!
//! This module defines the storage abstraction trait that allows different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use crate::backend::domain::models::booking::Booking;

/// Trait defining the interface for booking persistence
///
/// The booking collection is persisted as one unit: every mutation rewrites
/// the whole list, and startup reads it back in one piece. There is no
/// incremental diffing and no partial-failure handling beyond the caller
/// logging the error.
///
/// Note: all operations are synchronous for the desktop-only egui app
pub trait BookingStorage: Send + Sync {
    /// Load the full persisted collection, in insertion order.
    /// A missing file is an empty collection, not an error.
    fn load_bookings(&self) -> Result<Vec<Booking>>;

    /// Persist the full collection, replacing whatever was stored before
    fn save_bookings(&self, bookings: &[Booking]) -> Result<()>;
}
