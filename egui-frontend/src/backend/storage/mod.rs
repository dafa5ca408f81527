//! # Storage Module
//!
//! Persistence layer for the boarding tracker. The domain layer talks to the
//! `BookingStorage` trait; the JSON implementation underneath keeps the whole
//! collection in one file in the local data directory.

pub mod json;
pub mod traits;

pub use traits::BookingStorage;
