//! # Domain Module
//!
//! Business logic for the boarding tracker. Operates independently of the UI
//! framework and of the storage mechanism underneath the repository trait.
//!
//! - **booking_service**: the booking store: collection ownership,
//!   persistence, capacity and dashboard queries
//! - **booking_queries**: search/filter pipeline for the list view
//! - **guided_entry**: scripted question-and-answer entry feeding the remote
//!   insert pathway
//! - **commands**: command/result types consumed by the services
//! - **models**: domain entities

pub mod booking_queries;
pub mod booking_service;
pub mod commands;
pub mod guided_entry;
pub mod models;

pub use booking_service::BookingService;
