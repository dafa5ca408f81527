//! # UI Components Module
//!
//! The boarding tracker's views and widgets:
//! - `header` - title band with view navigation
//! - `home_view` - dashboard: capacity, quick actions, today's/recent bookings
//! - `booking_form` - creation form plus the guided entry panel
//! - `booking_list` - search, filter chips, cards, delete confirmation
//! - `booking_card` / `capacity_card` - reusable cards
//! - `styling` / `ui_components` - theme and shared helpers

pub mod booking_card;
pub mod booking_form;
pub mod booking_list;
pub mod capacity_card;
pub mod header;
pub mod home_view;
pub mod styling;
pub mod ui_components;

pub use styling::setup_app_style;
