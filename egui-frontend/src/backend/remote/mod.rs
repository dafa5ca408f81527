//! # Remote Insert Pathway
//!
//! Fire-and-forget insert of a booking payload into a remote table. Not read
//! back into the local store: no retry, no idempotency key, no
//! reconciliation. There is exactly one client-construction site (the
//! `Backend` constructor) and one configuration surface (`RemoteConfig`).

pub mod insert_client;

pub use insert_client::{BookingPayload, RemoteConfig, RemoteInsertClient, RemoteInsertError};
