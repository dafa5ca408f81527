//! # Backend Module for egui Frontend
//!
//! Direct, synchronous access to domain services and storage for the egui
//! frontend: no async runtime, no IO/REST layer, desktop-only operation.
//! The `Backend` is constructed once at startup and owned by the app; every
//! view reaches booking data through it rather than through process-wide
//! state.

use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

pub mod domain;
pub mod remote;
pub mod storage;

pub use storage::json::JsonConnection;

use remote::{RemoteConfig, RemoteInsertClient};

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub booking_service: domain::BookingService,
    /// None when the remote pathway is not configured in the environment
    pub remote_client: Option<RemoteInsertClient>,
}

impl Backend {
    /// Create a new backend instance with all services
    pub fn new() -> Result<Self> {
        let connection = Arc::new(JsonConnection::new_default()?);
        Self::with_connection(connection)
    }

    /// Create a backend over an explicit data directory connection
    pub fn with_connection(connection: Arc<JsonConnection>) -> Result<Self> {
        let booking_service = domain::BookingService::new(connection);

        // Sole client-construction site for the remote pathway
        let remote_client = match RemoteConfig::from_env() {
            Some(config) => match RemoteInsertClient::new(config) {
                Ok(client) => {
                    info!("Remote insert pathway configured");
                    Some(client)
                }
                Err(e) => {
                    warn!("Remote insert pathway disabled: {}", e);
                    None
                }
            },
            None => {
                info!("Remote insert pathway not configured");
                None
            }
        };

        Ok(Backend {
            booking_service,
            remote_client,
        })
    }
}
