use log::{error, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::domain::models::booking::Booking;

const BOOKINGS_TABLE: &str = "bookings";

/// Remote insert client errors
#[derive(Debug, Error)]
pub enum RemoteInsertError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Remote table rejected the insert
    #[error("Insert rejected ({0}): {1}")]
    Api(u16, String),
}

/// Configuration for the remote insert pathway: endpoint plus key,
/// read once at startup and injected into the single client.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub endpoint_url: String,
    pub api_key: String,
}

impl RemoteConfig {
    /// Read the endpoint and key from the environment.
    /// Returns None when either is unset; the pathway is then disabled.
    pub fn from_env() -> Option<Self> {
        let endpoint_url = std::env::var("BOARDING_REMOTE_URL").ok()?;
        let api_key = std::env::var("BOARDING_REMOTE_API_KEY").ok()?;
        Some(Self {
            endpoint_url,
            api_key,
        })
    }
}

/// Wire shape for the remote bookings table. Field names are the remote
/// schema's, not the domain model's; `from_booking` is the mapping layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPayload {
    pub pet_name: String,
    pub owner_name: String,
    pub owner_phone: String,
    /// ISO date string, maps from `check_in`
    pub start_date: String,
    /// ISO date string, maps from `check_out`
    pub end_date: String,
    pub pet_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_notes: Option<String>,
}

impl BookingPayload {
    /// Map a domain booking onto the remote table's column names
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            pet_name: booking.pet_name.clone(),
            owner_name: booking.owner_name.clone(),
            owner_phone: booking.owner_phone.clone(),
            start_date: booking.check_in.format("%Y-%m-%d").to_string(),
            end_date: booking.check_out.format("%Y-%m-%d").to_string(),
            pet_type: booking.pet_type.as_str().to_string(),
            special_notes: booking.notes.clone(),
        }
    }
}

/// Client for the remote bookings table
pub struct RemoteInsertClient {
    http_client: reqwest::blocking::Client,
    config: RemoteConfig,
}

impl RemoteInsertClient {
    /// Create the remote insert client
    pub fn new(config: RemoteConfig) -> Result<Self, RemoteInsertError> {
        let http_client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| RemoteInsertError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Insert one booking payload into the remote table.
    ///
    /// Blocks the calling flow until the request resolves. Failures are
    /// logged and returned for the UI to surface; they are never retried.
    pub fn insert_booking(&self, payload: &BookingPayload) -> Result<(), RemoteInsertError> {
        let url = format!(
            "{}/rest/v1/{}",
            self.config.endpoint_url.trim_end_matches('/'),
            BOOKINGS_TABLE
        );

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .json(&[payload])
            .send()
            .map_err(|e| {
                error!("Remote booking insert failed to send: {}", e);
                RemoteInsertError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            error!("Remote booking insert rejected ({}): {}", status, body);
            return Err(RemoteInsertError::Api(status.as_u16(), body));
        }

        info!("Inserted booking for {} into remote table", payload.pet_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::booking::PetType;
    use chrono::{NaiveDate, Utc};

    fn sample_booking(notes: Option<&str>) -> Booking {
        Booking {
            id: Booking::generate_id(),
            pet_name: "Whiskers".to_string(),
            pet_type: PetType::Cat,
            owner_name: "Dana".to_string(),
            owner_phone: "555-0101".to_string(),
            check_in: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            notes: notes.map(|n| n.to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn payload_maps_domain_fields_to_remote_column_names() {
        let payload = BookingPayload::from_booking(&sample_booking(Some("two meals a day")));

        assert_eq!(payload.pet_name, "Whiskers");
        assert_eq!(payload.start_date, "2024-03-01");
        assert_eq!(payload.end_date, "2024-03-05");
        assert_eq!(payload.pet_type, "cat");
        assert_eq!(payload.special_notes.as_deref(), Some("two meals a day"));
    }

    #[test]
    fn payload_serializes_snake_case_and_omits_absent_notes() {
        let value = serde_json::to_value(BookingPayload::from_booking(&sample_booking(None))).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("owner_phone"));
        assert!(object.contains_key("start_date"));
        assert!(object.contains_key("end_date"));
        assert!(!object.contains_key("special_notes"));
        assert!(!object.contains_key("check_in"));
    }

    #[test]
    fn client_builds_from_config() {
        let client = RemoteInsertClient::new(RemoteConfig {
            endpoint_url: "https://example.supabase.co".to_string(),
            api_key: "anon-key".to_string(),
        });
        assert!(client.is_ok());
    }
}
