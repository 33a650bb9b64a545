//! Runtime configuration for the widget.
//!
//! The Synoptic access token comes from the `SYNOPTIC_TOKEN` environment
//! variable; everything else has fixed defaults. Base URLs are plain fields
//! so tests can point the lookup at a mock server.

use std::env;

const SYNOPTIC_BASE_URL: &str = "https://api.synopticdata.com/v2";
const GEOCODE_BASE_URL: &str = "https://api.zippopotam.us";
const REQUEST_TIMEOUT_SECS: u64 = 5;
const SEARCH_RADIUS_MILES: u32 = 50;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Synoptic Data access token. An invalid or empty token is not checked
    /// up front; the service rejects the request and the error path reports it.
    pub synoptic_token: String,
    pub synoptic_base_url: String,
    pub geocode_base_url: String,
    pub timeout_secs: u64,
    /// Search radius for the nearest-station query on the zipcode path.
    pub radius_miles: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            synoptic_token: String::new(),
            synoptic_base_url: SYNOPTIC_BASE_URL.to_string(),
            geocode_base_url: GEOCODE_BASE_URL.to_string(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
            radius_miles: SEARCH_RADIUS_MILES,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            synoptic_token: env::var("SYNOPTIC_TOKEN").unwrap_or_default(),
            ..Self::default()
        }
    }
}
