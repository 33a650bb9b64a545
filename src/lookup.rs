//! Input classification and the zipcode/station lookup chain.

use std::time::Duration;

use reqwest::Client;
use tracing::warn;

use crate::config::AppConfig;
use crate::error::LookupError;
use crate::geocode;
use crate::station::{self, StationQuery, StationReading};

/// Result of one successful lookup, the unit handed to the display layer.
/// No lifecycle beyond a single request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub celsius: i32,
    pub fahrenheit: i32,
    pub location: String,
    pub identifier: String,
}

impl Observation {
    /// Rounds the raw Celsius reading, then derives Fahrenheit from the
    /// already-rounded value. The intermediate rounding is intentional,
    /// preserved behavior.
    pub fn from_reading(celsius_raw: f64, location: String, identifier: String) -> Self {
        let celsius = celsius_raw.round() as i32;
        Self {
            celsius,
            fahrenheit: fahrenheit_from(celsius),
            location,
            identifier,
        }
    }
}

/// True iff the input is exactly five ASCII decimal digits. Anything else is
/// treated as a station identifier.
pub fn is_zipcode(input: &str) -> bool {
    input.len() == 5 && input.bytes().all(|b| b.is_ascii_digit())
}

pub fn fahrenheit_from(celsius: i32) -> i32 {
    (f64::from(celsius) * 9.0 / 5.0 + 32.0).round() as i32
}

/// Owns the HTTP client and configuration for both external services.
/// Constructed once at startup, shared by every update action.
#[derive(Debug)]
pub struct Lookup {
    client: Client,
    config: AppConfig,
}

impl Lookup {
    pub fn new(config: AppConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(LookupError::request)?;
        Ok(Self { client, config })
    }

    /// Runs one lookup for the given user input, zipcode or station id.
    pub async fn observation(&self, input: &str) -> Result<Observation, LookupError> {
        let input = input.trim().to_uppercase();
        let result = if is_zipcode(&input) {
            self.by_zipcode(&input).await
        } else {
            self.by_station(&input).await
        };
        if let Err(err) = &result {
            warn!(input = %input, error = %err, "lookup failed");
        }
        result
    }

    async fn by_zipcode(&self, zipcode: &str) -> Result<Observation, LookupError> {
        let place =
            geocode::resolve_zipcode(&self.client, &self.config.geocode_base_url, zipcode).await?;
        let query = StationQuery::ByCoordinates {
            latitude: place.latitude,
            longitude: place.longitude,
            radius_miles: self.config.radius_miles,
        };
        // Station errors on this path should name the zipcode, not the
        // coordinates the user never typed.
        let reading = self.latest(&query).await.map_err(|err| match err {
            LookupError::StationNotFound(_) => LookupError::StationNotFound(zipcode.to_string()),
            LookupError::NoTemperatureData(_) => {
                LookupError::NoTemperatureData(zipcode.to_string())
            }
            other => other,
        })?;
        Ok(Observation::from_reading(
            reading.celsius_raw,
            place.display_name,
            zipcode.to_string(),
        ))
    }

    async fn by_station(&self, station_id: &str) -> Result<Observation, LookupError> {
        let query = StationQuery::ByIdentifier(station_id.to_string());
        let reading = self.latest(&query).await?;
        Ok(Observation::from_reading(
            reading.celsius_raw,
            reading.station_name,
            station_id.to_string(),
        ))
    }

    async fn latest(&self, query: &StationQuery) -> Result<StationReading, LookupError> {
        station::latest_temperature(
            &self.client,
            &self.config.synoptic_base_url,
            &self.config.synoptic_token,
            query,
        )
        .await
    }
}
