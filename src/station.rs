//! Latest-observation queries against the Synoptic Data API.
//!
//! One request builder serves both lookup paths: a radius search for the
//! nearest reporting station, or a direct query by station identifier. The
//! response shape is identical either way.

use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::LookupError;

/// Synoptic variable key carrying the latest air temperature, in Celsius.
const AIR_TEMP_KEY: &str = "air_temp_value_1";
/// SUMMARY.RESPONSE_CODE value the service uses for a successful query.
const SUMMARY_OK: i64 = 1;

#[derive(Debug, Clone, PartialEq)]
pub enum StationQuery {
    /// Nearest station reporting air temperature within the radius.
    ByCoordinates {
        latitude: f64,
        longitude: f64,
        radius_miles: u32,
    },
    /// A specific station's latest observation.
    ByIdentifier(String),
}

impl StationQuery {
    fn params(&self, token: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("token", token.to_string()),
            ("vars", "air_temp".to_string()),
        ];
        match self {
            StationQuery::ByCoordinates {
                latitude,
                longitude,
                radius_miles,
            } => {
                params.push(("radius", format!("{latitude},{longitude},{radius_miles}")));
                params.push(("limit", "1".to_string()));
            }
            StationQuery::ByIdentifier(id) => params.push(("stid", id.clone())),
        }
        params
    }

    // Name used in not-found and no-data errors. The lookup chain re-tags
    // coordinate-path errors with the zipcode the user actually typed.
    fn subject(&self) -> String {
        match self {
            StationQuery::ByCoordinates {
                latitude, longitude, ..
            } => format!("{latitude},{longitude}"),
            StationQuery::ByIdentifier(id) => id.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    #[serde(rename = "SUMMARY")]
    summary: Summary,
    #[serde(rename = "STATION", default)]
    stations: Vec<Station>,
}

#[derive(Debug, Deserialize)]
struct Summary {
    #[serde(rename = "RESPONSE_CODE")]
    response_code: i64,
}

#[derive(Debug, Deserialize)]
struct Station {
    #[serde(rename = "NAME", default)]
    name: String,
    #[serde(rename = "OBSERVATIONS", default)]
    observations: HashMap<String, VariableValue>,
}

#[derive(Debug, Deserialize)]
struct VariableValue {
    value: f64,
}

/// Raw reading from the matched station, before any rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct StationReading {
    pub celsius_raw: f64,
    pub station_name: String,
}

pub async fn latest_temperature(
    client: &Client,
    base_url: &str,
    token: &str,
    query: &StationQuery,
) -> Result<StationReading, LookupError> {
    let url = format!("{base_url}/stations/latest");
    debug!(query = ?query, "fetching latest station observation");

    let response = client
        .get(&url)
        .query(&query.params(token))
        .send()
        .await
        .map_err(LookupError::request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::BadStatus(status.as_u16()));
    }

    let body: LatestResponse = response.json().await.map_err(LookupError::request)?;
    if body.summary.response_code != SUMMARY_OK {
        return Err(LookupError::StationNotFound(query.subject()));
    }

    let station = body
        .stations
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::StationNotFound(query.subject()))?;

    let celsius_raw = station
        .observations
        .get(AIR_TEMP_KEY)
        .map(|reading| reading.value)
        .ok_or_else(|| LookupError::NoTemperatureData(query.subject()))?;

    Ok(StationReading {
        celsius_raw,
        station_name: station.name,
    })
}
