//! Zipcode resolution via the Zippopotam geocoding API.
//! Free, no API key required.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::LookupError;

// Zippopotam reports coordinates as strings, so the raw schema keeps them
// as strings and parsing happens after the first place is picked.
#[derive(Debug, Deserialize)]
struct ZipResponse {
    #[serde(default)]
    places: Vec<Place>,
}

#[derive(Debug, Deserialize)]
struct Place {
    #[serde(rename = "place name")]
    place_name: String,
    #[serde(rename = "state abbreviation")]
    state_abbreviation: String,
    latitude: String,
    longitude: String,
}

/// Coordinates and display name for a resolved zipcode. Used for one radius
/// query and discarded, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

pub async fn resolve_zipcode(
    client: &Client,
    base_url: &str,
    zipcode: &str,
) -> Result<ResolvedPlace, LookupError> {
    let url = format!("{base_url}/us/{zipcode}");
    debug!(url = %url, "resolving zipcode");

    let response = client.get(&url).send().await.map_err(LookupError::request)?;
    if !response.status().is_success() {
        return Err(LookupError::ZipcodeNotFound(zipcode.to_string()));
    }

    let body: ZipResponse = response.json().await.map_err(LookupError::request)?;
    let place = body
        .places
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::request("geocoding response listed no places"))?;

    let latitude = place.latitude.parse::<f64>().map_err(LookupError::request)?;
    let longitude = place.longitude.parse::<f64>().map_err(LookupError::request)?;

    Ok(ResolvedPlace {
        latitude,
        longitude,
        display_name: format!("{}, {}", place.place_name, place.state_abbreviation),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_zippopotam_place_schema() {
        let body = r#"{
            "post code": "83013",
            "country": "United States",
            "places": [{
                "place name": "Moran",
                "longitude": "-110.55",
                "state": "Wyoming",
                "state abbreviation": "WY",
                "latitude": "43.85"
            }]
        }"#;
        let parsed: ZipResponse = serde_json::from_str(body).unwrap();
        let place = &parsed.places[0];
        assert_eq!(place.place_name, "Moran");
        assert_eq!(place.state_abbreviation, "WY");
        assert_eq!(place.latitude.parse::<f64>().unwrap(), 43.85);
        assert_eq!(place.longitude.parse::<f64>().unwrap(), -110.55);
    }

    #[test]
    fn missing_places_list_parses_empty() {
        let parsed: ZipResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.places.is_empty());
    }
}
