//! # Nominatim Geocoder
//!
//! `Geocoder` implementation backed by the OpenStreetMap Nominatim search
//! endpoint. One GET per lookup, no retries; the best (first) result wins.

use async_trait::async_trait;
use eyre::{Result, WrapErr};
use pawsync_core::{
    errors::{ShareError, ShareResult},
    services::{GeocodeMatch, Geocoder},
};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

/// One entry of a Nominatim `format=json&addressdetails=1` response.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub address: HashMap<String, serde_json::Value>,
}

impl NominatimPlace {
    /// Nominatim returns coordinates as strings; non-string address
    /// components are skipped.
    pub fn into_match(self) -> ShareResult<GeocodeMatch> {
        let coordinate = |value: &str| {
            value.trim().parse::<f64>().map_err(|_| {
                ShareError::Geocoding(format!("Invalid coordinate in geocoder response: {}", value))
            })
        };

        Ok(GeocodeMatch {
            lat: coordinate(&self.lat)?,
            lng: coordinate(&self.lon)?,
            address: self
                .address
                .into_iter()
                .filter_map(|(key, value)| value.as_str().map(|v| (key, v.to_string())))
                .collect(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .wrap_err("Failed to build geocoder HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn search(&self, query: &str) -> ShareResult<Option<GeocodeMatch>> {
        let lookup_failed = |e: reqwest::Error| ShareError::Geocoding(e.to_string());

        debug!(query, "searching address");
        let places: Vec<NominatimPlace> = self
            .client
            .get(self.search_url())
            .query(&[
                ("format", "json"),
                ("q", query),
                ("limit", "1"),
                ("addressdetails", "1"),
            ])
            .send()
            .await
            .map_err(lookup_failed)?
            .error_for_status()
            .map_err(lookup_failed)?
            .json()
            .await
            .map_err(lookup_failed)?;

        places.into_iter().next().map(NominatimPlace::into_match).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_with_string_coordinates() {
        let places: Vec<NominatimPlace> = serde_json::from_value(serde_json::json!([{
            "lat": "45.5231",
            "lon": "-122.6765",
            "display_name": "Portland, Oregon",
            "address": {
                "suburb": "Pearl District",
                "city": "Portland",
                "state": "Oregon",
                "postcode": "97209",
                "country_code": "us"
            }
        }]))
        .unwrap();

        let found = places.into_iter().next().unwrap().into_match().unwrap();

        assert_eq!(found.lat, 45.5231);
        assert_eq!(found.lng, -122.6765);
        assert_eq!(found.neighborhood(), "Pearl District");
        assert_eq!(found.state(), "Oregon");
    }

    #[test]
    fn test_bad_coordinate_is_a_geocoding_error() {
        let place = NominatimPlace {
            lat: "north".to_string(),
            lon: "0".to_string(),
            address: HashMap::new(),
        };

        assert!(matches!(place.into_match(), Err(ShareError::Geocoding(_))));
    }

    #[test]
    fn test_search_url_trims_trailing_slash() {
        let geocoder = NominatimGeocoder::new("http://localhost:8080/", "test").unwrap();
        assert_eq!(geocoder.search_url(), "http://localhost:8080/search");
    }
}
