//! # Collaborator Services
//!
//! Traits for the two outbound calls the share flow makes: the address
//! lookup and the availability insert. Concrete adapters live in the api
//! (geocoding) and db (persistence) crates.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use tracing::warn;

use crate::{
    errors::{ShareError, ShareResult},
    models::{
        location::{Address, VerifiedLocation, format_location},
        post::{CreateAvailabilityResponse, NewAvailabilityPost},
    },
};

/// Address components checked, in order, for the neighborhood label.
/// Mid-sized areas come first.
pub const NEIGHBORHOOD_FIELDS: [&str; 10] = [
    "suburb",
    "city_district",
    "borough",
    "quarter",
    "ward",
    "district",
    "neighborhood",
    "neighbourhood",
    "locality",
    "residential",
];

/// Address components checked, in order, for the city label.
pub const CITY_FIELDS: [&str; 5] = ["city", "town", "village", "municipality", "hamlet"];

/// Best match returned by a geocoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeMatch {
    pub lat: f64,
    pub lng: f64,
    /// Raw address breakdown keyed by component name.
    #[serde(default)]
    pub address: HashMap<String, String>,
}

impl GeocodeMatch {
    fn first_of(&self, fields: &[&str]) -> &str {
        fields
            .iter()
            .filter_map(|field| self.address.get(*field))
            .map(String::as_str)
            .find(|value| !value.trim().is_empty())
            .unwrap_or("")
    }

    pub fn neighborhood(&self) -> &str {
        self.first_of(&NEIGHBORHOOD_FIELDS)
    }

    pub fn city(&self) -> &str {
        self.first_of(&CITY_FIELDS)
    }

    pub fn state(&self) -> &str {
        self.first_of(&["state"])
    }

    pub fn to_verified_location(&self) -> VerifiedLocation {
        let formatted = format_location(self.neighborhood(), self.city(), self.state());
        VerifiedLocation {
            lat: self.lat,
            lng: self.lng,
            neighborhood: formatted.neighborhood,
            city: formatted.city,
            state: formatted.state,
        }
    }
}

/// Free-text address search.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Returns the best match, `Ok(None)` when nothing matched, or
    /// `ShareError::Geocoding` when the lookup itself failed.
    async fn search(&self, query: &str) -> ShareResult<Option<GeocodeMatch>>;
}

/// Turns a raw lookup outcome into a verified location or the message
/// shown to the user.
pub fn resolve_lookup(outcome: ShareResult<Option<GeocodeMatch>>) -> ShareResult<VerifiedLocation> {
    match outcome {
        Ok(Some(found)) => Ok(found.to_verified_location()),
        Ok(None) => Err(ShareError::NotFound(
            "Address not found. Please check your address details.".to_string(),
        )),
        Err(err) => {
            warn!(error = %err, "address lookup failed");
            Err(ShareError::Geocoding(
                "Failed to verify address. Please try again.".to_string(),
            ))
        }
    }
}

/// Checks that the address is complete, looks it up and resolves the result.
pub async fn lookup_address<G>(geocoder: &G, address: &Address) -> ShareResult<VerifiedLocation>
where
    G: Geocoder + ?Sized,
{
    if !address.is_complete() {
        return Err(ShareError::Validation(
            "Please fill in all address fields".to_string(),
        ));
    }

    resolve_lookup(geocoder.search(&address.search_query()).await)
}

/// Write side of the `availability` collection.
#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    async fn insert(&self, post: &NewAvailabilityPost) -> ShareResult<CreateAvailabilityResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn place(components: &[(&str, &str)]) -> GeocodeMatch {
        GeocodeMatch {
            lat: 40.0,
            lng: -73.0,
            address: components
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn neighborhood_prefers_earlier_fields() {
        let found = place(&[
            ("neighbourhood", "Dumbo"),
            ("borough", "Brooklyn"),
            ("city", "New York"),
            ("state", "New York"),
        ]);
        assert_eq!(found.neighborhood(), "Brooklyn");
        assert_eq!(found.city(), "New York");
    }

    #[test]
    fn city_falls_back_to_town_and_skips_blanks() {
        let found = place(&[("city", " "), ("town", "Hood River")]);
        assert_eq!(found.city(), "Hood River");
        assert_eq!(found.neighborhood(), "");
        assert_eq!(found.state(), "");
    }

    #[test]
    fn resolve_lookup_maps_miss_and_failure_to_user_messages() {
        let miss = resolve_lookup(Ok(None)).unwrap_err();
        let failure =
            resolve_lookup(Err(ShareError::Geocoding("timed out".to_string()))).unwrap_err();

        assert_eq!(
            miss.user_message(),
            "Address not found. Please check your address details."
        );
        assert_eq!(
            failure.user_message(),
            "Failed to verify address. Please try again."
        );
    }

    #[test]
    fn verified_location_is_formatted() {
        let found = place(&[("suburb", "  Upper   West Side"), ("city", "New York")]);
        let verified = found.to_verified_location();
        assert_eq!(verified.neighborhood, "Upper West Side");
        assert_eq!(verified.lat, 40.0);
    }
}
