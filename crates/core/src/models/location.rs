use serde::{Deserialize, Serialize};

use crate::errors::{ShareError, ShareResult};

/// A postal address typed in for a custom meeting location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Address {
    /// All four fields are filled in (ignoring surrounding whitespace).
    pub fn is_complete(&self) -> bool {
        [&self.address, &self.city, &self.state, &self.zip_code]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Free-text query sent to the geocoder.
    pub fn search_query(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.zip_code
        )
    }
}

/// Coordinates and area labels resolved for a custom address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedLocation {
    pub lat: f64,
    pub lng: f64,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedLocation {
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

/// Normalizes area labels for display: trims each part and collapses
/// internal runs of whitespace.
pub fn format_location(neighborhood: &str, city: &str, state: &str) -> FormattedLocation {
    FormattedLocation {
        neighborhood: format_location_part(neighborhood),
        city: format_location_part(city),
        state: format_location_part(state),
    }
}

pub fn format_location_part(part: &str) -> String {
    part.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Where the post should be shown, as chosen on the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LocationChoice {
    Profile {
        display_lat: Option<f64>,
        display_lng: Option<f64>,
        city: Option<String>,
    },
    Custom {
        address: Address,
        verified: Option<VerifiedLocation>,
    },
}

/// Location columns written with an availability post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    pub use_profile_location: bool,
    pub custom_location_address: Option<String>,
    pub custom_location_neighborhood: Option<String>,
    pub custom_location_city: Option<String>,
    pub custom_location_state: Option<String>,
    pub custom_location_zip_code: Option<String>,
    pub custom_location_lat: Option<f64>,
    pub custom_location_lng: Option<f64>,
    pub display_lat: Option<f64>,
    pub display_lng: Option<f64>,
    pub city_label: Option<String>,
}

impl LocationChoice {
    /// Resolves the choice into persisted location columns.
    ///
    /// A custom location must have a complete address and a successful
    /// verification.
    pub fn to_location_data(&self) -> ShareResult<LocationData> {
        match self {
            LocationChoice::Profile {
                display_lat,
                display_lng,
                city,
            } => Ok(LocationData {
                use_profile_location: true,
                display_lat: *display_lat,
                display_lng: *display_lng,
                city_label: non_blank(city.as_deref()).map(format_location_part),
                ..LocationData::default()
            }),
            LocationChoice::Custom { address, verified } => {
                if !address.is_complete() {
                    return Err(ShareError::Validation(
                        "Please fill in all address fields for the custom location.".to_string(),
                    ));
                }
                let verified = verified.as_ref().ok_or_else(|| {
                    ShareError::Validation(
                        "Please verify the custom address to get the neighborhood information."
                            .to_string(),
                    )
                })?;

                Ok(LocationData {
                    use_profile_location: false,
                    custom_location_address: Some(address.address.clone()),
                    custom_location_neighborhood: Some(verified.neighborhood.clone()),
                    custom_location_city: Some(verified.city.clone()),
                    custom_location_state: Some(verified.state.clone()),
                    custom_location_zip_code: Some(address.zip_code.clone()),
                    custom_location_lat: Some(verified.lat),
                    custom_location_lng: Some(verified.lng),
                    display_lat: Some(verified.lat),
                    display_lng: Some(verified.lng),
                    city_label: non_blank(Some(&verified.city)).map(format_location_part),
                })
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
