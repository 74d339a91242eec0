use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude, positive north.
    pub latitude: f64,
    /// Longitude, positive east.
    pub longitude: f64,
}

/// The user's active location selection.
///
/// Exactly one variant is active at a time. A spec is created or replaced
/// wholesale by explicit user action and never mutated afterward.
/// `Automatic` always carries device coordinates; `Manual` may or may not
/// resolve to coordinates through the static table in
/// [`crate::service::geo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LocationSpec {
    /// Device-resolved position with reverse-geocoded display names.
    Automatic {
        /// Device latitude.
        latitude: f64,
        /// Device longitude.
        longitude: f64,
        /// City name shown to the user.
        display_city: String,
        /// Country name shown to the user.
        display_country: String,
    },
    /// A user-picked region, optionally narrowed to a subregion.
    Manual {
        /// Province/region name. May be a composite
        /// `"Region - Subregion"` string from legacy pickers; see
        /// [`crate::service::geo::split_region`].
        region: String,
        /// District/subregion name, when picked separately.
        subregion: Option<String>,
        /// Country name.
        country: String,
    },
}

impl LocationSpec {
    /// Stable cache partition key for this spec.
    ///
    /// Automatic locations round coordinates to two decimals (~1 km) so
    /// small GPS drift keeps hitting the same cache partition; manual
    /// locations key on their names.
    pub fn location_key(&self) -> String {
        match self {
            Self::Automatic {
                latitude,
                longitude,
                ..
            } => format!("geo:{latitude:.2}:{longitude:.2}"),
            Self::Manual {
                region,
                subregion,
                country,
            } => match subregion {
                Some(subregion) => format!("place:{country}:{region}:{subregion}"),
                None => format!("place:{country}:{region}"),
            },
        }
    }

    /// City-level display name.
    pub fn display_city(&self) -> &str {
        match self {
            Self::Automatic { display_city, .. } => display_city,
            Self::Manual { region, .. } => region,
        }
    }

    /// Country-level display name.
    pub fn display_country(&self) -> &str {
        match self {
            Self::Automatic {
                display_country, ..
            } => display_country,
            Self::Manual { country, .. } => country,
        }
    }
}
