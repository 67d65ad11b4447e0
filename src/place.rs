//! Geocoded places, addressed either by street address or coordinate pair.

use std::fmt;

use crate::errors::Error;
use crate::traits::{HasAddress, HasCoordinates};

#[derive(Debug, Clone, PartialEq)]
enum Location {
    Address(String),
    LatLng { lat: f64, lng: f64 },
}

/// One endpoint of the matrix: a street address, or a lat/lng pair.
///
/// Exactly one of the two forms exists per place. Two places are equal when
/// they carry the same address, or the same coordinate pair; the two forms
/// never compare equal to each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    location: Location,
}

/// Loose attribute bag for [`Place::new`], mirroring input coming from
/// deserialized or user-assembled data where any field may be missing.
#[derive(Debug, Clone, Default)]
pub struct PlaceAttributes {
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Place {
    /// Builds a place from loose attributes.
    ///
    /// Fails when neither an address nor a full coordinate pair is present,
    /// and when an address and coordinates are given at the same time. A
    /// blank address counts as absent.
    pub fn new(attributes: PlaceAttributes) -> Result<Self, Error> {
        let address = attributes
            .address
            .filter(|address| !address.trim().is_empty());
        let coordinates = attributes.lat.zip(attributes.lng);

        match (address, coordinates) {
            (Some(_), Some(_)) => Err(Error::ConflictingPlaceAttributes),
            (Some(address), None) => Ok(Self {
                location: Location::Address(address),
            }),
            (None, Some((lat, lng))) => Ok(Self {
                location: Location::LatLng { lat, lng },
            }),
            (None, None) => Err(Error::MissingPlaceAttributes),
        }
    }

    /// Builds a coordinate place from any source exposing coordinates.
    pub fn from_coordinates<T: HasCoordinates>(source: &T) -> Self {
        let (lat, lng) = source.coordinates();
        Self {
            location: Location::LatLng { lat, lng },
        }
    }

    /// Builds an address place from any source exposing an address.
    pub fn from_address<T: HasAddress>(source: &T) -> Self {
        Self {
            location: Location::Address(source.address().to_string()),
        }
    }

    /// The coordinate pair, when this is a coordinate place.
    pub fn lat_lng(&self) -> Option<(f64, f64)> {
        match self.location {
            Location::LatLng { lat, lng } => Some((lat, lng)),
            Location::Address(_) => None,
        }
    }

    /// The street address, when this is an address place.
    pub fn street_address(&self) -> Option<&str> {
        match &self.location {
            Location::Address(address) => Some(address),
            Location::LatLng { .. } => None,
        }
    }

    /// URL parameter fragment for this place, unescaped.
    ///
    /// Addresses are returned verbatim. Coordinates are rendered as
    /// `"lat,lng"`, rounded to `lat_lng_scale` decimals, with trailing
    /// zeros trimmed so whole numbers come out without a decimal point.
    pub fn to_param(&self, lat_lng_scale: usize) -> String {
        match &self.location {
            Location::Address(address) => address.clone(),
            Location::LatLng { lat, lng } => format!(
                "{},{}",
                format_coordinate(*lat, lat_lng_scale),
                format_coordinate(*lng, lat_lng_scale)
            ),
        }
    }
}

fn format_coordinate(value: f64, scale: usize) -> String {
    let formatted = format!("{value:.scale$}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Location::Address(address) => write!(f, "{address}"),
            Location::LatLng { lat, lng } => write!(f, "{lat},{lng}"),
        }
    }
}

impl From<&str> for Place {
    fn from(address: &str) -> Self {
        Self {
            location: Location::Address(address.to_string()),
        }
    }
}

impl From<String> for Place {
    fn from(address: String) -> Self {
        Self {
            location: Location::Address(address),
        }
    }
}

impl From<(f64, f64)> for Place {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self {
            location: Location::LatLng { lat, lng },
        }
    }
}
