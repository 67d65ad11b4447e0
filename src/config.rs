//! Request configuration: API parameters, credentials and URL options.

use std::fmt;
use std::time::Duration;

/// Default number of decimals kept for lat/lng values in URLs.
pub const DEFAULT_LAT_LNG_SCALE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Avoid {
    Tolls,
    Highways,
    Ferries,
    Indoor,
}

impl fmt::Display for Avoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Avoid::Tolls => "tolls",
            Avoid::Highways => "highways",
            Avoid::Ferries => "ferries",
            Avoid::Indoor => "indoor",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        })
    }
}

/// Departure moment for transit and traffic-aware queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartureTime {
    Now,
    /// Unix timestamp, seconds.
    At(i64),
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepartureTime::Now => f.write_str("now"),
            DepartureTime::At(timestamp) => write!(f, "{timestamp}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitMode {
    Bus,
    Subway,
    Train,
    Tram,
    Rail,
}

impl fmt::Display for TransitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransitMode::Bus => "bus",
            TransitMode::Subway => "subway",
            TransitMode::Train => "train",
            TransitMode::Tram => "tram",
            TransitMode::Rail => "rail",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitRoutingPreference {
    LessWalking,
    FewerTransfers,
}

impl fmt::Display for TransitRoutingPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransitRoutingPreference::LessWalking => "less_walking",
            TransitRoutingPreference::FewerTransfers => "fewer_transfers",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficModel {
    BestGuess,
    Pessimistic,
    Optimistic,
}

impl fmt::Display for TrafficModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TrafficModel::BestGuess => "best_guess",
            TrafficModel::Pessimistic => "pessimistic",
            TrafficModel::Optimistic => "optimistic",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        })
    }
}

/// Configuration for one matrix request.
///
/// Values matching the API's own defaults (driving, metric, best_guess) are
/// left out of the URL. The typed fields make an invalid configuration
/// unrepresentable, so there is no separate validation pass.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub mode: TravelMode,
    pub avoid: Option<Avoid>,
    pub units: Units,
    /// Language code for textual results, e.g. "no" or "zh-TW".
    pub language: Option<String>,
    pub departure_time: Option<DepartureTime>,
    /// Unix timestamp, seconds. Transit only.
    pub arrival_time: Option<i64>,
    pub transit_mode: Option<TransitMode>,
    pub transit_routing_preference: Option<TransitRoutingPreference>,
    pub traffic_model: TrafficModel,
    pub protocol: Protocol,
    /// Decimals kept when rendering lat/lng in URLs. Lower it to save URL
    /// characters.
    pub lat_lng_scale: usize,
    /// Collapse contiguous coordinate runs into `enc:...:` polyline tokens,
    /// shortening URLs with many coordinate places considerably.
    pub use_encoded_polylines: bool,
    pub google_api_key: Option<String>,
    pub google_business_api_client_id: Option<String>,
    /// URL-safe base64 signing key for business accounts.
    pub google_business_api_private_key: Option<String>,
    pub timeout: Option<Duration>,
    /// Query params masked as `[FILTERED]` in loggable URLs.
    pub filter_parameters_in_logged_url: Vec<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            mode: TravelMode::Driving,
            avoid: None,
            units: Units::Metric,
            language: None,
            departure_time: None,
            arrival_time: None,
            transit_mode: None,
            transit_routing_preference: None,
            traffic_model: TrafficModel::BestGuess,
            protocol: Protocol::Https,
            lat_lng_scale: DEFAULT_LAT_LNG_SCALE,
            use_encoded_polylines: false,
            google_api_key: None,
            google_business_api_client_id: None,
            google_business_api_private_key: None,
            timeout: None,
            filter_parameters_in_logged_url: vec!["key".to_string(), "signature".to_string()],
        }
    }
}

impl Configuration {
    /// Scalar query params in a stable order, with unset options and
    /// API defaults left out. Credentials come last: `client`, then `key`.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if self.mode != TravelMode::Driving {
            params.push(("mode", self.mode.to_string()));
        }
        if let Some(avoid) = self.avoid {
            params.push(("avoid", avoid.to_string()));
        }
        if self.units != Units::Metric {
            params.push(("units", self.units.to_string()));
        }
        if let Some(language) = &self.language {
            params.push(("language", language.clone()));
        }
        if let Some(departure_time) = self.departure_time {
            params.push(("departure_time", departure_time.to_string()));
        }
        if let Some(arrival_time) = self.arrival_time {
            params.push(("arrival_time", arrival_time.to_string()));
        }
        if let Some(transit_mode) = self.transit_mode {
            params.push(("transit_mode", transit_mode.to_string()));
        }
        if let Some(preference) = self.transit_routing_preference {
            params.push(("transit_routing_preference", preference.to_string()));
        }
        if self.traffic_model != TrafficModel::BestGuess {
            params.push(("traffic_model", self.traffic_model.to_string()));
        }

        if let Some(client_id) = &self.google_business_api_client_id {
            params.push(("client", client_id.clone()));
        }
        if let Some(key) = &self.google_api_key {
            params.push(("key", key.clone()));
        }

        params
    }
}
