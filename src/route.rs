//! A single matrix element: the route from one origin to one destination.

use serde::Deserialize;

use crate::client::MatrixElement;
use crate::place::Place;

/// Per-element status reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteStatus {
    Ok,
    ZeroResults,
    NotFound,
}

/// Route data for one origin/destination pairing.
///
/// Distance and duration fields are populated only when the status is
/// [`RouteStatus::Ok`]; `duration_in_traffic_*` additionally requires the
/// matrix to have been requested with mode driving and a departure time.
#[derive(Debug, Clone)]
pub struct Route {
    pub origin: Place,
    pub destination: Place,
    pub status: RouteStatus,
    pub distance_text: Option<String>,
    pub distance_in_meters: Option<u64>,
    pub duration_text: Option<String>,
    pub duration_in_seconds: Option<u64>,
    pub duration_in_traffic_text: Option<String>,
    pub duration_in_traffic_in_seconds: Option<u64>,
}

impl Route {
    pub(crate) fn from_element(element: MatrixElement, origin: Place, destination: Place) -> Self {
        let mut route = Self {
            origin,
            destination,
            status: element.status,
            distance_text: None,
            distance_in_meters: None,
            duration_text: None,
            duration_in_seconds: None,
            duration_in_traffic_text: None,
            duration_in_traffic_in_seconds: None,
        };

        if route.status == RouteStatus::Ok {
            if let Some(distance) = element.distance {
                route.distance_text = Some(distance.text);
                route.distance_in_meters = Some(distance.value);
            }
            if let Some(duration) = element.duration {
                route.duration_text = Some(duration.text);
                route.duration_in_seconds = Some(duration.value);
            }
            if let Some(duration_in_traffic) = element.duration_in_traffic {
                route.duration_in_traffic_text = Some(duration_in_traffic.text);
                route.duration_in_traffic_in_seconds = Some(duration_in_traffic.value);
            }
        }

        route
    }

    pub fn is_ok(&self) -> bool {
        self.status == RouteStatus::Ok
    }
}
