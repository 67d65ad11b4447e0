//! Convenience lookups over a loaded matrix.

use crate::config::{Configuration, TravelMode};
use crate::errors::Error;
use crate::place::Place;
use crate::places::Places;
use crate::route::Route;

/// Borrow-based view answering route queries against the loaded grid.
///
/// Plain lookups skip non-OK routes when picking shortest routes; the
/// `_strict` variants instead fail with [`Error::InvalidRoute`] as soon
/// as any candidate route is non-OK.
#[derive(Debug)]
pub struct RoutesFinder<'a> {
    origins: &'a Places,
    destinations: &'a Places,
    configuration: &'a Configuration,
    data: &'a [Vec<Route>],
}

impl<'a> RoutesFinder<'a> {
    pub(crate) fn new(
        origins: &'a Places,
        destinations: &'a Places,
        configuration: &'a Configuration,
        data: &'a [Vec<Route>],
    ) -> Self {
        Self {
            origins,
            destinations,
            configuration,
            data,
        }
    }

    /// All routes touching the given place: the row when it is an origin,
    /// the column when it is a destination.
    pub fn routes_for(&self, place: &Place) -> Result<Vec<&'a Route>, Error> {
        if let Some(row) = self.origins.position(place) {
            Ok(self.data[row].iter().collect())
        } else if let Some(column) = self.destinations.position(place) {
            Ok(self.data.iter().map(|row| &row[column]).collect())
        } else {
            Err(Error::PlaceNotInMatrix)
        }
    }

    /// As [`RoutesFinder::routes_for`], failing if any route is non-OK.
    pub fn routes_for_strict(&self, place: &Place) -> Result<Vec<&'a Route>, Error> {
        let routes = self.routes_for(place)?;
        ensure_all_ok(&routes)?;
        Ok(routes)
    }

    /// The route for one origin/destination pairing.
    pub fn route_for(&self, origin: &Place, destination: &Place) -> Result<&'a Route, Error> {
        let row = self
            .origins
            .position(origin)
            .ok_or(Error::PlaceNotInMatrix)?;
        let column = self
            .destinations
            .position(destination)
            .ok_or(Error::PlaceNotInMatrix)?;

        Ok(&self.data[row][column])
    }

    /// As [`RoutesFinder::route_for`], failing if the route is non-OK.
    pub fn route_for_strict(&self, origin: &Place, destination: &Place) -> Result<&'a Route, Error> {
        let route = self.route_for(origin, destination)?;
        ensure_all_ok(&[route])?;
        Ok(route)
    }

    /// Shortest OK route to or from the given place by distance, `None`
    /// when no route is OK.
    pub fn shortest_route_by_distance_to(
        &self,
        place: &Place,
    ) -> Result<Option<&'a Route>, Error> {
        let routes = self.routes_for(place)?;
        Ok(shortest_by(&routes, |route| route.distance_in_meters))
    }

    pub fn shortest_route_by_distance_to_strict(
        &self,
        place: &Place,
    ) -> Result<Option<&'a Route>, Error> {
        let routes = self.routes_for_strict(place)?;
        Ok(shortest_by(&routes, |route| route.distance_in_meters))
    }

    /// Shortest OK route to or from the given place by duration.
    pub fn shortest_route_by_duration_to(
        &self,
        place: &Place,
    ) -> Result<Option<&'a Route>, Error> {
        let routes = self.routes_for(place)?;
        Ok(shortest_by(&routes, |route| route.duration_in_seconds))
    }

    pub fn shortest_route_by_duration_to_strict(
        &self,
        place: &Place,
    ) -> Result<Option<&'a Route>, Error> {
        let routes = self.routes_for_strict(place)?;
        Ok(shortest_by(&routes, |route| route.duration_in_seconds))
    }

    /// Shortest OK route by duration in traffic. The matrix must have been
    /// requested with mode driving and a departure time for the API to
    /// provide traffic durations.
    pub fn shortest_route_by_duration_in_traffic_to(
        &self,
        place: &Place,
    ) -> Result<Option<&'a Route>, Error> {
        self.ensure_driving_and_departure_time()?;
        let routes = self.routes_for(place)?;
        Ok(shortest_by(&routes, |route| {
            route.duration_in_traffic_in_seconds
        }))
    }

    pub fn shortest_route_by_duration_in_traffic_to_strict(
        &self,
        place: &Place,
    ) -> Result<Option<&'a Route>, Error> {
        self.ensure_driving_and_departure_time()?;
        let routes = self.routes_for_strict(place)?;
        Ok(shortest_by(&routes, |route| {
            route.duration_in_traffic_in_seconds
        }))
    }

    fn ensure_driving_and_departure_time(&self) -> Result<(), Error> {
        if self.configuration.mode == TravelMode::Driving
            && self.configuration.departure_time.is_some()
        {
            return Ok(());
        }

        Err(Error::InvalidQuery(
            "matrix must be in mode driving with a departure_time set".to_string(),
        ))
    }
}

fn shortest_by<'a>(
    routes: &[&'a Route],
    measure: impl Fn(&Route) -> Option<u64>,
) -> Option<&'a Route> {
    routes
        .iter()
        .filter(|route| route.is_ok())
        .min_by_key(|route| measure(route).unwrap_or(u64::MAX))
        .copied()
}

fn ensure_all_ok(routes: &[&Route]) -> Result<(), Error> {
    for route in routes {
        if !route.is_ok() {
            return Err(Error::InvalidRoute {
                origin: route.origin.to_string(),
                destination: route.destination.to_string(),
            });
        }
    }

    Ok(())
}
