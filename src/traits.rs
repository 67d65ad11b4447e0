//! Integration traits for the matrix client.
//!
//! These are intentionally minimal. Concrete apps implement them for their
//! own data models to build places without copying fields around, and to
//! swap the HTTP client out in tests.

use crate::client::MatrixResponse;
use crate::config::Configuration;
use crate::errors::Error;

/// A source object exposing a coordinate pair.
///
/// When a source offers both coordinates and an address, build the place
/// with [`crate::place::Place::from_coordinates`]; coordinates take
/// precedence over the address form.
pub trait HasCoordinates {
    /// Location as (lat, lng).
    fn coordinates(&self) -> (f64, f64);
}

impl HasCoordinates for (f64, f64) {
    fn coordinates(&self) -> (f64, f64) {
        *self
    }
}

/// A source object exposing a street address.
pub trait HasAddress {
    fn address(&self) -> &str;
}

/// Fetches a parsed matrix response for a prepared request URL.
///
/// [`crate::client::Client`] is the HTTP implementation; tests stub this
/// trait to feed canned responses through a matrix.
pub trait MatrixClient {
    fn get_matrix(&self, url: &str, configuration: &Configuration) -> Result<MatrixResponse, Error>;
}
