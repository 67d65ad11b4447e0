//! distance-matrix: client for the Google Distance Matrix API.
//!
//! Builds size-bounded request URLs for an origins × destinations grid,
//! optionally compressing coordinate runs with the Encoded Polyline
//! Algorithm Format and signing URLs for business accounts, then loads
//! the grid of route results over HTTP.

pub mod client;
pub mod config;
pub mod errors;
pub mod matrix;
pub mod place;
pub mod places;
pub mod polyline;
pub mod route;
pub mod routes_finder;
mod signing;
pub mod traits;
pub mod url_builder;
