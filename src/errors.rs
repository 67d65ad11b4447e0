//! Error types for matrix construction, URL building and API requests.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Place construction was given neither an address nor a full
    /// coordinate pair.
    #[error("must provide an address, or both lat and lng")]
    MissingPlaceAttributes,

    /// Place construction was given an address and a coordinate pair at
    /// the same time.
    #[error("cannot provide an address together with lat and lng")]
    ConflictingPlaceAttributes,

    /// The matrix failed its own validation; the reasons are listed.
    #[error("invalid matrix: {0}")]
    InvalidMatrix(String),

    /// The assembled request URL exceeded the API's size limit. Reduce the
    /// number of places, lower `lat_lng_scale` or enable
    /// `use_encoded_polylines` instead of retrying.
    #[error("matrix URL is {} characters long, above the limit of {limit}", .url.len())]
    MatrixUrlTooLong {
        url: String,
        limit: usize,
        http_status: Option<StatusCode>,
    },

    /// URL signing failed, typically because the private key is not valid
    /// URL-safe base64.
    #[error("could not sign URL: {0}")]
    Signing(String),

    /// The HTTP request itself failed (connection, timeout, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API rejected the request: an HTTP 4xx, or a 2xx carrying one of
    /// the API's client error statuses.
    #[error("client error (http status {http_status}, api status {api_status:?})")]
    Client {
        http_status: StatusCode,
        api_status: Option<String>,
    },

    /// The API failed to answer: HTTP 5xx or another non-success response.
    #[error("server error (http status {http_status})")]
    Server { http_status: StatusCode },

    /// The response parsed, but did not line up with the requested matrix.
    #[error("unexpected API response: {0}")]
    UnexpectedResponse(String),

    /// Route lookups need the matrix data to be loaded first.
    #[error("matrix data has not been loaded")]
    MatrixNotLoaded,

    /// The given place is neither an origin nor a destination of the matrix.
    #[error("given place is not an origin nor a destination")]
    PlaceNotInMatrix,

    /// A strict route lookup found a route the API answered with a non-OK
    /// status.
    #[error("API did not provide a complete answer for route from {origin} to {destination}")]
    InvalidRoute { origin: String, destination: String },

    /// The matrix configuration does not support the requested lookup.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}
