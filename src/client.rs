//! HTTP adapter for the distance matrix API.

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::config::Configuration;
use crate::errors::Error;
use crate::route::RouteStatus;
use crate::traits::MatrixClient;
use crate::url_builder::MAX_URL_SIZE;

/// Top-level API statuses where the request, not the server, is at fault.
const CLIENT_ERROR_STATUSES: [&str; 5] = [
    "INVALID_REQUEST",
    "MAX_ELEMENTS_EXCEEDED",
    "OVER_QUERY_LIMIT",
    "REQUEST_DENIED",
    "UNKNOWN_ERROR",
];

#[derive(Debug, Deserialize)]
pub struct MatrixResponse {
    pub status: String,
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
pub struct MatrixRow {
    pub elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
pub struct MatrixElement {
    pub status: RouteStatus,
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
    pub duration_in_traffic: Option<TextValue>,
}

/// Human-readable text plus the numeric value, as the API renders both.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: u64,
}

/// Blocking HTTP client for matrix requests.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
}

impl Client {
    pub fn new() -> Result<Self, Error> {
        let http = reqwest::blocking::Client::builder().build()?;
        Ok(Self { http })
    }
}

impl MatrixClient for Client {
    fn get_matrix(&self, url: &str, configuration: &Configuration) -> Result<MatrixResponse, Error> {
        let mut request = self.http.get(url);
        if let Some(timeout) = configuration.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send()?;
        let http_status = response.status();
        debug!(http_status = %http_status, "matrix response received");

        if http_status == StatusCode::URI_TOO_LONG {
            return Err(Error::MatrixUrlTooLong {
                url: url.to_string(),
                limit: MAX_URL_SIZE,
                http_status: Some(http_status),
            });
        }
        if http_status.is_client_error() {
            return Err(Error::Client {
                http_status,
                api_status: None,
            });
        }
        if !http_status.is_success() {
            return Err(Error::Server { http_status });
        }

        check_api_status(response.json()?, http_status)
    }
}

/// A 200 response can still carry an API-level client error in its status
/// field; surface those instead of returning an empty grid.
fn check_api_status(
    response: MatrixResponse,
    http_status: StatusCode,
) -> Result<MatrixResponse, Error> {
    if CLIENT_ERROR_STATUSES.contains(&response.status.as_str()) {
        return Err(Error::Client {
            http_status,
            api_status: Some(response.status),
        });
    }

    Ok(response)
}
