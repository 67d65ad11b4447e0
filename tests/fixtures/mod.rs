//! Test fixtures for distance-matrix.
//!
//! Canned API bodies plus a stub client implementing the `MatrixClient`
//! trait, so matrix loading is tested without any HTTP.

use std::cell::RefCell;

use distance_matrix::client::MatrixResponse;
use distance_matrix::config::Configuration;
use distance_matrix::errors::Error;
use distance_matrix::traits::MatrixClient;

/// Serves a fixed response body and records every requested URL.
pub struct StubClient {
    body: String,
    pub requested_urls: RefCell<Vec<String>>,
}

impl StubClient {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            requested_urls: RefCell::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requested_urls.borrow().len()
    }
}

impl MatrixClient for StubClient {
    fn get_matrix(&self, url: &str, _configuration: &Configuration) -> Result<MatrixResponse, Error> {
        self.requested_urls.borrow_mut().push(url.to_string());
        serde_json::from_str(&self.body)
            .map_err(|error| Error::UnexpectedResponse(error.to_string()))
    }
}

/// 2×2 grid. Row order matches origins, element order matches
/// destinations. The last element is ZERO_RESULTS.
pub const TWO_BY_TWO_BODY: &str = r#"{
    "status": "OK",
    "rows": [
        {
            "elements": [
                {
                    "status": "OK",
                    "distance": {"text": "2.0 km", "value": 2000},
                    "duration": {"text": "5 mins", "value": 300},
                    "duration_in_traffic": {"text": "6 mins", "value": 360}
                },
                {
                    "status": "OK",
                    "distance": {"text": "5.0 km", "value": 5000},
                    "duration": {"text": "8 mins", "value": 500},
                    "duration_in_traffic": {"text": "12 mins", "value": 720}
                }
            ]
        },
        {
            "elements": [
                {
                    "status": "OK",
                    "distance": {"text": "3.0 km", "value": 3000},
                    "duration": {"text": "2 mins", "value": 100},
                    "duration_in_traffic": {"text": "2 mins", "value": 90}
                },
                {"status": "ZERO_RESULTS"}
            ]
        }
    ]
}"#;

/// One row only; mismatches any matrix with two origins.
pub const SINGLE_ROW_BODY: &str = r#"{
    "status": "OK",
    "rows": [
        {
            "elements": [
                {
                    "status": "OK",
                    "distance": {"text": "2.0 km", "value": 2000},
                    "duration": {"text": "5 mins", "value": 300}
                }
            ]
        }
    ]
}"#;
