//! URL construction tests
//!
//! Covers param ordering, escaping, coordinate rounding, encoded polyline
//! run-splitting, the URL size limit and request signing.

use distance_matrix::config::{Configuration, Protocol, TravelMode, Units};
use distance_matrix::errors::Error;
use distance_matrix::matrix::Matrix;
use distance_matrix::place::Place;
use distance_matrix::places::Places;
use distance_matrix::url_builder::{BASE_URL, MAX_URL_SIZE, UrlBuilder};

// ============================================================================
// Helpers
// ============================================================================

fn matrix(origins: Vec<Place>, destinations: Vec<Place>) -> Matrix {
    Matrix::new(Places::from(origins), Places::from(destinations))
}

fn default_matrix() -> Matrix {
    matrix(
        vec![
            Place::from("Karl Johans gate, Oslo"),
            Place::from("Askerveien 1"),
        ],
        vec![Place::from((1.0, 11.0)), Place::from((2.0, 22.0))],
    )
}

fn param_value(url: &str, key: &str) -> String {
    let (_, query) = url.split_once('?').expect("url should have a query");
    query
        .split('&')
        .find_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            (k == key).then(|| v.to_string())
        })
        .unwrap_or_else(|| panic!("missing param {key} in {url}"))
}

fn tokens(url: &str, key: &str) -> Vec<String> {
    param_value(url, key)
        .split("%7C")
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Basic URL shape
// ============================================================================

#[test]
fn test_url_starts_with_protocol_and_base_url() {
    let url = default_matrix().sensitive_url().unwrap();
    assert!(url.starts_with(&format!("https://{BASE_URL}?")));
}

#[test]
fn test_protocol_is_configurable() {
    let mut matrix = default_matrix();
    matrix.configure(|configuration| configuration.protocol = Protocol::Http);

    assert!(matrix.sensitive_url().unwrap().starts_with("http://"));
}

#[test]
fn test_default_configuration_adds_no_scalar_params() {
    let url = default_matrix().sensitive_url().unwrap();

    assert_eq!(
        url,
        format!(
            "https://{BASE_URL}?origins=Karl+Johans+gate%2C+Oslo%7CAskerveien+1\
             &destinations=1%2C11%7C2%2C22"
        )
    );
}

#[test]
fn test_configuration_params_precede_places() {
    let mut matrix = default_matrix();
    matrix.configure(|configuration| {
        configuration.mode = TravelMode::Walking;
        configuration.units = Units::Imperial;
    });

    let url = matrix.sensitive_url().unwrap();
    let query = url.split_once('?').unwrap().1;

    assert!(query.starts_with("mode=walking&units=imperial&origins="));
}

// ============================================================================
// Place tokens
// ============================================================================

#[test]
fn test_origins_and_destinations_keep_input_order_and_count() {
    let matrix = matrix(
        vec![
            Place::from("A"),
            Place::from("B"),
            Place::from((1.0, 2.0)),
        ],
        vec![Place::from("C"), Place::from((3.0, 4.0))],
    );

    let url = matrix.sensitive_url().unwrap();

    assert_eq!(tokens(&url, "origins"), ["A", "B", "1%2C2"]);
    assert_eq!(tokens(&url, "destinations"), ["C", "3%2C4"]);
}

#[test]
fn test_coordinates_are_rounded_to_lat_lng_scale() {
    let mut matrix = matrix(
        vec![Place::from("A")],
        vec![Place::from((10.123456789, 10.987654321))],
    );
    matrix.configure(|configuration| configuration.lat_lng_scale = 5);

    let url = matrix.sensitive_url().unwrap();
    assert_eq!(param_value(&url, "destinations"), "10.12346%2C10.98765");
}

#[test]
fn test_address_tokens_are_escaped() {
    let url = default_matrix().sensitive_url().unwrap();

    assert_eq!(
        tokens(&url, "origins"),
        ["Karl+Johans+gate%2C+Oslo", "Askerveien+1"]
    );
}

// ============================================================================
// Encoded polylines
// ============================================================================

#[test]
fn test_contiguous_coordinate_run_collapses_to_one_token() {
    let mut matrix = matrix(
        vec![Place::from("A")],
        vec![Place::from((1.0, 11.0)), Place::from((2.0, 22.0))],
    );
    matrix.configure(|configuration| configuration.use_encoded_polylines = true);

    let url = matrix.sensitive_url().unwrap();
    assert_eq!(
        param_value(&url, "destinations"),
        "enc%3A_ibE_mcbA_ibE_mcbA%3A"
    );
}

#[test]
fn test_addresses_split_coordinate_runs() {
    // A, C, C, A, C: two coordinate runs around an interrupting address.
    let mut matrix = matrix(
        vec![
            Place::from("A1"),
            Place::from((45.0, 11.0)),
            Place::from((45.1, 11.1)),
            Place::from("A2"),
            Place::from((45.2, 11.2)),
        ],
        vec![Place::from("B")],
    );
    matrix.configure(|configuration| configuration.use_encoded_polylines = true);

    let url = matrix.sensitive_url().unwrap();
    assert_eq!(
        tokens(&url, "origins"),
        [
            "A1",
            "enc%3A_atqG_mcbA_pR_pR%3A",
            "A2",
            "enc%3A_c%7BrG_ojcA%3A"
        ]
    );
}

#[test]
fn test_encoding_disabled_keeps_plain_coordinate_tokens() {
    let matrix = matrix(
        vec![Place::from((1.0, 11.0)), Place::from((2.0, 22.0))],
        vec![Place::from("B")],
    );

    let url = matrix.sensitive_url().unwrap();
    assert_eq!(tokens(&url, "origins"), ["1%2C11", "2%2C22"]);
}

// ============================================================================
// Validation and size limit
// ============================================================================

#[test]
fn test_empty_origins_is_an_invalid_matrix() {
    let matrix = matrix(vec![], vec![Place::from("B")]);

    assert!(matches!(
        UrlBuilder::new(&matrix),
        Err(Error::InvalidMatrix(_))
    ));
}

#[test]
fn test_empty_destinations_is_an_invalid_matrix() {
    let matrix = matrix(vec![Place::from("A")], vec![]);

    assert!(matches!(
        matrix.sensitive_url(),
        Err(Error::InvalidMatrix(_))
    ));
}

#[test]
fn test_url_above_size_limit_fails() {
    let matrix = matrix(
        vec![Place::from("a".repeat(1500).as_str())],
        vec![Place::from("b".repeat(1500).as_str())],
    );

    match matrix.sensitive_url() {
        Err(Error::MatrixUrlTooLong { url, limit, .. }) => {
            assert!(url.len() > MAX_URL_SIZE);
            assert_eq!(limit, MAX_URL_SIZE);
        }
        other => panic!("expected MatrixUrlTooLong, got {other:?}"),
    }
}

#[test]
fn test_url_within_size_limit_succeeds() {
    let url = default_matrix().sensitive_url().unwrap();
    assert!(url.len() <= MAX_URL_SIZE);
}

// ============================================================================
// Credentials, signing and filtering
// ============================================================================

#[test]
fn test_api_key_is_included() {
    let mut matrix = default_matrix();
    matrix.configure(|configuration| {
        configuration.google_api_key = Some("api-key".to_string());
    });

    let url = matrix.sensitive_url().unwrap();
    assert_eq!(param_value(&url, "key"), "api-key");
}

#[test]
fn test_business_credentials_sign_the_url() {
    let mut matrix = matrix(vec![Place::from("A")], vec![Place::from("B")]);
    matrix.configure(|configuration| {
        configuration.google_business_api_client_id = Some("clientID".to_string());
        configuration.google_business_api_private_key =
            Some("vNIXE0xscrmjlyV-12Nj_BvUPaw=".to_string());
    });

    assert_eq!(
        matrix.sensitive_url().unwrap(),
        format!(
            "https://{BASE_URL}?client=clientID&origins=A&destinations=B\
             &signature=GaT4LYmy4kHaFgDViNzRIM60b2M="
        )
    );
}

#[test]
fn test_client_id_alone_does_not_sign() {
    let mut matrix = default_matrix();
    matrix.configure(|configuration| {
        configuration.google_business_api_client_id = Some("clientID".to_string());
    });

    let url = matrix.sensitive_url().unwrap();
    assert!(!url.contains("signature="));
}

#[test]
fn test_filtered_url_masks_key_and_signature() {
    let mut matrix = default_matrix();
    matrix.configure(|configuration| {
        configuration.google_api_key = Some("api-key".to_string());
        configuration.google_business_api_client_id = Some("clientID".to_string());
        configuration.google_business_api_private_key =
            Some("vNIXE0xscrmjlyV-12Nj_BvUPaw=".to_string());
    });

    let filtered = matrix.filtered_url().unwrap();

    assert_eq!(param_value(&filtered, "key"), "[FILTERED]");
    assert_eq!(param_value(&filtered, "signature"), "[FILTERED]");
    assert_eq!(param_value(&filtered, "client"), "clientID");
    assert!(filtered.contains("origins=Karl+Johans+gate%2C+Oslo"));
}
