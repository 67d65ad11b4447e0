//! Request URL assembly for a matrix.
//!
//! Serializes configuration params plus the origins and destinations
//! lists into one GET URL, signing it when business credentials are set
//! and enforcing the API's URL size limit.

use crate::config::Configuration;
use crate::errors::Error;
use crate::matrix::Matrix;
use crate::places::Places;
use crate::polyline;
use crate::signing;

/// Host and path of the matrix endpoint, protocol excluded.
pub const BASE_URL: &str = "maps.googleapis.com/maps/api/distancematrix/json";

/// The API rejects URLs longer than this, before URL encoding of the
/// request as a whole.
pub const MAX_URL_SIZE: usize = 2048;

/// Escaped `|`, separating place tokens within one param value.
const DELIMITER: &str = "%7C";

/// Builds the request URL for one matrix.
///
/// Construction fails when the matrix does not hold at least one origin
/// and one destination; no partial URL is ever produced.
#[derive(Debug)]
pub struct UrlBuilder<'a> {
    matrix: &'a Matrix,
}

impl<'a> UrlBuilder<'a> {
    pub fn new(matrix: &'a Matrix) -> Result<Self, Error> {
        matrix.validate()?;
        Ok(Self { matrix })
    }

    /// The URL the API gets called with.
    ///
    /// Contains key and signature params when credentials are configured,
    /// so treat it as sensitive; log [`UrlBuilder::filtered_url`] instead.
    pub fn sensitive_url(&self) -> Result<String, Error> {
        let configuration = self.matrix.configuration();

        let mut url = format!(
            "{}://{}?{}",
            configuration.protocol,
            BASE_URL,
            self.query_params_string()
        );

        if let (Some(_), Some(private_key)) = (
            &configuration.google_business_api_client_id,
            &configuration.google_business_api_private_key,
        ) {
            url = signing::sign_url(&url, private_key)?;
        }

        if url.len() > MAX_URL_SIZE {
            return Err(Error::MatrixUrlTooLong {
                url,
                limit: MAX_URL_SIZE,
                http_status: None,
            });
        }

        Ok(url)
    }

    /// The request URL with sensitive param values masked, safe to log.
    pub fn filtered_url(&self) -> Result<String, Error> {
        let configuration = self.matrix.configuration();
        Ok(filter_url(
            &self.sensitive_url()?,
            &configuration.filter_parameters_in_logged_url,
        ))
    }

    fn query_params_string(&self) -> String {
        let configuration = self.matrix.configuration();

        let mut params = configuration.to_params();
        params.push((
            "origins",
            places_to_param(self.matrix.origins(), configuration),
        ));
        params.push((
            "destinations",
            places_to_param(self.matrix.destinations(), configuration),
        ));

        let params: Vec<String> = params
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        params.join("&")
    }
}

/// Serializes a places list to one `|`-delimited param value, preserving
/// list order. With encoded polylines enabled, contiguous runs of
/// coordinate places collapse into single `enc:...:` tokens; address
/// places break the run.
fn places_to_param(places: &Places, configuration: &Configuration) -> String {
    let mut out = Vec::new();
    let mut buffer = PolylineEncoderBuffer::new();

    for place in places {
        match place.lat_lng() {
            Some(pair) if configuration.use_encoded_polylines => buffer.push(pair),
            _ => {
                buffer.flush(&mut out);
                out.push(escape(&place.to_param(configuration.lat_lng_scale)));
            }
        }
    }
    buffer.flush(&mut out);

    out.join(DELIMITER)
}

/// Accumulates a contiguous run of coordinate places for one encoded
/// polyline token.
#[derive(Debug, Default)]
struct PolylineEncoderBuffer {
    buffer: Vec<(f64, f64)>,
}

impl PolylineEncoderBuffer {
    fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, lat_lng: (f64, f64)) {
        self.buffer.push(lat_lng);
    }

    /// Encodes and appends the buffered run as one token, then clears.
    /// Flushing an empty buffer appends nothing.
    fn flush(&mut self, out: &mut Vec<String>) {
        if self.buffer.is_empty() {
            return;
        }

        let encoded = polyline::encode(&self.buffer);
        out.push(escape(&format!("enc:{encoded}:")));
        self.buffer.clear();
    }
}

/// application/x-www-form-urlencoded escaping: space becomes `+`, all
/// bytes outside `A-Za-z0-9*-._` become `%XX`.
fn escape(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn filter_url(url: &str, filtered_params: &[String]) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let filtered: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if filtered_params.iter().any(|filtered| filtered == key) => {
                format!("{key}=[FILTERED]")
            }
            _ => pair.to_string(),
        })
        .collect();

    format!("{base}?{}", filtered.join("&"))
}
