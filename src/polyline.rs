//! Encoded Polyline Algorithm Format encoder.
//!
//! Compresses a sequence of lat/lng pairs into the compact ASCII form
//! used in request URLs. Points are rounded to a precision factor and
//! delta-encoded against the previous point, and each delta is packed
//! into 5-bit chunks mapped to the printable range 63..=126. Encode-only;
//! responses never carry polylines back.

use std::cell::OnceCell;

/// Default rounding factor, giving five decimals of coordinate precision.
pub const DEFAULT_PRECISION: f64 = 1e5;

/// Encodes a set of lat/lng pairs with the default precision.
///
/// ```
/// let encoded = distance_matrix::polyline::encode(&[(38.5, -120.2)]);
/// assert_eq!(encoded, "_p~iF~ps|U");
/// ```
pub fn encode(pairs: &[(f64, f64)]) -> String {
    PolylineEncoder::new(pairs.to_vec()).encode().to_string()
}

/// Encoder for one coordinate sequence.
///
/// The encoded string is computed once and memoized; repeated `encode`
/// calls return the same slice without recomputation. The cell is not
/// `Sync`, so an encoder instance must stay on one thread.
#[derive(Debug)]
pub struct PolylineEncoder {
    pairs: Vec<(f64, f64)>,
    precision: f64,
    encoded: OnceCell<String>,
}

impl PolylineEncoder {
    pub fn new(pairs: Vec<(f64, f64)>) -> Self {
        Self::with_precision(pairs, DEFAULT_PRECISION)
    }

    pub fn with_precision(pairs: Vec<(f64, f64)>, precision: f64) -> Self {
        Self {
            pairs,
            precision,
            encoded: OnceCell::new(),
        }
    }

    /// Encodes the pairs, memoizing the result.
    pub fn encode(&self) -> &str {
        self.encoded.get_or_init(|| {
            let mut out = String::new();
            for delta in deltas(&self.pairs, self.precision) {
                encode_value(delta, &mut out);
            }
            out
        })
    }
}

/// Rounds each coordinate to `precision` and emits the offset from the
/// previous rounded point, flattened as `[lat, lng, lat, lng, ...]`.
///
/// The first point is relative to (0, 0). Output length is exactly twice
/// the input length.
pub fn deltas(pairs: &[(f64, f64)], precision: f64) -> Vec<i64> {
    let mut out = Vec::with_capacity(pairs.len() * 2);
    let mut previous = (0i64, 0i64);

    for &(lat, lng) in pairs {
        let rounded = (
            (lat * precision).round() as i64,
            (lng * precision).round() as i64,
        );

        out.push(rounded.0 - previous.0);
        out.push(rounded.1 - previous.1);
        previous = rounded;
    }

    out
}

/// Encodes one signed delta into ASCII chunks, appended to `out`.
fn encode_value(value: i64, out: &mut String) {
    let negative = value < 0;
    let mut value = value.abs();

    // Two's complement when negative, then left shift one bit and invert
    // the shifted result for negative input.
    if negative {
        value = !value + 1;
    }
    value <<= 1;
    if negative {
        value = !value;
    }

    // 5-bit chunks, least significant first. A zero input still emits one
    // chunk.
    let mut chunks = Vec::new();
    while value > 0 {
        chunks.push((value & 0x1f) as u8);
        value >>= 5;
    }
    if chunks.is_empty() {
        chunks.push(0);
    }

    // Continuation bit on every chunk but the last, then shift into the
    // printable range.
    let last = chunks.len() - 1;
    for (index, &chunk) in chunks.iter().enumerate() {
        let chunk = if index == last { chunk } else { chunk | 0x20 };
        out.push((chunk + 63) as char);
    }
}
