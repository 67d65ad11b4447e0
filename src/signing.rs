//! URL signing for business accounts.
//!
//! Signs the path and query of an assembled URL with HMAC-SHA1 and a
//! URL-safe base64 private key, appending the signature as the final
//! query param.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use url::Url;

use crate::errors::Error;

type HmacSha1 = Hmac<Sha1>;

/// Returns `url` with a `signature=` param appended.
pub(crate) fn sign_url(url: &str, private_key: &str) -> Result<String, Error> {
    let parsed = Url::parse(url).map_err(|error| Error::Signing(error.to_string()))?;

    let mut path_and_query = parsed.path().to_string();
    if let Some(query) = parsed.query() {
        path_and_query.push('?');
        path_and_query.push_str(query);
    }

    let signature = signature_for(&path_and_query, private_key)?;
    Ok(format!("{url}&signature={signature}"))
}

fn signature_for(path_and_query: &str, private_key: &str) -> Result<String, Error> {
    let key = URL_SAFE
        .decode(private_key)
        .map_err(|error| Error::Signing(error.to_string()))?;

    let mut mac =
        HmacSha1::new_from_slice(&key).map_err(|error| Error::Signing(error.to_string()))?;
    mac.update(path_and_query.as_bytes());

    Ok(URL_SAFE.encode(mac.finalize().into_bytes()))
}
