//! The URL fragment as a client-only key channel.
//!
//! Browsers never include the fragment in HTTP requests, so a key appended
//! as `#<base64>` reaches the viewer without reaching the server.

use secrecy::ExposeSecret;
use url::Url;

use crate::crypto::PasteKey;
use crate::error::{PasteurError, Result};

/// Append `#<base64(key)>` to `path`, replacing any fragment it had.
pub fn link_with_key(path: &str, key: &PasteKey) -> String {
    let base = path.split_once('#').map_or(path, |(base, _)| base);
    format!("{}#{}", base, key.to_base64().expose_secret())
}

/// The fragment of `location`, without the leading `#`.
///
/// Accepts absolute URLs, relative references such as `/#abc`, and bare
/// `location.hash` values such as `#abc`. Returns `None` when there is no
/// fragment or it is empty.
pub fn fragment_of(location: &str) -> Option<String> {
    let fragment = match Url::parse(location) {
        Ok(url) => url.fragment().map(str::to_string),
        Err(_) => location
            .split_once('#')
            .map(|(_, fragment)| fragment.to_string()),
    }?;
    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}

/// Read the paste key out of `location`.
pub fn key_from_location(location: &str) -> Result<PasteKey> {
    let fragment = fragment_of(location).ok_or(PasteurError::MissingKey)?;
    PasteKey::from_base64(&fragment)
}

/// `location` with its fragment removed, safe to send to a server.
pub fn strip_fragment(location: &str) -> String {
    match Url::parse(location) {
        Ok(mut url) => {
            url.set_fragment(None);
            url.to_string()
        }
        Err(_) => location
            .split_once('#')
            .map_or(location, |(base, _)| base)
            .to_string(),
    }
}
