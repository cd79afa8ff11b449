//! Fetching a listing published under a base URL.

use juggler_core::listing::{Listing, ListingRoot};
use juggler_util::errors::{JugglerError, JugglerResult};

use crate::manifest::{parse_listing, LISTING_FILENAME};

/// URL of the listing published under `base_url`.
pub fn listing_url(base_url: &str) -> String {
    format!("{}/{LISTING_FILENAME}", base_url.trim_end_matches('/'))
}

/// Fetch the body of `url` with a single blocking GET.
///
/// Non-success statuses are errors.
pub fn fetch_bytes(url: &str) -> reqwest::Result<Vec<u8>> {
    let bytes = reqwest::blocking::Client::builder()
        .user_agent(concat!("juggler/", env!("CARGO_PKG_VERSION")))
        .build()?
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .and_then(|r| r.bytes())?;
    Ok(bytes.to_vec())
}

/// Load the listing published under `base_url`.
///
/// Any transport failure or error status is [`JugglerError::FileNotFound`]
/// wrapping the cause. The listing's root is the base URL, so resolved
/// entries locate their artifacts next to the listing.
pub fn load_remote_listing(base_url: &str) -> JugglerResult<Listing> {
    let base_url = base_url.trim_end_matches('/');
    let url = listing_url(base_url);
    tracing::info!("Fetching listing {url}");

    let bytes = fetch_bytes(&url).map_err(|e| JugglerError::FileNotFound {
        location: url.clone(),
        source: Box::new(e),
    })?;
    parse_listing(&bytes, ListingRoot::Remote(base_url.to_string()))
}
