//! Syntactic URL validation
//!
//! Purely syntactic per the URL standard (scheme, authority, path). No
//! network access, no reachability check.

use crate::error::{Error, Result};
use url::Url;

/// Validate that `input` is a syntactically well-formed URL with a host.
///
/// Strings like `htp:/broken` parse as generic URIs but carry no authority,
/// so a bare [`Url::parse`] is not strict enough here. Returns the parsed
/// [`Url`] on success so callers can reuse it without a second parse.
/// Failure carries the offending input back as [`Error::InvalidUrl`]; the
/// caller decides whether and how to report it.
pub fn validate_url(input: &str) -> Result<Url> {
    let parsed = Url::parse(input).map_err(|_| Error::InvalidUrl(input.to_string()))?;
    if !parsed.has_host() {
        return Err(Error::InvalidUrl(input.to_string()));
    }
    Ok(parsed)
}
