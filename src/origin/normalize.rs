//! Origin URL normalization.
//!
//! Reduces a raw origin URL to `scheme://host[:port]`, the exact form
//! Adyen expects in origin data. Userinfo, path, query and fragment are
//! discarded. An explicit port is preserved verbatim, including scheme
//! defaults like `:443` — `http::Uri` reports the port as written,
//! which is why it is used here instead of a whole-URL re-serialization.

use axum::http::Uri;

use crate::errors::ExtractFailure;

/// Normalize `raw`, or `None` (logged) when it is not a usable URL.
pub fn normalize_origin(raw: &str) -> Option<String> {
    match try_normalize(raw) {
        Ok(origin) => Some(origin),
        Err(failure) => {
            failure.log();
            None
        }
    }
}

/// Fallible form of [`normalize_origin`].
pub fn try_normalize(raw: &str) -> Result<String, ExtractFailure> {
    let uri: Uri = raw
        .parse()
        .map_err(|source| ExtractFailure::MalformedOriginUrl {
            origin: raw.to_string(),
            source,
        })?;

    let (scheme, host) = match (uri.scheme_str(), uri.host()) {
        (Some(scheme), Some(host)) if !scheme.is_empty() && !host.is_empty() => (scheme, host),
        _ => {
            return Err(ExtractFailure::OriginMissingSchemeOrHost {
                origin: raw.to_string(),
            })
        }
    };

    Ok(match uri.port_u16() {
        Some(port) => format!("{scheme}://{host}:{port}"),
        None => format!("{scheme}://{host}"),
    })
}

// ── Tests ────────────────────────────────────────────────────
