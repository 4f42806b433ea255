use axum::http::uri::InvalidUri;
use thiserror::Error;
use tracing::warn;

/// Why origin extraction yielded no usable origin.
///
/// Every variant is recoverable: the caller falls back to the default
/// origin data and the payment request proceeds. Routine variants stay
/// silent, since most checkout calls legitimately carry no Adyen state
/// data. Malformed-data variants are logged at warning level.
#[derive(Debug, Error)]
pub enum ExtractFailure {
    /// Request body was empty or absent.
    #[error("empty request body")]
    EmptyBody,

    /// The outer request body is not valid JSON.
    #[error("invalid request body JSON: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),

    /// A path segment was missing or had an unexpected type.
    #[error("request body does not carry Adyen state data")]
    UnexpectedShape,

    /// The embedded `stateData` string is not valid JSON.
    #[error("invalid stateData JSON: {0}")]
    MalformedStateData(#[source] serde_json::Error),

    /// The `origin` field is absent or empty in the decoded state data.
    #[error("state data carries no origin")]
    MissingOrigin,

    /// The origin string does not parse as a URL.
    #[error("malformed origin URL {origin:?}: {source}")]
    MalformedOriginUrl {
        origin: String,
        #[source]
        source: InvalidUri,
    },

    /// The origin parsed, but without a scheme or host there is no
    /// origin to speak of.
    #[error("origin URL {origin:?} has no scheme or host")]
    OriginMissingSchemeOrHost { origin: String },
}

impl ExtractFailure {
    /// Routine absence of data, as opposed to data that arrived corrupted.
    pub fn is_routine(&self) -> bool {
        matches!(
            self,
            ExtractFailure::EmptyBody
                | ExtractFailure::UnexpectedShape
                | ExtractFailure::MissingOrigin
        )
    }

    /// Emit the warning for this failure. Routine variants log nothing.
    pub fn log(&self) {
        match self {
            ExtractFailure::EmptyBody
            | ExtractFailure::UnexpectedShape
            | ExtractFailure::MissingOrigin => {}
            ExtractFailure::MalformedEnvelope(err) => {
                warn!(error = %err, "failed to parse Tapbuy request body for origin extraction");
            }
            ExtractFailure::MalformedStateData(err) => {
                warn!(error = %err, "failed to parse stateData JSON for origin extraction");
            }
            ExtractFailure::MalformedOriginUrl { origin, source } => {
                warn!(origin = %origin, error = %source, "malformed origin URL in Adyen stateData");
            }
            ExtractFailure::OriginMissingSchemeOrHost { origin } => {
                warn!(origin = %origin, "invalid origin URL format in Adyen stateData");
            }
        }
    }
}
