//! Origin data for outbound Adyen payment requests.
//!
//! [`OriginDataBuilder`] produces the default block; the override hook
//! swaps in the origin extracted from the Tapbuy request, when there is
//! one and the call is a recognized Tapbuy call.

use serde_json::{json, Value};
use tracing::info;

/// Builds the default origin data sent to Adyen.
#[derive(Debug, Clone)]
pub struct OriginDataBuilder {
    default_origin: String,
}

impl OriginDataBuilder {
    pub fn new(default_origin: impl Into<String>) -> Self {
        Self {
            default_origin: default_origin.into(),
        }
    }

    /// Default origin data, before any override.
    pub fn build(&self) -> Value {
        json!({ "body": { "origin": self.default_origin } })
    }
}

/// Overwrite `body.origin` in `result` with the Tapbuy origin.
///
/// Acts only when the call is a recognized Tapbuy call AND an origin
/// was extracted; in every other case `result` passes through untouched
/// and nothing is logged. Applying the same override twice leaves the
/// same final value.
pub fn apply_origin_override(
    result: &mut Value,
    is_tapbuy_call: bool,
    tapbuy_origin: Option<&str>,
) {
    if !is_tapbuy_call {
        return;
    }
    let Some(origin) = tapbuy_origin else {
        return;
    };
    let Some(root) = result.as_object_mut() else {
        return;
    };

    let body = root.entry("body").or_insert_with(|| json!({}));
    let Some(body) = body.as_object_mut() else {
        return;
    };

    let previous = body.insert("origin".to_string(), Value::String(origin.to_string()));
    let previous_origin = previous.as_ref().and_then(Value::as_str);

    info!(
        original_origin = previous_origin,
        tapbuy_origin = origin,
        "Adyen origin modified for Tapbuy call"
    );
}

// ── Tests ────────────────────────────────────────────────────
