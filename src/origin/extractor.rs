//! Extracts the checkout origin from a Tapbuy GraphQL request body.
//!
//! Path: `variables.paymentMethod.<additional data>.stateData.origin`,
//! where `stateData` is itself a JSON-encoded string. The storefront
//! double-encodes the Adyen component state, so a second decode pass is
//! required.
//!
//! The body is attacker-controlled (it arrives in a payment request):
//! every traversal step validates shape before descending and degrades
//! to "no origin" instead of failing.

use serde_json::{Map, Value};

use crate::errors::ExtractFailure;
use crate::origin::normalize;

/// Keys under `paymentMethod` that may carry the Adyen additional-data
/// block. Checked in order; a later key overrides an earlier one, so
/// `adyen_additional_data_hpp` wins whenever it is present.
const ADDITIONAL_DATA_KEYS: [&str; 2] = ["adyen_additional_data_cc", "adyen_additional_data_hpp"];

const STATE_DATA_KEY: &str = "stateData";
const ORIGIN_KEY: &str = "origin";

/// Extract and normalize the origin, or `None` when the body carries no
/// usable one. Never fails: malformed input is logged and degrades to
/// `None`, so the payment request proceeds with its default origin data.
pub fn extract_origin(raw: &[u8]) -> Option<String> {
    match try_extract(raw) {
        Ok(origin) => Some(origin),
        Err(failure) => {
            failure.log();
            None
        }
    }
}

/// Fallible form of [`extract_origin`], exposing why extraction
/// produced nothing.
pub fn try_extract(raw: &[u8]) -> Result<String, ExtractFailure> {
    if raw.is_empty() {
        return Err(ExtractFailure::EmptyBody);
    }

    let payload: Value = serde_json::from_slice(raw).map_err(ExtractFailure::MalformedEnvelope)?;

    let payment_method = get_path(&payload, &["variables", "paymentMethod"])
        .and_then(Value::as_object)
        .ok_or(ExtractFailure::UnexpectedShape)?;

    let additional_data = select_additional_data(payment_method)
        .and_then(Value::as_object)
        .ok_or(ExtractFailure::UnexpectedShape)?;

    let state_data_json = additional_data
        .get(STATE_DATA_KEY)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(ExtractFailure::UnexpectedShape)?;

    let state_data: Value =
        serde_json::from_str(state_data_json).map_err(ExtractFailure::MalformedStateData)?;
    let state_data = state_data
        .as_object()
        .ok_or(ExtractFailure::UnexpectedShape)?;

    let origin = state_data
        .get(ORIGIN_KEY)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(ExtractFailure::MissingOrigin)?;

    normalize::try_normalize(origin)
}

/// Pick the additional-data block from `paymentMethod`.
///
/// Key order matters: hpp overrides cc whenever the hpp key exists,
/// even when its value is the structurally invalid one. Selection
/// happens before any validity check.
fn select_additional_data(payment_method: &Map<String, Value>) -> Option<&Value> {
    let mut selected = None;
    for key in ADDITIONAL_DATA_KEYS {
        if let Some(value) = payment_method.get(key) {
            selected = Some(value);
        }
    }
    selected
}

/// Walk `path` through nested JSON objects, short-circuiting on the
/// first missing key or non-object step.
fn get_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = current.as_object()?.get(*key)?;
    }
    Some(current)
}

// ── Tests ────────────────────────────────────────────────────
