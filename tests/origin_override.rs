//! End-to-end tests for the Tapbuy origin override pipeline.
//!
//! These drive the full path a checkout call takes: raw request body →
//! origin extraction → default origin data → conditional override.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use serde_json::json;
use tapbuy_adyen::builder::{apply_origin_override, OriginDataBuilder};
use tapbuy_adyen::detector::TapbuyRequestDetector;
use tapbuy_adyen::origin::extract_origin;

const TAPBUY_BODY: &[u8] = br#"{"variables":{"paymentMethod":{"adyen_additional_data_hpp":{"stateData":"{\"origin\":\"https://pay.tapbuy.io/session\"}"}}}}"#;

const DEFAULT_ORIGIN: &str = "https://checkout.tapbuy.io";

fn run_pipeline(raw_body: &[u8], headers: &HeaderMap) -> serde_json::Value {
    let detector = TapbuyRequestDetector::new(HeaderName::from_static("x-tapbuy-call"));
    let builder = OriginDataBuilder::new(DEFAULT_ORIGIN);

    let is_tapbuy_call = detector.is_tapbuy_call(headers);
    let tapbuy_origin = extract_origin(raw_body);

    let mut result = builder.build();
    apply_origin_override(&mut result, is_tapbuy_call, tapbuy_origin.as_deref());
    result
}

fn tapbuy_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("x-tapbuy-call", HeaderValue::from_static("1"));
    headers
}

/// A marked Tapbuy call with valid hpp state data gets its origin
/// rewritten to the normalized storefront origin.
#[test]
fn test_recognized_call_overrides_origin() {
    let result = run_pipeline(TAPBUY_BODY, &tapbuy_headers());
    assert_eq!(result["body"]["origin"], "https://pay.tapbuy.io");
}

/// The identical body without the Tapbuy marker keeps the default.
#[test]
fn test_unrecognized_call_keeps_default_origin() {
    let result = run_pipeline(TAPBUY_BODY, &HeaderMap::new());
    assert_eq!(result["body"]["origin"], DEFAULT_ORIGIN);
}

/// A marked call whose body is malformed JSON degrades to the default
/// origin instead of failing the payment build.
#[test]
fn test_malformed_body_keeps_default_origin() {
    let result = run_pipeline(b"{definitely not json", &tapbuy_headers());
    assert_eq!(result["body"]["origin"], DEFAULT_ORIGIN);
}

/// A marked call that is not a checkout mutation keeps the default.
#[test]
fn test_unrelated_body_keeps_default_origin() {
    let body = json!({ "query": "query { cart { id } }" }).to_string();
    let result = run_pipeline(body.as_bytes(), &tapbuy_headers());
    assert_eq!(result["body"]["origin"], DEFAULT_ORIGIN);
}

/// When both additional-data blocks are present, the hpp origin wins.
#[test]
fn test_hpp_origin_wins_over_cc() {
    let body = json!({
        "variables": {
            "paymentMethod": {
                "adyen_additional_data_cc": {
                    "stateData": "{\"origin\":\"https://cc.tapbuy.io\"}"
                },
                "adyen_additional_data_hpp": {
                    "stateData": "{\"origin\":\"https://hpp.tapbuy.io\"}"
                }
            }
        }
    })
    .to_string();

    let result = run_pipeline(body.as_bytes(), &tapbuy_headers());
    assert_eq!(result["body"]["origin"], "https://hpp.tapbuy.io");
}

/// Running the override twice with the same inputs yields the same
/// final origin.
#[test]
fn test_override_is_idempotent_end_to_end() {
    let detector = TapbuyRequestDetector::new(HeaderName::from_static("x-tapbuy-call"));
    let builder = OriginDataBuilder::new(DEFAULT_ORIGIN);

    let is_tapbuy_call = detector.is_tapbuy_call(&tapbuy_headers());
    let tapbuy_origin = extract_origin(TAPBUY_BODY);

    let mut result = builder.build();
    apply_origin_override(&mut result, is_tapbuy_call, tapbuy_origin.as_deref());
    let after_first = result.clone();
    apply_origin_override(&mut result, is_tapbuy_call, tapbuy_origin.as_deref());

    assert_eq!(result, after_first);
    assert_eq!(result["body"]["origin"], "https://pay.tapbuy.io");
}

/// An explicit port in the storefront origin survives normalization.
#[test]
fn test_origin_port_is_preserved() {
    let body = json!({
        "variables": {
            "paymentMethod": {
                "adyen_additional_data_cc": {
                    "stateData": "{\"origin\":\"https://shop.example.com:8443/checkout?x=1\"}"
                }
            }
        }
    })
    .to_string();

    let result = run_pipeline(body.as_bytes(), &tapbuy_headers());
    assert_eq!(result["body"]["origin"], "https://shop.example.com:8443");
}
