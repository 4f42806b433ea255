//! HTTP surface: the origin-data endpoint the checkout pipeline calls.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use bytes::Bytes;
use serde_json::Value;

use crate::builder;
use crate::origin;
use crate::AppState;

pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/adyen/origin-data", post(build_origin_data))
        .with_state(state)
}

/// Build the Adyen origin data for the current call.
///
/// The default block is always built; the origin carried in the body
/// only replaces it when the call bears the Tapbuy marker AND the body
/// yields a usable origin. Infallible: a body that is empty, malformed
/// or simply not a checkout mutation leaves the default untouched, so
/// payment processing is never blocked.
pub async fn build_origin_data(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Value> {
    let is_tapbuy_call = state.detector.is_tapbuy_call(&headers);
    let tapbuy_origin = origin::extract_origin(&body);

    let mut result = state.builder.build();
    builder::apply_origin_override(&mut result, is_tapbuy_call, tapbuy_origin.as_deref());

    Json(result)
}
