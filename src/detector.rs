//! Tapbuy call recognition.
//!
//! Tapbuy marks relayed storefront calls with a dedicated header. Only
//! marked calls are eligible for the origin override; everything else
//! keeps the default origin data, regardless of what the body contains.

use anyhow::Context;
use axum::http::{HeaderMap, HeaderName};

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct TapbuyRequestDetector {
    marker_header: HeaderName,
}

impl TapbuyRequestDetector {
    pub fn new(marker_header: HeaderName) -> Self {
        Self { marker_header }
    }

    /// Build from config, validating the configured header name.
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let marker_header = cfg
            .tapbuy_marker_header
            .parse::<HeaderName>()
            .with_context(|| {
                format!(
                    "invalid TAPBUY_MARKER_HEADER {:?}",
                    cfg.tapbuy_marker_header
                )
            })?;
        Ok(Self::new(marker_header))
    }

    /// Whether this call was relayed by Tapbuy: the marker header must
    /// be present with a non-empty value.
    pub fn is_tapbuy_call(&self, headers: &HeaderMap) -> bool {
        headers
            .get(&self.marker_header)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| !v.is_empty())
    }
}
