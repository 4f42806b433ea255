use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Header Tapbuy sets on relayed storefront calls.
    /// Set via TAPBUY_MARKER_HEADER env var. Default: x-tapbuy-call.
    pub tapbuy_marker_header: String,
    /// Origin used in the default Adyen origin data.
    /// Set via ADYEN_DEFAULT_ORIGIN env var.
    pub default_origin: String,
    /// Max accepted request body size in bytes.
    /// Set via TAPBUY_MAX_BODY_BYTES env var. Default: 2 MiB.
    pub max_body_bytes: usize,
}

pub fn load() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();

    Ok(Config {
        port: std::env::var("TAPBUY_PORT")
            .unwrap_or_else(|_| "8088".into())
            .parse()
            .unwrap_or(8088),
        tapbuy_marker_header: std::env::var("TAPBUY_MARKER_HEADER")
            .unwrap_or_else(|_| "x-tapbuy-call".into()),
        default_origin: std::env::var("ADYEN_DEFAULT_ORIGIN")
            .unwrap_or_else(|_| "https://checkout.tapbuy.io".into()),
        max_body_bytes: std::env::var("TAPBUY_MAX_BODY_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2 * 1024 * 1024),
    })
}
