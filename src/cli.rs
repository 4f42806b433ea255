use clap::{Parser, Subcommand};

/// Tapbuy — Adyen origin override gateway
#[derive(Parser)]
#[command(name = "tapbuy-adyen", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the gateway server
    Serve {
        /// Port to bind (overrides TAPBUY_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Normalize an origin URL the way the override pipeline does
    Normalize {
        /// Raw origin URL, e.g. "https://shop.example.com:8443/checkout"
        origin: String,
    },

    /// Extract the Tapbuy origin from a request body read on stdin
    Extract,
}
