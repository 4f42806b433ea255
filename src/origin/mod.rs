//! Origin extraction from Tapbuy checkout request bodies.

pub mod extractor;
pub mod normalize;

pub use extractor::{extract_origin, try_extract};
pub use normalize::{normalize_origin, try_normalize};
