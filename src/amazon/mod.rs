//! Amazon-specific modules: request building, fetching, extraction and normalization.

pub mod client;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod regions;
pub mod request;
pub mod selectors;

pub use client::{AmazonClient, AmazonSearch, FetchError};
pub use models::{ProductRecord, RawListing};
pub use normalize::{normalize, NormalizeError};
pub use parser::Parser;
pub use regions::Region;
pub use request::{SearchRequest, BROWSER_HEADERS};
