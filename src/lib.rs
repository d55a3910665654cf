//! amz-scout - Fetch the first Amazon search result for a query
//!
//! One request, one parse, one line of JSON on stdout.

pub mod amazon;
pub mod commands;
pub mod config;
pub mod format;

pub use amazon::models::{ProductRecord, RawListing};
pub use amazon::regions::Region;
pub use config::Config;
