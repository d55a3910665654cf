//! First-result lookup: build request, fetch, extract, normalize.

use crate::amazon::{normalize, AmazonClient, AmazonSearch, Parser, ProductRecord, SearchRequest};
use crate::config::Config;
use tracing::{error, info, warn};

/// Looks up the first search result for a query.
pub struct LookupCommand {
    config: Config,
}

impl LookupCommand {
    /// Creates a new lookup command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the lookup against the live storefront.
    ///
    /// Every request-layer failure, client construction included, becomes `None`.
    pub async fn execute(&self, query: &str) -> Option<ProductRecord> {
        let client = match AmazonClient::new(&self.config) {
            Ok(client) => client,
            Err(e) => {
                error!("Error making request: failed to create HTTP client: {:#}", e);
                return None;
            }
        };

        self.execute_with_client(&client, query).await
    }

    /// Runs the lookup with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl AmazonSearch,
        query: &str,
    ) -> Option<ProductRecord> {
        info!("Searching for: {}", query);

        let origin = self.config.origin();
        let request = SearchRequest::for_region(&origin, query, self.config.region);

        let html = match client.fetch(&request).await {
            Ok(html) => html,
            Err(e) => {
                error!("Error making request: {}", e);
                return None;
            }
        };

        let listing = Parser::new(origin).first_listing(&html)?;

        match normalize(listing, self.config.region) {
            Ok(record) => {
                info!("Found product: {}", record.title.as_deref().unwrap_or("<untitled>"));
                Some(record)
            }
            Err(e) => {
                warn!("Error processing product: {}", e);
                None
            }
        }
    }
}
