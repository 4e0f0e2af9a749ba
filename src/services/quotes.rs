//! Quote Client
//!
//! Fetches currency quotes from dolarapi.com. All endpoints are requested in
//! parallel and the batch fails as a whole if any single request fails.

use crate::constants::QUOTE_ENDPOINTS;
use crate::domain::Quote;
use crate::error::Result;
use futures::future::try_join_all;
use std::time::Duration;
use tracing::debug;

/// HTTP client for the quote endpoints
#[derive(Clone, Debug)]
pub struct QuoteClient {
    http: reqwest::Client,
    endpoints: Vec<String>,
    timeout: Duration,
}

impl QuoteClient {
    /// Create a client for the default dolarapi.com endpoints
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pyme-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoints: QUOTE_ENDPOINTS.iter().map(|url| url.to_string()).collect(),
            timeout,
        })
    }

    /// Fetch every endpoint concurrently, preserving endpoint order
    pub async fn fetch_all(&self) -> Result<Vec<Quote>> {
        try_join_all(self.endpoints.iter().map(|url| self.fetch_one(url))).await
    }

    async fn fetch_one(&self, url: &str) -> Result<Quote> {
        debug!(url, "Fetching quote");
        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        parse_quote(&body)
    }
}

/// Map a dolarapi.com JSON object to a quote
pub fn parse_quote(body: &str) -> Result<Quote> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn client() -> QuoteClient {
        QuoteClient::new(Duration::from_secs(1)).expect("client builds")
    }

    #[test]
    fn test_default_endpoints() {
        let client = client();
        assert_eq!(client.endpoints.len(), 4);
        assert!(client.endpoints[1].ends_with("/dolares/blue"));
    }

    #[test]
    fn test_parse_quote_error_is_json() {
        let err = parse_quote("<html>").expect_err("not json");
        assert!(matches!(err, Error::Json { .. }));
    }

    #[tokio::test]
    async fn test_empty_batch_is_ok() {
        let client = QuoteClient {
            endpoints: Vec::new(),
            ..client()
        };
        let quotes = client.fetch_all().await;
        assert!(quotes.expect("empty batch").is_empty());
    }

    #[tokio::test]
    async fn test_one_bad_endpoint_fails_batch() {
        let client = QuoteClient {
            endpoints: vec!["not a url".to_string()],
            ..client()
        };
        let result = client.fetch_all().await;
        assert!(matches!(result, Err(Error::Http { .. })));
    }
}
