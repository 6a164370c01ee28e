//! Quote Fetcher: one GET against the quote endpoint, decoded into a
//! [`QuoteRecord`].

use log::{debug, info};

use crate::config::QuoteConfig;
use crate::error::FetchError;
use crate::types::QuoteRecord;

pub struct QuoteClient {
    client: reqwest::Client,
    url: String,
}

impl QuoteClient {
    pub fn new(config: &QuoteConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Transport)?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// Fetch a single quote. No retries: the first failure is returned.
    pub async fn fetch(&self) -> Result<QuoteRecord, FetchError> {
        info!("Fetching quote from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(FetchError::Transport)?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let quote = decode_quote(&body)?;
        debug!("Got quote by {}", quote.author);
        Ok(quote)
    }
}

/// The endpoint answers with an array; only the first element is used.
pub fn decode_quote(body: &[u8]) -> Result<QuoteRecord, FetchError> {
    let quotes: Vec<QuoteRecord> =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    quotes
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::Decode("response array is empty".to_string()))
}
