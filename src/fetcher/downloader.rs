use std::future::Future;

use anyhow::Result;
use bytes::Bytes;
use reqwest::Client;

/// Anything that can turn a URL into the bytes behind it.
pub trait Fetch {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Bytes>>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build http client: {}", e))?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("download failed {}: {}", url, e))?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!("download failed {}: {}", url, e))?;

        response
            .bytes()
            .await
            .map_err(|e| anyhow::anyhow!("failed to read response {}: {}", url, e))
    }
}
