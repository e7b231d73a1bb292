extern crate futures;
extern crate reqwest;

use crate::{
    config::fetch::{MAX_CONCURRENT_FETCHES, REQUEST_TIMEOUT, USER_AGENT},
    error::Result,
};
use futures::stream::{self, StreamExt};

/// A fetched page. `url` is the final URL after redirects, which is where
/// contest sweeps read the problem id back from.
pub struct Page {
    pub url: String,
    pub body: String,
}

pub struct Client {
    inner: reqwest::Client,
}

impl Client {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(REQUEST_TIMEOUT)
                .build()?,
        })
    }

    pub async fn get(&self, url: &str) -> Result<Page> {
        let response = self.inner.get(url).send().await?.error_for_status()?;
        let url = response.url().as_str().to_string();
        let body = response.text().await?;
        Ok(Page { url, body })
    }

    /// Fetches every URL with bounded fan-out, yielding results in
    /// completion order. Individual failures stay individual; the batch
    /// always settles.
    pub async fn get_batch(&self, urls: Vec<String>) -> Vec<Result<Page>> {
        stream::iter(urls)
            .map(|url| async move { self.get(&url).await })
            .buffer_unordered(MAX_CONCURRENT_FETCHES)
            .collect()
            .await
    }
}
