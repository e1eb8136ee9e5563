pub mod music_api;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::song::Detail;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not send request: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Unexpected response status {0}")]
    Status(StatusCode),
    #[error("Could not decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Source of the details filled in when a song is added.
#[async_trait]
pub trait Enricher: Send + Sync {
    async fn fetch(&self, group: &str, title: &str) -> Result<Detail, Error>;
}
