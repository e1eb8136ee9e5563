use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;

use super::{Enricher, Error};
use crate::config;
use crate::song::Detail;

#[derive(Debug, Serialize)]
struct Request<'a> {
    group: &'a str,
    song: &'a str,
}

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    url: String,
}

impl Client {
    pub fn new(config: &config::MusicApi) -> Self {
        Self { http: reqwest::Client::new(), url: config.url.clone() }
    }

    fn request(&self, group: &str, title: &str) -> reqwest::RequestBuilder {
        self.http.get(&self.url).query(&Request { group, song: title })
    }
}

#[async_trait]
impl Enricher for Client {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, group: &str, title: &str) -> Result<Detail, Error> {
        let response = self.request(group, title).send().await.map_err(Error::Request)?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Status(status));
        }
        response.json::<Detail>().await.map_err(Error::Decode)
    }
}
