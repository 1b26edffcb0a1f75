use async_trait::async_trait;
use serde_json::Value;

use crate::capabilities::HttpPoster;
use crate::error::{Result, SubmitError};

/// `reqwest`-backed [`HttpPoster`] for a fixed server base URL.
///
/// One attempt per call, no retry, no explicit timeout; the request resolves
/// or rejects on the transport's own defaults.
pub struct ReqwestPoster {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestPoster {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl HttpPoster for ReqwestPoster {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(&body).send().await?;
        let parsed = response.json::<Value>().await?;
        Ok(parsed)
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport(err.to_string())
    }
}
