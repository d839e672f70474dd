use reqwest::header::CONTENT_TYPE;
use serde::{Serialize, de::DeserializeOwned};

use crate::config::RecommenderConfig;

pub fn get_recommender_client() -> RecommenderClient {
    RecommenderClient::new(&RecommenderConfig::from_env())
}

/// Handle on the upstream recommender; cheap to clone, shares one connection pool.
#[derive(Debug, Clone)]
pub struct RecommenderClient {
    client: reqwest::Client,
    base_url: String,
}

impl RecommenderClient {
    pub fn new(config: &RecommenderConfig) -> Self {
        let client = match reqwest::Client::builder().timeout(config.request_timeout).build() {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!("recommender client: falling back to default client: {e}");
                reqwest::Client::new()
            }
        };
        Self {
            client,
            base_url: config.recommender_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let t0 = std::time::Instant::now();
        let response = self.client.get(self.url(path)).send().await?;
        read_json_response(path, response, t0).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> anyhow::Result<T> {
        let t0 = std::time::Instant::now();
        let body = serde_json::to_string(body)?;
        let response = self
            .client
            .post(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        read_json_response(path, response, t0).await
    }
}

async fn read_json_response<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
    t0: std::time::Instant,
) -> anyhow::Result<T> {
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Upstream {path} error: {}: {}", status, response_txt);
    }
    let dt_ms = t0.elapsed().as_millis() as u32;
    tracing::info!("UPSTREAM {path}: len = {} ({}ms)", response_txt.len(), dt_ms);
    let response: T = serde_json::from_str(&response_txt)?;
    Ok(response)
}
