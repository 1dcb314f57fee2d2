use std::path::{Path, PathBuf};
use std::time::Duration;

use lexi_core::{LoadError, WordSource};
use lexi_types::WordCollection;

/// Word list served over HTTP, e.g. `GET /words.json`
#[derive(Clone)]
pub struct HttpWordSource {
    client: reqwest::Client,
    url: String,
}

impl HttpWordSource {
    pub fn new(base_url: &str, resource_path: &str, timeout: Duration) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        Ok(Self::with_client(client, join_url(base_url, resource_path)))
    }

    pub fn with_client(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl WordSource for HttpWordSource {
    async fn fetch_words(&self) -> Result<WordCollection, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LoadError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Word list read from a local JSON file
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl WordSource for FileWordSource {
    async fn fetch_words(&self) -> Result<WordCollection, LoadError> {
        let json = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&json)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn join_url(base_url: &str, resource_path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        resource_path.trim_start_matches('/')
    )
}
