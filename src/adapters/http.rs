use crate::domain::ports::Fetcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest 客戶端加一層逐 key 的磁碟快取。
/// 快取是 read-if-present / write-once-per-key，核心管線看不到它。
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    cache_dir: PathBuf,
}

impl HttpFetcher {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Result<Self> {
        let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self {
            client,
            cache_dir: cache_dir.into(),
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, cache_key: Option<&str>) -> Result<String> {
        if let Some(key) = cache_key {
            let cache_path = self.cache_dir.join(key);
            if cache_path.exists() {
                tracing::debug!("Using cached: {}", key);
                return Ok(std::fs::read_to_string(cache_path)?);
            }
        }

        tracing::debug!("Downloading: {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let content = response.text().await?;

        if let Some(key) = cache_key {
            std::fs::create_dir_all(&self.cache_dir)?;
            std::fs::write(self.cache_dir.join(key), &content)?;
        }

        Ok(content)
    }
}
