use crate::domain::model::RenderTarget;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 取得遠端清單原文。`cache_key` 有給且快取命中時直接回傳快取內容，
/// 否則走網路抓取並回填快取。
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str, cache_key: Option<&str>) -> Result<String>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn gfwlist_url(&self) -> &str;
    fn rule_base_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn data_path(&self) -> &str;
    fn targets(&self) -> Vec<RenderTarget>;
}
