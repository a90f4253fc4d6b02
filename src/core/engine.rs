use crate::config::catalog::SourceCatalog;
use crate::core::{applist, gfwlist, merge::merge, overrides, render};
use crate::domain::model::{DomainSet, RenderTarget};
use crate::domain::ports::{ConfigProvider, Fetcher, Storage};
use crate::utils::error::Result;
use std::path::Path;

/// 整條產生流程的調度器：抓取 → 解析 → 合併 → 渲染 → 寫出。
/// 三個外部依賴（抓取、輸出、設定）都走 trait，測試時可以整組換掉。
pub struct RuleGenEngine<F: Fetcher, S: Storage, C: ConfigProvider> {
    fetcher: F,
    storage: S,
    config: C,
    catalog: SourceCatalog,
}

impl<F: Fetcher, S: Storage, C: ConfigProvider> RuleGenEngine<F, S, C> {
    pub fn new(fetcher: F, storage: S, config: C, catalog: SourceCatalog) -> Self {
        Self {
            fetcher,
            storage,
            config,
            catalog,
        }
    }

    /// 跑完所有選定的輸出，回傳寫出的檔案路徑。
    /// 每份輸出都是獨立完整的檔案，後面的輸出失敗不會回滾前面的。
    pub async fn run(&self) -> Result<Vec<String>> {
        let targets = self.config.targets();
        let mut written = Vec::new();

        let gfw_targets: Vec<RenderTarget> = targets
            .iter()
            .copied()
            .filter(|t| t.uses_gfw_list())
            .collect();

        if !gfw_targets.is_empty() {
            println!("Fetching GFW blocked domains...");
            let domains = self.collect_gfw_domains().await?;
            println!("Blocked domains: {}", domains.len());

            for target in gfw_targets {
                written.push(self.write_artifact(target, &domains).await?);
            }
        }

        if targets.contains(&RenderTarget::ShadowrocketChina) {
            println!("Fetching Chinese media app rules...");
            let domains = self.collect_media_domains().await?;
            println!("Media app domains: {}", domains.len());

            written.push(
                self.write_artifact(RenderTarget::ShadowrocketChina, &domains)
                    .await?,
            );
        }

        Ok(written)
    }

    /// GFW 清單 + custom-gfw.txt。清單抓不到不算致命：
    /// 記 WARN、當空集合，至少還有本地維護的部分能出貨。
    async fn collect_gfw_domains(&self) -> Result<DomainSet> {
        let parsed = match self
            .fetcher
            .fetch(self.config.gfwlist_url(), Some("gfwlist.txt"))
            .await
        {
            Ok(raw) => gfwlist::parse(&raw),
            Err(e) => {
                tracing::warn!("GFW list unavailable, continuing with overrides only: {}", e);
                DomainSet::new()
            }
        };
        tracing::info!("Parsed {} domains from GFW list", parsed.len());

        let custom = overrides::load(Path::new(self.config.data_path()).join("custom-gfw.txt"))?;
        if !custom.is_empty() {
            tracing::info!("Added {} custom domains", custom.len());
        }

        Ok(merge([parsed, custom]))
    }

    /// 逐一抓取媒體 App 規則檔 + custom-china.txt。
    /// 單一來源失敗只影響自己的貢獻，其餘來源照常處理。
    async fn collect_media_domains(&self) -> Result<DomainSet> {
        let mut sets = Vec::with_capacity(self.catalog.sources.len() + 1);

        for source in &self.catalog.sources {
            let url = source.resolve_url(self.config.rule_base_url());
            let cache_key = source.cache_key();
            match self.fetcher.fetch(&url, Some(cache_key.as_str())).await {
                Ok(raw) => {
                    let set = applist::parse(&raw, &source.rule_types);
                    if set.is_empty() {
                        // 抓到了但一條網域都沒抽出來，跟來源失聯是兩回事
                        tracing::warn!("{}: fetched but no domains extracted", source.name);
                    } else {
                        tracing::debug!("{}: {} domains", source.name, set.len());
                    }
                    sets.push(set);
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch {}: {}", source.name, e);
                    sets.push(DomainSet::new());
                }
            }
        }

        let custom = overrides::load(Path::new(self.config.data_path()).join("custom-china.txt"))?;
        if !custom.is_empty() {
            tracing::info!("Added {} custom domains", custom.len());
        }
        sets.push(custom);

        Ok(merge(sets))
    }

    async fn write_artifact(&self, target: RenderTarget, domains: &DomainSet) -> Result<String> {
        let content = render::render(domains, target);
        self.storage
            .write_file(target.file_name(), content.as_bytes())
            .await?;

        let path = format!("{}/{}", self.config.output_path(), target.file_name());
        println!("Created: {} ({} rules)", path, domains.len());
        Ok(path)
    }
}
