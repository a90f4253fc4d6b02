use crate::domain::model::RuleSource;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

// 預設抓取的國內媒體 App（blackmatrix7 倉庫的目錄名）。
// 要增減 App 時在 data 目錄放 sources.toml 蓋掉這份清單即可；
// 可用的 App 見 https://github.com/blackmatrix7/ios_rule_script/tree/master/rule/Shadowrocket
const DEFAULT_APPS: [&str; 6] = [
    "NetEaseMusic",  // 網易雲音樂
    "KugouKuwo",     // 酷狗酷我
    "iQIYI",         // 愛奇藝
    "TencentVideo",  // 騰訊視頻
    "BiliBili",      // B站
    "Youku",         // 優酷
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceCatalog {
    pub sources: Vec<RuleSource>,
}

impl SourceCatalog {
    pub fn builtin() -> Self {
        Self {
            sources: DEFAULT_APPS.iter().map(|name| RuleSource::named(name)).collect(),
        }
    }

    /// 從 data 目錄載入 sources.toml；檔案不存在時回傳內建清單。
    /// 檔案存在但格式壞掉屬於致命錯誤，不做靜默回退。
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let path = data_dir.as_ref().join("sources.toml");
        if !path.exists() {
            tracing::debug!("No sources.toml, using built-in catalog");
            return Ok(Self::builtin());
        }

        let content = std::fs::read_to_string(&path)?;
        let catalog: SourceCatalog = toml::from_str(&content)?;
        tracing::info!(
            "Loaded {} rule sources from {}",
            catalog.sources.len(),
            path.display()
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog_matches_default_apps() {
        let catalog = SourceCatalog::builtin();
        assert_eq!(catalog.sources.len(), 6);
        assert!(catalog.sources.iter().any(|s| s.name == "NetEaseMusic"));
        assert!(catalog.sources.iter().any(|s| s.name == "BiliBili"));
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let dir = TempDir::new().unwrap();
        let catalog = SourceCatalog::load(dir.path()).unwrap();
        assert_eq!(catalog.sources.len(), 6);
    }

    #[test]
    fn test_load_catalog_from_toml() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("sources.toml"),
            r#"
[[sources]]
name = "NetEaseMusic"

[[sources]]
name = "Ximalaya"
url = "https://example.com/ximalaya.list"
rule_types = ["DOMAIN-SUFFIX"]
"#,
        )
        .unwrap();

        let catalog = SourceCatalog::load(dir.path()).unwrap();
        assert_eq!(catalog.sources.len(), 2);

        // 省略的欄位要補上預設值
        let netease = &catalog.sources[0];
        assert_eq!(netease.rule_types, vec!["DOMAIN-SUFFIX", "DOMAIN"]);
        assert!(netease.url.is_none());

        let ximalaya = &catalog.sources[1];
        assert_eq!(
            ximalaya.resolve_url("https://ignored.example.com"),
            "https://example.com/ximalaya.list"
        );
        assert_eq!(ximalaya.rule_types, vec!["DOMAIN-SUFFIX"]);
    }

    #[test]
    fn test_malformed_toml_is_fatal() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("sources.toml"), "sources = not valid").unwrap();
        assert!(SourceCatalog::load(dir.path()).is_err());
    }
}
