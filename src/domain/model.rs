use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

/// 規範化後的網域名稱。只能透過 [`Domain::parse`] 建構，
/// 因此集合裡不會出現未清洗的原始字串。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Domain(String);

impl Domain {
    // 短於 4 個字元的殘片（"a.b" 之類）視為雜訊
    const MIN_LEN: usize = 4;

    /// 清洗並驗證一個候選網域：去掉 :port 與首尾的點、轉小寫。
    /// 候選字串若帶路徑、萬用字元、空白或開頭是點，直接判定無效。
    pub fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim();
        if token.is_empty() || token.starts_with('.') || !token.contains('.') {
            return None;
        }
        if token.contains(['/', '*']) || token.chars().any(char::is_whitespace) {
            return None;
        }

        let host = token.split(':').next().unwrap_or(token);
        let host = host.trim_matches('.');
        if host.len() < Self::MIN_LEN || !host.contains('.') {
            return None;
        }

        Some(Self(host.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Domain {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// 網域集合。底層是 BTreeSet，重複自動合併，迭代永遠是字典序，
/// 所以輸出內容跟插入順序無關。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainSet(BTreeSet<Domain>);

impl DomainSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, domain: Domain) -> bool {
        self.0.insert(domain)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 依字典序走訪
    pub fn iter(&self) -> btree_set::Iter<'_, Domain> {
        self.0.iter()
    }

    pub fn union_with(&mut self, other: DomainSet) {
        self.0.extend(other.0);
    }
}

impl FromIterator<Domain> for DomainSet {
    fn from_iter<I: IntoIterator<Item = Domain>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for DomainSet {
    type Item = Domain;
    type IntoIter = btree_set::IntoIter<Domain>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Extend<Domain> for DomainSet {
    fn extend<I: IntoIterator<Item = Domain>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

fn default_rule_types() -> Vec<String> {
    vec!["DOMAIN-SUFFIX".to_string(), "DOMAIN".to_string()]
}

/// 一個遠端規則檔來源（blackmatrix7 形式）。
/// `url` 未指定時套用上游倉庫的目錄慣例。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSource {
    pub name: String,

    #[serde(default)]
    pub url: Option<String>,

    // 接受的規則類型標籤；關鍵字類規則一律丟棄
    #[serde(default = "default_rule_types")]
    pub rule_types: Vec<String>,
}

impl RuleSource {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            url: None,
            rule_types: default_rule_types(),
        }
    }

    pub fn resolve_url(&self, base: &str) -> String {
        self.url.clone().unwrap_or_else(|| {
            format!(
                "{}/Shadowrocket/{}/{}.list",
                base.trim_end_matches('/'),
                self.name,
                self.name
            )
        })
    }

    pub fn cache_key(&self) -> String {
        format!("china-media-{}.list", self.name)
    }
}

/// 要產出的設定檔格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// 翻牆清單 → Shadowrocket 設定檔（在中國時導向美國代理）
    ShadowrocketGfw,
    /// 國內媒體清單 → Shadowrocket 設定檔（在美國時導回中國代理）
    ShadowrocketChina,
    /// 翻牆清單 → GL.iNet 路由器的逐行網域清單
    GlinetPolicy,
}

impl RenderTarget {
    pub const ALL: [RenderTarget; 3] = [
        RenderTarget::ShadowrocketGfw,
        RenderTarget::ShadowrocketChina,
        RenderTarget::GlinetPolicy,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            RenderTarget::ShadowrocketGfw => "shadowrocket-gfw.conf",
            RenderTarget::ShadowrocketChina => "shadowrocket-china.conf",
            RenderTarget::GlinetPolicy => "glinet-gfw.txt",
        }
    }

    /// 這個輸出吃的是 GFW 清單還是媒體 App 清單
    pub fn uses_gfw_list(self) -> bool {
        matches!(
            self,
            RenderTarget::ShadowrocketGfw | RenderTarget::GlinetPolicy
        )
    }
}
