use crate::domain::model::{Domain, DomainSet};
use crate::utils::error::Result;
use std::io::ErrorKind;
use std::path::Path;

/// 讀取本地維護的網域清單（一行一個網域，`#` 開頭是註解）。
/// 檔案不存在視為空清單；通不過網域檢核的行記 WARN 後略過。
pub fn load<P: AsRef<Path>>(path: P) -> Result<DomainSet> {
    let path = path.as_ref();
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No override file at {}", path.display());
            return Ok(DomainSet::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut set = DomainSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match Domain::parse(line) {
            Some(domain) => {
                set.insert(domain);
            }
            None => {
                tracing::warn!(
                    "Skipping invalid entry in {}: '{}'",
                    path.display(),
                    line
                );
            }
        }
    }
    Ok(set)
}
