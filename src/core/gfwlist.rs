use crate::domain::model::{Domain, DomainSet};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::borrow::Cow;

/// 解析 Adblock Plus 形式的 GFW 清單，回傳可進代理規則的網域集合。
///
/// 純關鍵字或正規表達式規則沒有可抽的網域，直接略過；
/// `@@` 白名單項目也照樣收進集合（與封鎖項目同樣導向代理，
/// 沿用原始行為，見 DESIGN.md 的未決問題）。
pub fn parse(raw: &str) -> DomainSet {
    let text = decode_payload(raw);
    text.lines().filter_map(normalize_line).collect()
}

/// 上游清單是帶換行的 base64；解不開就當純文字處理，不視為錯誤。
fn decode_payload(raw: &str) -> Cow<'_, str> {
    let compact: String = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let decoded = BASE64
        .decode(compact.as_bytes())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok());

    match decoded {
        Some(text) => Cow::Owned(text),
        None => {
            tracing::debug!("Payload is not base64, treating as plain text");
            Cow::Borrowed(raw)
        }
    }
}

/// 把單行過濾規則正規化成網域。
/// 空行、`!` 註解、`[` 區段標頭回傳 None。
fn normalize_line(line: &str) -> Option<Domain> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('!') || line.starts_with('[') {
        return None;
    }
    Domain::parse(&strip_filter_syntax(line))
}

/// 依序剝除 Adblock Plus 語法。順序不可調換：
/// 1. `@@` 白名單記號
/// 2. `||` 網域錨
/// 3. 行首單一 `|` 錨
/// 4. 行尾單一 `|` 錨
/// 5. `http://` / `https://` 協議（錨沒先去掉會剝不到）
/// 6. 第一個 `/` 之後的路徑
/// 7. 萬用字元 `*`
fn strip_filter_syntax(line: &str) -> String {
    let token = line.strip_prefix("@@").unwrap_or(line);
    let token = token.strip_prefix("||").unwrap_or(token);
    let token = token.strip_prefix('|').unwrap_or(token);
    let token = token.strip_suffix('|').unwrap_or(token);
    let token = token
        .strip_prefix("http://")
        .or_else(|| token.strip_prefix("https://"))
        .unwrap_or(token);
    let token = token.split('/').next().unwrap_or(token);
    token.replace('*', "")
}
