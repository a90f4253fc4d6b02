use crate::domain::model::{Domain, DomainSet};

/// 解析逗號分隔的 App 規則檔（blackmatrix7 形式），例如：
///
/// ```text
/// DOMAIN-SUFFIX,music.163.com
/// DOMAIN,interface.music.163.com
/// DOMAIN-KEYWORD,netease
/// ```
///
/// 只收 `accepted_types` 裡的規則類型；關鍵字類比對沒有字面網域可用，
/// 一律丟棄。
pub fn parse(raw: &str, accepted_types: &[String]) -> DomainSet {
    raw.lines()
        .filter_map(|line| extract_domain(line, accepted_types))
        .collect()
}

fn extract_domain(line: &str, accepted_types: &[String]) -> Option<Domain> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
        return None;
    }

    // 至少要有「類型,值」兩欄
    let (rule_type, rest) = line.split_once(',')?;
    let candidate = rest.split(',').next().unwrap_or(rest);

    if !accepted_types.iter().any(|t| t == rule_type.trim()) {
        return None;
    }

    Domain::parse(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_types() -> Vec<String> {
        vec!["DOMAIN-SUFFIX".to_string(), "DOMAIN".to_string()]
    }

    #[test]
    fn test_domain_suffix_accepted() {
        let set = parse("DOMAIN-SUFFIX,music.163.com", &default_types());
        assert_eq!(set.len(), 1);
        assert!(set.contains("music.163.com"));
    }

    #[test]
    fn test_keyword_rule_dropped() {
        let set = parse("DOMAIN-KEYWORD,netease", &default_types());
        assert!(set.is_empty());
    }

    #[test]
    fn test_mixed_rule_file() {
        let raw = "# NetEase Music rules\n\
                   // mirror of upstream\n\
                   DOMAIN-SUFFIX,music.163.com\n\
                   DOMAIN,interface.music.163.com\n\
                   DOMAIN-KEYWORD,netease\n\
                   IP-CIDR,223.252.199.0/24,no-resolve\n\
                   \n\
                   malformed-line-without-comma\n";
        let set = parse(raw, &default_types());

        assert_eq!(set.len(), 2);
        assert!(set.contains("music.163.com"));
        assert!(set.contains("interface.music.163.com"));
    }

    #[test]
    fn test_extra_fields_ignored() {
        // Surge 風格的第三欄（策略）不影響網域抽取
        let set = parse("DOMAIN-SUFFIX,bilibili.com,DIRECT", &default_types());
        assert!(set.contains("bilibili.com"));
    }

    #[test]
    fn test_candidate_is_trimmed() {
        let set = parse("DOMAIN-SUFFIX, padded.example.com ", &default_types());
        assert!(set.contains("padded.example.com"));
    }

    #[test]
    fn test_custom_accepted_types() {
        let only_domain = vec!["DOMAIN".to_string()];
        let raw = "DOMAIN-SUFFIX,suffix.example.com\nDOMAIN,exact.example.com";
        let set = parse(raw, &only_domain);

        assert_eq!(set.len(), 1);
        assert!(set.contains("exact.example.com"));
    }
}
