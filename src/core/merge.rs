use crate::domain::model::DomainSet;

/// 合併多個網域集合。純聯集，沒有衝突要解：
/// 交換律、結合律、冪等都成立，來源處理順序不影響結果。
pub fn merge<I>(sets: I) -> DomainSet
where
    I: IntoIterator<Item = DomainSet>,
{
    let mut merged = DomainSet::new();
    for set in sets {
        merged.union_with(set);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Domain;

    fn set_of(names: &[&str]) -> DomainSet {
        names.iter().filter_map(|n| Domain::parse(n)).collect()
    }

    #[test]
    fn test_union_combines_all_inputs() {
        let merged = merge([set_of(&["aaa.com"]), set_of(&["bbb.com", "ccc.com"])]);
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_union_is_commutative() {
        let a = set_of(&["netflix.com", "google.com"]);
        let b = set_of(&["bilibili.com"]);
        let c = set_of(&["google.com", "youtube.com"]);

        let forward = merge([a.clone(), b.clone(), c.clone()]);
        let backward = merge([c, b, a]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_union_is_associative() {
        let a = set_of(&["aaa.com"]);
        let b = set_of(&["bbb.com"]);
        let c = set_of(&["ccc.com"]);

        let left = merge([merge([a.clone(), b.clone()]), c.clone()]);
        let right = merge([a, merge([b, c])]);
        assert_eq!(left, right);
    }

    #[test]
    fn test_union_is_idempotent() {
        let a = set_of(&["example.com", "example.org"]);
        assert_eq!(merge([a.clone(), a.clone()]), a);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(merge(std::iter::empty::<DomainSet>()).is_empty());

        let a = set_of(&["example.com"]);
        assert_eq!(merge([DomainSet::new(), a.clone(), DomainSet::new()]), a);
    }
}
