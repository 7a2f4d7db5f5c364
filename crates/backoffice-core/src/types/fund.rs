//! 브로커 계좌 → 내부 펀드 코드 별칭.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 설정 파일의 별칭 항목.
///
/// 설정 키는 대소문자가 정규화될 수 있으므로 계좌는 키가 아니라 값으로 둡니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundAlias {
    pub account: String,
    pub fund: String,
}

/// 브로커 계좌 식별자를 내부 펀드 코드(예: "OPP", "TAC")로 바꾸는 별칭 표.
///
/// 리포트 쿼리는 이 표를 `CASE account WHEN ? THEN ? ... END` 식으로 렌더링합니다.
/// 바인딩 순서가 매 호출마다 같도록 정렬된 맵을 사용합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<FundAlias>", into = "Vec<FundAlias>")]
pub struct FundAliasMap {
    aliases: BTreeMap<String, String>,
}

impl FundAliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 별칭을 추가합니다. 같은 계좌가 이미 있으면 덮어씁니다.
    pub fn insert(&mut self, account: impl Into<String>, fund: impl Into<String>) {
        self.aliases.insert(account.into(), fund.into());
    }

    /// 별칭 추가 (빌더 형식).
    pub fn with_alias(mut self, account: impl Into<String>, fund: impl Into<String>) -> Self {
        self.insert(account, fund);
        self
    }

    /// 계좌에 해당하는 펀드 코드. 별칭이 없으면 계좌 값을 그대로 반환합니다.
    pub fn resolve<'a>(&'a self, account: &'a str) -> &'a str {
        self.aliases.get(account).map(String::as_str).unwrap_or(account)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl From<Vec<FundAlias>> for FundAliasMap {
    fn from(entries: Vec<FundAlias>) -> Self {
        entries.into_iter().map(|e| (e.account, e.fund)).collect()
    }
}

impl From<FundAliasMap> for Vec<FundAlias> {
    fn from(map: FundAliasMap) -> Self {
        map.aliases
            .into_iter()
            .map(|(account, fund)| FundAlias { account, fund })
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FundAliasMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (account, fund) in iter {
            map.insert(account, fund);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_falls_back_to_account() {
        let aliases = FundAliasMap::new()
            .with_alias("102-44871", "OPP")
            .with_alias("JPM-TAC-01", "TAC");

        assert_eq!(aliases.resolve("102-44871"), "OPP");
        assert_eq!(aliases.resolve("JPM-TAC-01"), "TAC");
        assert_eq!(aliases.resolve("UNKNOWN"), "UNKNOWN");
    }

    #[test]
    fn test_iteration_order_is_stable() {
        let aliases: FundAliasMap = vec![("b", "TAC"), ("a", "OPP")].into_iter().collect();
        let accounts: Vec<_> = aliases.iter().map(|(account, _)| account).collect();
        assert_eq!(accounts, vec!["a", "b"]);
        assert_eq!(aliases.len(), 2);
    }
}
