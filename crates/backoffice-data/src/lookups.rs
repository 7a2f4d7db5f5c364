//! 조회용 맵 (티커 맵, 브로커, 수수료율).
//!
//! 모든 맵은 같은 규칙을 따릅니다: 기본 키 순서로 읽은 행을 자연 키로
//! 넣되, 이미 있는 키는 덮어쓰지 않습니다 (첫 행 우선).

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use std::collections::HashMap;
use std::hash::Hash;

pub(crate) const TICKER_MAP_SQL: &str =
    "SELECT `source_ticker`, `target_ticker` FROM `ticker_map` ORDER BY `id`";
pub(crate) const BROKERS_SQL: &str =
    "SELECT `broker_code`, `broker_name`, `is_active` FROM `brokers` ORDER BY `id`";
pub(crate) const COMMISSION_RATES_SQL: &str =
    "SELECT `broker_code`, `commission_rate`, `min_commission` FROM `commission_rates` ORDER BY `id`";

/// `ticker_map` 테이블 행.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TickerMapRow {
    pub source_ticker: String,
    pub target_ticker: String,
}

/// 브로커.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Broker {
    pub broker_code: String,
    pub broker_name: Option<String>,
    pub is_active: bool,
}

/// 브로커별 수수료율.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct CommissionRate {
    pub broker_code: String,
    /// 주당 또는 약정 대비 수수료율
    pub commission_rate: Option<Decimal>,
    pub min_commission: Option<Decimal>,
}

/// 행을 키별 맵으로 모읍니다. 같은 키가 다시 나오면 버리고 버린 개수를 함께 반환합니다.
pub fn first_wins<K, V, I, F>(rows: I, key: F) -> (HashMap<K, V>, usize)
where
    K: Eq + Hash,
    I: IntoIterator<Item = V>,
    F: Fn(&V) -> K,
{
    let mut map = HashMap::new();
    let mut dropped = 0;

    for row in rows {
        let k = key(&row);
        if map.contains_key(&k) {
            dropped += 1;
            continue;
        }
        map.insert(k, row);
    }

    (map, dropped)
}

/// 대소문자를 구분하지 않는 티커 매핑.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickerMap {
    map: HashMap<String, String>,
}

impl TickerMap {
    /// 행에서 맵을 만듭니다. 대문자 기준으로 먼저 나온 원본 티커가 우선합니다.
    pub fn from_rows<I>(rows: I) -> (Self, usize)
    where
        I: IntoIterator<Item = TickerMapRow>,
    {
        let (rows, dropped) = first_wins(rows, |row| row.source_ticker.trim().to_uppercase());
        let map = rows
            .into_iter()
            .map(|(source, row)| (source, row.target_ticker))
            .collect();

        (Self { map }, dropped)
    }

    /// 원본 티커에 대응하는 대상 티커.
    pub fn get(&self, source: &str) -> Option<&str> {
        self.map
            .get(&source.trim().to_uppercase())
            .map(String::as_str)
    }

    /// 매핑이 없으면 입력을 그대로 반환합니다.
    pub fn resolve<'a>(&'a self, source: &'a str) -> &'a str {
        self.get(source).unwrap_or(source)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn row(source: &str, target: &str) -> TickerMapRow {
        TickerMapRow {
            source_ticker: source.to_string(),
            target_ticker: target.to_string(),
        }
    }

    #[test]
    fn test_first_occurrence_wins() {
        let rates = vec![
            CommissionRate {
                broker_code: "JPM".to_string(),
                commission_rate: Some(dec!(0.0035)),
                min_commission: Some(dec!(1)),
            },
            CommissionRate {
                broker_code: "JPM".to_string(),
                commission_rate: Some(dec!(0.01)),
                min_commission: None,
            },
            CommissionRate {
                broker_code: "MS".to_string(),
                commission_rate: None,
                min_commission: None,
            },
        ];

        let (map, dropped) = first_wins(rates, |r| r.broker_code.clone());
        assert_eq!(map.len(), 2);
        assert_eq!(dropped, 1);
        assert_eq!(map["JPM"].commission_rate, Some(dec!(0.0035)));
        assert_eq!(map["MS"].commission_rate, None);
    }

    #[test]
    fn test_ticker_map_is_case_insensitive() {
        let (map, dropped) = TickerMap::from_rows(vec![
            row("brk.b", "BRK/B"),
            row("BRK.B", "IGNORED"),
            row(" arcc ", "ARCC"),
        ]);

        assert_eq!(dropped, 1);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("BRK.B"), Some("BRK/B"));
        assert_eq!(map.get("Brk.B"), Some("BRK/B"));
        assert_eq!(map.get("arcc"), Some("ARCC"));
        assert_eq!(map.resolve("MSFT"), "MSFT");
    }

    #[test]
    fn test_empty_rows() {
        let (map, dropped) = TickerMap::from_rows(Vec::new());
        assert!(map.is_empty());
        assert_eq!(dropped, 0);
    }

    proptest! {
        #[test]
        fn prop_first_value_is_retained(pairs in proptest::collection::vec(("[a-c]", 0u32..100), 0..40)) {
            let (map, dropped) = first_wins(pairs.clone(), |(k, _)| k.clone());

            prop_assert_eq!(map.len() + dropped, pairs.len());
            for (k, v) in &map {
                let first = pairs.iter().find(|(pk, _)| pk == k).map(|(_, pv)| *pv);
                prop_assert_eq!(Some(v.1), first);
            }
        }
    }
}
