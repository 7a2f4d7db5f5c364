//! 티커 정규화.

/// 필터 값에서 제거하는 거래소 접미사 (대문자 기준).
const EXCHANGE_SUFFIXES: &[&str] = &[" US EQUITY", " US"];

/// 티커 필터 값을 정규화합니다.
///
/// 앞뒤 공백을 제거하고 대문자로 바꾼 뒤, 블룸버그식 거래소 접미사
/// (`" US"`, `" US Equity"`)를 더 이상 남지 않을 때까지 제거합니다.
///
/// ```
/// use backoffice_core::normalize_ticker;
///
/// assert_eq!(normalize_ticker("ABC US"), "ABC");
/// assert_eq!(normalize_ticker("main us equity"), "MAIN");
/// ```
pub fn normalize_ticker(raw: &str) -> String {
    let mut ticker = raw.trim().to_uppercase();
    loop {
        let stripped = EXCHANGE_SUFFIXES
            .iter()
            .find_map(|suffix| ticker.strip_suffix(suffix))
            .map(|rest| rest.trim_end().to_string());
        match stripped {
            Some(rest) => ticker = rest,
            None => return ticker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_us_suffix() {
        assert_eq!(normalize_ticker("ABC US"), "ABC");
        assert_eq!(normalize_ticker("  arcc us  "), "ARCC");
        assert_eq!(normalize_ticker("ABC US Equity"), "ABC");
        assert_eq!(normalize_ticker("ABC US US"), "ABC");
    }

    #[test]
    fn test_keeps_tickers_without_suffix() {
        assert_eq!(normalize_ticker("MSFT"), "MSFT");
        assert_eq!(normalize_ticker("US"), "US");
        assert_eq!(normalize_ticker("BRK/B"), "BRK/B");
        // 접미사가 아니라 티커 일부인 경우
        assert_eq!(normalize_ticker("USAC"), "USAC");
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(raw in "[A-Za-z ]{0,16}") {
            let once = normalize_ticker(&raw);
            prop_assert_eq!(normalize_ticker(&once), once.clone());
        }

        #[test]
        fn prop_output_has_no_exchange_suffix(raw in "[A-Z]{1,5}( US| US EQUITY| us)*") {
            let normalized = normalize_ticker(&raw);
            prop_assert!(!normalized.ends_with(" US"));
            prop_assert!(!normalized.ends_with(" US EQUITY"));
            prop_assert_eq!(normalized.trim(), normalized.as_str());
        }
    }
}
