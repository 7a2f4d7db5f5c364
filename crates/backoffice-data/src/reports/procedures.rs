//! 저장 프로시저 기반 리포트.
//!
//! 프로시저 본문은 데이터베이스에 있으며, 여기서는 이름과 위치 파라미터만
//! 정합니다.

use backoffice_core::{normalize_ticker, DateRange};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::mysql::MySqlArguments;
use sqlx::query::QueryAs;
use sqlx::{FromRow, MySql};

/// 펀드 요약 프로시저 (fund, start, end).
pub const FUND_SUMMARY_PROCEDURE: &str = "spGetFundSummary";

/// 종목별 마진 이력 프로시저 (ticker, start, end).
pub const SECURITY_MARGIN_HISTORY_PROCEDURE: &str = "spGetSecurityMarginHistory";

const FUND_SUMMARY_CALL: &str = "CALL spGetFundSummary(?, ?, ?)";
const SECURITY_MARGIN_HISTORY_CALL: &str = "CALL spGetSecurityMarginHistory(?, ?, ?)";

/// 프로시저 결과 레코드.
pub trait ProcedureReport {
    /// 프로시저 이름
    const PROCEDURE: &'static str;
    /// 결과 컬럼 (직렬화 필드 순서와 같음)
    const COLUMNS: &'static [&'static str];
}

/// 펀드 일간 요약.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct FundSummaryRecord {
    pub fund_name: String,
    pub as_of_date: NaiveDate,
    pub nav: Option<Decimal>,
    pub long_market_value: Option<Decimal>,
    pub short_market_value: Option<Decimal>,
    pub gross_exposure: Option<Decimal>,
    pub net_exposure: Option<Decimal>,
    pub cash_balance: Option<Decimal>,
    pub margin_requirement: Option<Decimal>,
    pub daily_pnl: Option<Decimal>,
    pub mtd_pnl: Option<Decimal>,
    pub ytd_pnl: Option<Decimal>,
}

/// 종목별 브로커 마진 이력.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct SecurityMarginHistoryRecord {
    pub as_of_date: NaiveDate,
    pub ticker: String,
    pub fund_name: Option<String>,
    pub broker: Option<String>,
    pub quantity: Option<Decimal>,
    pub market_value: Option<Decimal>,
    pub margin_requirement: Option<Decimal>,
    /// 시장가치 대비 요구 마진 비율
    pub margin_pct: Option<Decimal>,
}

impl ProcedureReport for FundSummaryRecord {
    const PROCEDURE: &'static str = FUND_SUMMARY_PROCEDURE;
    const COLUMNS: &'static [&'static str] = &[
        "fund_name",
        "as_of_date",
        "nav",
        "long_market_value",
        "short_market_value",
        "gross_exposure",
        "net_exposure",
        "cash_balance",
        "margin_requirement",
        "daily_pnl",
        "mtd_pnl",
        "ytd_pnl",
    ];
}

impl ProcedureReport for SecurityMarginHistoryRecord {
    const PROCEDURE: &'static str = SECURITY_MARGIN_HISTORY_PROCEDURE;
    const COLUMNS: &'static [&'static str] = &[
        "as_of_date",
        "ticker",
        "fund_name",
        "broker",
        "quantity",
        "market_value",
        "margin_requirement",
        "margin_pct",
    ];
}

pub type ProcedureQuery<R> = QueryAs<'static, MySql, R, MySqlArguments>;

/// `spGetFundSummary` 호출 쿼리를 생성합니다.
pub fn fund_summary_query(fund: &str, range: &DateRange) -> ProcedureQuery<FundSummaryRecord> {
    sqlx::query_as(FUND_SUMMARY_CALL)
        .bind(fund.trim().to_string())
        .bind(range.start())
        .bind(range.end())
}

/// `spGetSecurityMarginHistory` 호출 쿼리를 생성합니다. 티커는 정규화 후 바인딩됩니다.
pub fn security_margin_history_query(
    ticker: &str,
    range: &DateRange,
) -> ProcedureQuery<SecurityMarginHistoryRecord> {
    sqlx::query_as(SECURITY_MARGIN_HISTORY_CALL)
        .bind(normalize_ticker(ticker))
        .bind(range.start())
        .bind(range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_header<T: Serialize>(record: &T) -> String {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(record).unwrap();
        let bytes = writer.into_inner().unwrap();
        String::from_utf8(bytes).unwrap().lines().next().unwrap().to_string()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()
    }

    #[test]
    fn test_columns_match_serialized_fields() {
        let summary = FundSummaryRecord {
            fund_name: "OPP".to_string(),
            as_of_date: date(),
            nav: None,
            long_market_value: None,
            short_market_value: None,
            gross_exposure: None,
            net_exposure: None,
            cash_balance: None,
            margin_requirement: None,
            daily_pnl: None,
            mtd_pnl: None,
            ytd_pnl: None,
        };
        assert_eq!(csv_header(&summary), FundSummaryRecord::COLUMNS.join(","));

        let history = SecurityMarginHistoryRecord {
            as_of_date: date(),
            ticker: "ABC".to_string(),
            fund_name: None,
            broker: None,
            quantity: None,
            market_value: None,
            margin_requirement: None,
            margin_pct: None,
        };
        assert_eq!(
            csv_header(&history),
            SecurityMarginHistoryRecord::COLUMNS.join(",")
        );
    }

    #[test]
    fn test_call_statements_name_their_procedure() {
        assert!(FUND_SUMMARY_CALL.contains(FUND_SUMMARY_PROCEDURE));
        assert!(SECURITY_MARGIN_HISTORY_CALL.contains(SECURITY_MARGIN_HISTORY_PROCEDURE));
        assert_eq!(FUND_SUMMARY_CALL.matches('?').count(), 3);
        assert_eq!(SECURITY_MARGIN_HISTORY_CALL.matches('?').count(), 3);
    }
}
