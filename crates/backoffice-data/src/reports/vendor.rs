//! 벤더/내부 리포트 (펀드 구분 없음).

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

broker_report! {
    /// 병합된 일간 가격 이력.
    SecurityPriceHistory => SecurityPriceHistoryRecord {
        table: "security_price_history",
        date: "price_date",
        fund: None,
        ticker: Some("ticker"),
    }
    {
        price_date: NaiveDate,
        ticker: String,
        bid: Option<Decimal>,
        ask: Option<Decimal>,
        last: Option<Decimal>,
        close: Option<Decimal>,
        source: Option<String>,
        updated_at: Option<NaiveDateTime>,
    }
}

broker_report! {
    /// BDC(Business Development Company) 리서치 지표.
    ///
    /// 티커 필터는 `" US"` 접미사를 제거한 뒤 바인딩됩니다.
    BdcResearch => BdcResearchRecord {
        table: "bdc_research",
        date: "as_of_date",
        fund: None,
        ticker: Some("ticker"),
    }
    {
        as_of_date: NaiveDate,
        ticker: String,
        company_name: Option<String>,
        nav_per_share: Option<Decimal>,
        price_to_nav: Option<Decimal>,
        dividend_yield: Option<Decimal>,
        net_investment_income: Option<Decimal>,
        non_accrual_pct: Option<Decimal>,
        analyst_rating: Option<String>,
    }
}
