//! Scotia 리포트.

use chrono::NaiveDate;
use rust_decimal::Decimal;

broker_report! {
    /// Scotia 포지션.
    ScotiaPositions => ScotiaPositionRecord {
        table: "scotia_positions",
        date: "as_of_date",
        fund: Some("account_id"),
        ticker: Some("ticker"),
    }
    {
        fund_name: String,
        as_of_date: NaiveDate,
        ticker: Option<String>,
        cusip: Option<String>,
        isin: Option<String>,
        security_name: Option<String>,
        quantity: Option<Decimal>,
        price_local: Option<Decimal>,
        market_value_local: Option<Decimal>,
        market_value_cad: Option<Decimal>,
        fx_rate: Option<Decimal>,
        currency: Option<String>,
    }
}

broker_report! {
    /// Scotia 마진.
    ScotiaMargin => ScotiaMarginRecord {
        table: "scotia_margin",
        date: "as_of_date",
        fund: Some("account_id"),
        ticker: None,
    }
    {
        fund_name: String,
        as_of_date: NaiveDate,
        currency: Option<String>,
        cash_balance: Option<Decimal>,
        long_market_value: Option<Decimal>,
        short_market_value: Option<Decimal>,
        margin_required: Option<Decimal>,
        margin_excess: Option<Decimal>,
    }
}
