//! BMO 리포트.

use chrono::NaiveDate;
use rust_decimal::Decimal;

broker_report! {
    BmoPositions => BmoPositionRecord {
        table: "bmo_positions",
        date: "file_date",
        fund: Some("account_code"),
        ticker: Some("ticker"),
    }
    {
        fund_name: String,
        file_date: NaiveDate,
        ticker: Option<String>,
        cusip: Option<String>,
        security_name: Option<String>,
        quantity: Option<Decimal>,
        price: Option<Decimal>,
        market_value: Option<Decimal>,
        market_value_base: Option<Decimal>,
        currency: Option<String>,
    }
}

broker_report! {
    BmoMargin => BmoMarginRecord {
        table: "bmo_margin",
        date: "file_date",
        fund: Some("account_code"),
        ticker: None,
    }
    {
        fund_name: String,
        file_date: NaiveDate,
        currency: Option<String>,
        trade_date_balance: Option<Decimal>,
        equity: Option<Decimal>,
        requirement: Option<Decimal>,
        excess_deficit: Option<Decimal>,
    }
}
