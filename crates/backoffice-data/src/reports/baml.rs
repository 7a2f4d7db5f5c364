//! BAML(BofA Merrill Lynch) 리포트.

use chrono::NaiveDate;
use rust_decimal::Decimal;

broker_report! {
    BamlPositions => BamlPositionRecord {
        table: "baml_positions",
        date: "file_date",
        fund: Some("account_number"),
        ticker: Some("ticker"),
    }
    {
        fund_name: String,
        file_date: NaiveDate,
        ticker: Option<String>,
        cusip: Option<String>,
        isin: Option<String>,
        security_description: Option<String>,
        quantity: Option<Decimal>,
        price: Option<Decimal>,
        market_value_local: Option<Decimal>,
        market_value_usd: Option<Decimal>,
        currency: Option<String>,
    }
}

broker_report! {
    BamlMargin => BamlMarginRecord {
        table: "baml_margin",
        date: "file_date",
        fund: Some("account_number"),
        ticker: None,
    }
    {
        fund_name: String,
        file_date: NaiveDate,
        currency: Option<String>,
        net_liquidating_value: Option<Decimal>,
        gross_market_value: Option<Decimal>,
        total_requirement: Option<Decimal>,
        excess_equity: Option<Decimal>,
        financing_balance: Option<Decimal>,
    }
}
