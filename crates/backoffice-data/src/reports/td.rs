//! TD 리포트.

use chrono::NaiveDate;
use rust_decimal::Decimal;

broker_report! {
    TdPositions => TdPositionRecord {
        table: "td_positions",
        date: "file_date",
        fund: Some("account_number"),
        ticker: Some("symbol"),
    }
    {
        fund_name: String,
        file_date: NaiveDate,
        symbol: Option<String>,
        cusip: Option<String>,
        security_description: Option<String>,
        quantity: Option<Decimal>,
        closing_price: Option<Decimal>,
        market_value: Option<Decimal>,
        book_value: Option<Decimal>,
        currency: Option<String>,
    }
}

broker_report! {
    TdTrades => TdTradeRecord {
        table: "td_trades",
        date: "trade_date",
        fund: Some("account_number"),
        ticker: Some("symbol"),
    }
    {
        fund_name: String,
        trade_date: NaiveDate,
        settle_date: Option<NaiveDate>,
        symbol: Option<String>,
        cusip: Option<String>,
        transaction_code: Option<String>,
        quantity: Option<Decimal>,
        price: Option<Decimal>,
        gross_amount: Option<Decimal>,
        commission: Option<Decimal>,
        net_amount: Option<Decimal>,
        currency: Option<String>,
    }
}
