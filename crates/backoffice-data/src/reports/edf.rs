//! EDF Man(선물 청산) 리포트.

use chrono::NaiveDate;
use rust_decimal::Decimal;

broker_report! {
    /// EDF 선물 포지션.
    EdfFuturesPositions => EdfFuturesPositionRecord {
        table: "edf_futures_positions",
        date: "business_date",
        fund: Some("account"),
        ticker: Some("contract_symbol"),
    }
    {
        fund_name: String,
        business_date: NaiveDate,
        exchange_code: Option<String>,
        contract_symbol: Option<String>,
        contract_month: Option<String>,
        long_quantity: Option<Decimal>,
        short_quantity: Option<Decimal>,
        trade_price: Option<Decimal>,
        settlement_price: Option<Decimal>,
        open_trade_equity: Option<Decimal>,
        multiplier: Option<Decimal>,
        currency: Option<String>,
    }
}

broker_report! {
    /// EDF 증거금.
    EdfMargin => EdfMarginRecord {
        table: "edf_margin",
        date: "business_date",
        fund: Some("account"),
        ticker: None,
    }
    {
        fund_name: String,
        business_date: NaiveDate,
        currency: Option<String>,
        cash_balance: Option<Decimal>,
        open_trade_equity: Option<Decimal>,
        total_equity: Option<Decimal>,
        initial_margin: Option<Decimal>,
        maintenance_margin: Option<Decimal>,
        excess_deficit: Option<Decimal>,
    }
}
