//! Morgan Stanley 리포트.

use chrono::NaiveDate;
use rust_decimal::Decimal;

broker_report! {
    /// MS 포지션.
    MsPositions => MsPositionRecord {
        table: "ms_positions",
        date: "file_date",
        fund: Some("account_number"),
        ticker: Some("ticker"),
    }
    {
        fund_name: String,
        file_date: NaiveDate,
        ticker: Option<String>,
        cusip: Option<String>,
        sedol: Option<String>,
        isin: Option<String>,
        security_description: Option<String>,
        long_short: Option<String>,
        quantity: Option<Decimal>,
        price: Option<Decimal>,
        market_value: Option<Decimal>,
        market_value_usd: Option<Decimal>,
        currency: Option<String>,
    }
}

broker_report! {
    /// MS 스왑 거래 내역.
    MsSwapActivity => MsSwapActivityRecord {
        table: "ms_swap_activity",
        date: "trade_date",
        fund: Some("account_number"),
        ticker: Some("underlying_ticker"),
    }
    {
        fund_name: String,
        trade_date: NaiveDate,
        settle_date: Option<NaiveDate>,
        swap_number: Option<String>,
        underlying_ticker: Option<String>,
        underlying_sedol: Option<String>,
        activity_type: Option<String>,
        quantity: Option<Decimal>,
        price: Option<Decimal>,
        notional_usd: Option<Decimal>,
        spread_bps: Option<Decimal>,
        commission: Option<Decimal>,
    }
}

broker_report! {
    /// MS 세금 로트.
    MsTaxLots => MsTaxLotRecord {
        table: "ms_tax_lots",
        date: "file_date",
        fund: Some("account_number"),
        ticker: Some("ticker"),
    }
    {
        fund_name: String,
        file_date: NaiveDate,
        ticker: Option<String>,
        cusip: Option<String>,
        lot_number: Option<String>,
        acquisition_date: Option<NaiveDate>,
        quantity: Option<Decimal>,
        cost_per_share: Option<Decimal>,
        total_cost: Option<Decimal>,
        market_value: Option<Decimal>,
        unrealized_short_term: Option<Decimal>,
        unrealized_long_term: Option<Decimal>,
    }
}
