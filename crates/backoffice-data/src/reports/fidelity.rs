//! Fidelity 리포트.

use chrono::NaiveDate;
use rust_decimal::Decimal;

broker_report! {
    /// Fidelity 포지션.
    FidelityPositions => FidelityPositionRecord {
        table: "fidelity_positions",
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
        position_type: Option<String>,
        quantity: Option<Decimal>,
        price: Option<Decimal>,
        market_value: Option<Decimal>,
        cost_basis: Option<Decimal>,
        unrealized_gain_loss: Option<Decimal>,
    }
}

broker_report! {
    /// Fidelity 세금 로트.
    FidelityTaxLots => FidelityTaxLotRecord {
        table: "fidelity_tax_lots",
        date: "file_date",
        fund: Some("account_number"),
        ticker: Some("symbol"),
    }
    {
        fund_name: String,
        file_date: NaiveDate,
        symbol: Option<String>,
        cusip: Option<String>,
        lot_id: Option<String>,
        open_date: Option<NaiveDate>,
        quantity: Option<Decimal>,
        unit_cost: Option<Decimal>,
        cost_basis: Option<Decimal>,
        market_value: Option<Decimal>,
        unrealized_gain_loss: Option<Decimal>,
        /// "SHORT" / "LONG"
        holding_period: Option<String>,
    }
}

broker_report! {
    /// Fidelity 체결 내역.
    FidelityTrades => FidelityTradeRecord {
        table: "fidelity_trades",
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
        side: Option<String>,
        quantity: Option<Decimal>,
        price: Option<Decimal>,
        principal: Option<Decimal>,
        commission: Option<Decimal>,
        fees: Option<Decimal>,
        net_amount: Option<Decimal>,
        executing_broker: Option<String>,
    }
}

broker_report! {
    /// Fidelity 마진.
    FidelityMargin => FidelityMarginRecord {
        table: "fidelity_margin",
        date: "file_date",
        fund: Some("account_number"),
        ticker: None,
    }
    {
        fund_name: String,
        file_date: NaiveDate,
        margin_balance: Option<Decimal>,
        short_balance: Option<Decimal>,
        market_value_long: Option<Decimal>,
        market_value_short: Option<Decimal>,
        maintenance_requirement: Option<Decimal>,
        margin_equity: Option<Decimal>,
        buying_power: Option<Decimal>,
    }
}
