//! Interactive Brokers(IB) Flex 리포트.

use chrono::NaiveDate;
use rust_decimal::Decimal;

broker_report! {
    /// IB 오픈 포지션.
    IbPositions => IbPositionRecord {
        table: "ib_positions",
        date: "report_date",
        fund: Some("account_id"),
        ticker: Some("symbol"),
    }
    {
        fund_name: String,
        report_date: NaiveDate,
        symbol: Option<String>,
        conid: Option<String>,
        isin: Option<String>,
        asset_class: Option<String>,
        currency: Option<String>,
        position: Option<Decimal>,
        mark_price: Option<Decimal>,
        position_value: Option<Decimal>,
        cost_basis_money: Option<Decimal>,
        fifo_pnl_unrealized: Option<Decimal>,
        fx_rate_to_base: Option<Decimal>,
    }
}

broker_report! {
    /// IB 체결 내역.
    IbTrades => IbTradeRecord {
        table: "ib_trades",
        date: "trade_date",
        fund: Some("account_id"),
        ticker: Some("symbol"),
    }
    {
        fund_name: String,
        trade_date: NaiveDate,
        settle_date: Option<NaiveDate>,
        symbol: Option<String>,
        conid: Option<String>,
        buy_sell: Option<String>,
        quantity: Option<Decimal>,
        trade_price: Option<Decimal>,
        proceeds: Option<Decimal>,
        ib_commission: Option<Decimal>,
        fifo_pnl_realized: Option<Decimal>,
        currency: Option<String>,
    }
}

broker_report! {
    /// IB 통화별 현금 잔고.
    IbCashReport => IbCashReportRecord {
        table: "ib_cash_report",
        date: "report_date",
        fund: Some("account_id"),
        ticker: None,
    }
    {
        fund_name: String,
        report_date: NaiveDate,
        currency: Option<String>,
        starting_cash: Option<Decimal>,
        deposits: Option<Decimal>,
        withdrawals: Option<Decimal>,
        net_trades: Option<Decimal>,
        dividends: Option<Decimal>,
        broker_interest: Option<Decimal>,
        ending_cash: Option<Decimal>,
        fx_rate_to_base: Option<Decimal>,
    }
}
