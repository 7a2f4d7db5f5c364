//! UBS 리포트.

use chrono::NaiveDate;
use rust_decimal::Decimal;

broker_report! {
    /// UBS 스왑 포지션 (기초자산별).
    UbsSwapPositions => UbsSwapPositionRecord {
        table: "ubs_swap_positions",
        date: "valuation_date",
        fund: Some("portfolio_code"),
        ticker: Some("underlying_ticker"),
    }
    {
        fund_name: String,
        valuation_date: NaiveDate,
        swap_reference: Option<String>,
        underlying_ticker: Option<String>,
        underlying_isin: Option<String>,
        quantity: Option<Decimal>,
        reset_price: Option<Decimal>,
        current_price: Option<Decimal>,
        notional: Option<Decimal>,
        equity_pnl: Option<Decimal>,
        financing_accrual: Option<Decimal>,
        dividend_accrual: Option<Decimal>,
        currency: Option<String>,
    }
}

broker_report! {
    /// UBS 마진.
    UbsMargin => UbsMarginRecord {
        table: "ubs_margin",
        date: "valuation_date",
        fund: Some("portfolio_code"),
        ticker: None,
    }
    {
        fund_name: String,
        valuation_date: NaiveDate,
        currency: Option<String>,
        independent_amount: Option<Decimal>,
        variation_margin: Option<Decimal>,
        collateral_held: Option<Decimal>,
        margin_call: Option<Decimal>,
    }
}
