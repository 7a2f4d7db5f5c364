//! JPM 프라임 브로커 리포트.

use chrono::NaiveDate;
use rust_decimal::Decimal;

broker_report! {
    /// JPM 마진 상세 (계좌별 일간 마진 요약).
    JpmMargin => JpmMarginRecord {
        table: "jpm_margin_detail",
        date: "file_date",
        fund: Some("account_number"),
        ticker: None,
    }
    {
        fund_name: String,
        file_date: NaiveDate,
        as_of_date: Option<NaiveDate>,
        currency: Option<String>,
        long_market_value: Option<Decimal>,
        short_market_value: Option<Decimal>,
        cash_balance: Option<Decimal>,
        net_equity: Option<Decimal>,
        house_requirement: Option<Decimal>,
        exchange_requirement: Option<Decimal>,
        /// 잉여(+)/부족(-) 금액
        excess_deficit: Option<Decimal>,
    }
}

broker_report! {
    /// JPM 포지션.
    JpmPositions => JpmPositionRecord {
        table: "jpm_positions",
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
        security_type: Option<String>,
        quantity: Option<Decimal>,
        price: Option<Decimal>,
        market_value: Option<Decimal>,
        market_value_base: Option<Decimal>,
        local_currency: Option<String>,
        accrued_interest: Option<Decimal>,
    }
}

broker_report! {
    /// JPM 스왑 거래 내역.
    JpmSwapActivity => JpmSwapActivityRecord {
        table: "jpm_swap_activity",
        date: "trade_date",
        fund: Some("account_number"),
        ticker: Some("underlying_ticker"),
    }
    {
        fund_name: String,
        file_date: Option<NaiveDate>,
        trade_date: NaiveDate,
        settle_date: Option<NaiveDate>,
        swap_id: Option<String>,
        underlying_ticker: Option<String>,
        underlying_cusip: Option<String>,
        transaction_type: Option<String>,
        quantity: Option<Decimal>,
        price: Option<Decimal>,
        notional: Option<Decimal>,
        financing_rate: Option<Decimal>,
        financing_spread: Option<Decimal>,
        commission: Option<Decimal>,
        currency: Option<String>,
    }
}

broker_report! {
    /// JPM 기업 행위(배당, 분할 등).
    JpmCorporateActions => JpmCorporateActionRecord {
        table: "jpm_corporate_actions",
        date: "file_date",
        fund: Some("account_number"),
        ticker: Some("ticker"),
    }
    {
        fund_name: String,
        file_date: NaiveDate,
        event_type: Option<String>,
        ticker: Option<String>,
        cusip: Option<String>,
        ex_date: Option<NaiveDate>,
        record_date: Option<NaiveDate>,
        pay_date: Option<NaiveDate>,
        rate: Option<Decimal>,
        quantity: Option<Decimal>,
        entitlement_amount: Option<Decimal>,
        withholding_tax: Option<Decimal>,
        currency: Option<String>,
    }
}
