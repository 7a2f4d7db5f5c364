//! 적재 입력 레코드.
//!
//! 업스트림 스냅샷(CSV 등)에서 역직렬화되어 스테이징 테이블에 적재된 뒤
//! 병합이 끝나면 버려집니다.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::query_builder::Separated;
use sqlx::MySql;

use super::staging::StagingRow;

/// 실시간 가격 스냅샷.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityPrice {
    pub ticker: String,
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub last: Option<Decimal>,
    pub source: Option<String>,
    pub trade_time: Option<NaiveDateTime>,
    /// 지연 시세가 아닌 실시간 시세 여부
    #[serde(default)]
    pub is_real_time: bool,
}

impl StagingRow for SecurityPrice {
    const NAME: &'static str = "security_prices";
    const STAGING_TABLE: &'static str = "neovest_prices_staging";
    const MERGE_PROCEDURE: &'static str = "spPopulateNeovestPrices";
    const COLUMNS: &'static [&'static str] = &[
        "ticker",
        "bid",
        "ask",
        "last",
        "source",
        "trade_time",
        "is_real_time",
    ];

    fn bind_values(&self, row: &mut Separated<'_, 'static, MySql, &'static str>) {
        row.push_bind(self.ticker.clone())
            .push_bind(self.bid)
            .push_bind(self.ask)
            .push_bind(self.last)
            .push_bind(self.source.clone())
            .push_bind(self.trade_time)
            .push_bind(self.is_real_time);
    }
}

/// 실시간 환율.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxRate {
    pub base_currency: String,
    pub quote_currency: String,
    pub rate: Decimal,
    pub source: Option<String>,
    pub as_of: NaiveDateTime,
}

impl FxRate {
    /// "EURUSD" 형식의 통화쌍.
    pub fn pair(&self) -> String {
        format!("{}{}", self.base_currency, self.quote_currency)
    }
}

impl StagingRow for FxRate {
    const NAME: &'static str = "fx_rates";
    const STAGING_TABLE: &'static str = "live_fx_rates_staging";
    const MERGE_PROCEDURE: &'static str = "spPopulateLiveFXRates";
    const COLUMNS: &'static [&'static str] =
        &["base_currency", "quote_currency", "rate", "source", "as_of"];

    fn bind_values(&self, row: &mut Separated<'_, 'static, MySql, &'static str>) {
        row.push_bind(self.base_currency.clone())
            .push_bind(self.quote_currency.clone())
            .push_bind(self.rate)
            .push_bind(self.source.clone())
            .push_bind(self.as_of);
    }
}

/// 장 마감 주문 불균형.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharesImbalance {
    pub ticker: String,
    /// "BUY" / "SELL"
    pub side: Option<String>,
    pub imbalance_shares: Option<Decimal>,
    pub paired_shares: Option<Decimal>,
    pub reference_price: Option<Decimal>,
    pub source: Option<String>,
    pub as_of: NaiveDateTime,
}

impl StagingRow for SharesImbalance {
    const NAME: &'static str = "shares_imbalance";
    const STAGING_TABLE: &'static str = "shares_imbalance_staging";
    const MERGE_PROCEDURE: &'static str = "spPopulateSharesImbalanceData";
    const COLUMNS: &'static [&'static str] = &[
        "ticker",
        "side",
        "imbalance_shares",
        "paired_shares",
        "reference_price",
        "source",
        "as_of",
    ];

    fn bind_values(&self, row: &mut Separated<'_, 'static, MySql, &'static str>) {
        row.push_bind(self.ticker.clone())
            .push_bind(self.side.clone())
            .push_bind(self.imbalance_shares)
            .push_bind(self.paired_shares)
            .push_bind(self.reference_price)
            .push_bind(self.source.clone())
            .push_bind(self.as_of);
    }
}

/// 일간 종가.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPrice {
    pub ticker: String,
    pub price_date: NaiveDate,
    pub close_price: Option<Decimal>,
    pub currency: Option<String>,
    pub source: Option<String>,
}

impl StagingRow for DailyPrice {
    const NAME: &'static str = "daily_prices";
    const STAGING_TABLE: &'static str = "daily_prices_staging";
    const MERGE_PROCEDURE: &'static str = "spPopulateDailyPrices";
    const COLUMNS: &'static [&'static str] =
        &["ticker", "price_date", "close_price", "currency", "source"];

    fn bind_values(&self, row: &mut Separated<'_, 'static, MySql, &'static str>) {
        row.push_bind(self.ticker.clone())
            .push_bind(self.price_date)
            .push_bind(self.close_price)
            .push_bind(self.currency.clone())
            .push_bind(self.source.clone());
    }
}

/// 월말 가격.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthEndPrice {
    pub ticker: String,
    pub month_end_date: NaiveDate,
    pub price: Option<Decimal>,
    pub currency: Option<String>,
    pub source: Option<String>,
}

impl StagingRow for MonthEndPrice {
    const NAME: &'static str = "month_end_prices";
    const STAGING_TABLE: &'static str = "month_end_prices_staging";
    const MERGE_PROCEDURE: &'static str = "spPopulateMonthEndPrices";
    const COLUMNS: &'static [&'static str] =
        &["ticker", "month_end_date", "price", "currency", "source"];

    fn bind_values(&self, row: &mut Separated<'_, 'static, MySql, &'static str>) {
        row.push_bind(self.ticker.clone())
            .push_bind(self.month_end_date)
            .push_bind(self.price)
            .push_bind(self.currency.clone())
            .push_bind(self.source.clone());
    }
}
