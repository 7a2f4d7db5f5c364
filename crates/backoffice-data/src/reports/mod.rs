//! 브로커 리포트 카탈로그.
//!
//! 브로커별 리포트는 모두 같은 형태입니다: 기간(및 선택적 펀드/티커)으로
//! 테이블을 조회하고 각 행을 평평한 레코드로 매핑합니다. 리포트마다 조회
//! 함수를 따로 두지 않고, `broker_report!`로 레코드와 원천 정보를 선언한 뒤
//! 하나의 제네릭 조회 루틴(`query::select_statement`)이 SQL을 만듭니다.

#[macro_use]
mod macros;

pub mod baml;
pub mod bmo;
pub mod edf;
pub mod fidelity;
pub mod ib;
pub mod jpm;
pub mod morgan_stanley;
pub mod procedures;
pub mod query;
pub mod scotia;
pub mod td;
pub mod ubs;
pub mod vendor;

use backoffice_core::DateRange;
use serde::Serialize;
use sqlx::mysql::MySqlRow;
use sqlx::FromRow;
use std::fmt;

use crate::error::Result;

pub use procedures::{FundSummaryRecord, ProcedureReport, SecurityMarginHistoryRecord};

/// 별칭이 적용된 펀드 컬럼 이름.
pub const FUND_NAME_COLUMN: &str = "fund_name";

/// 정렬 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

/// 리포트 원천 테이블 정보.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSource {
    pub table: &'static str,
    /// 기간 조건과 정렬에 쓰는 날짜 컬럼
    pub date_column: &'static str,
    /// 펀드 별칭을 적용할 브로커 계좌 컬럼
    pub fund_column: Option<&'static str>,
    /// 티커 필터 컬럼
    pub ticker_column: Option<&'static str>,
    pub order: SortOrder,
}

/// 카탈로그에 등록된 리포트 레코드.
pub trait BrokerReport:
    for<'r> FromRow<'r, MySqlRow> + Serialize + Send + Sync + Unpin + 'static
{
    const KIND: ReportKind;
    const SOURCE: ReportSource;
    /// 선언 순서의 컬럼 목록
    const COLUMNS: &'static [&'static str];
}

/// 리포트 타입에 대해 제네릭 작업을 수행하는 방문자.
pub trait ReportVisitor {
    type Output;

    fn visit<R: BrokerReport>(self) -> Self::Output;
}

/// 리포트 조회 조건.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    pub range: DateRange,
    /// 별칭 적용 후 펀드 코드 (예: "OPP")
    pub fund: Option<String>,
    /// 티커 필터. 바인딩 전에 정규화됩니다.
    pub ticker: Option<String>,
}

impl ReportQuery {
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            fund: None,
            ticker: None,
        }
    }

    pub fn with_fund(mut self, fund: impl Into<String>) -> Self {
        self.fund = Some(fund.into());
        self
    }

    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }
}

/// 종류를 문자열로 받은 리포트 조회 결과 (내보내기용).
#[derive(Debug, Clone, Serialize)]
pub struct ReportTable {
    pub kind: &'static str,
    pub columns: Vec<&'static str>,
    pub rows: Vec<serde_json::Value>,
}

impl ReportTable {
    /// 레코드 목록을 컬럼 순서를 보존한 표로 변환합니다.
    pub fn from_records<R: BrokerReport>(records: &[R]) -> Result<Self> {
        let rows = records
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            kind: R::KIND.as_str(),
            columns: R::COLUMNS.to_vec(),
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

report_catalog! {
    JpmMargin => "jpm-margin" => jpm::JpmMarginRecord,
    JpmPositions => "jpm-positions" => jpm::JpmPositionRecord,
    JpmSwapActivity => "jpm-swap-activity" => jpm::JpmSwapActivityRecord,
    JpmCorporateActions => "jpm-corporate-actions" => jpm::JpmCorporateActionRecord,
    FidelityPositions => "fidelity-positions" => fidelity::FidelityPositionRecord,
    FidelityTaxLots => "fidelity-tax-lots" => fidelity::FidelityTaxLotRecord,
    FidelityTrades => "fidelity-trades" => fidelity::FidelityTradeRecord,
    FidelityMargin => "fidelity-margin" => fidelity::FidelityMarginRecord,
    ScotiaPositions => "scotia-positions" => scotia::ScotiaPositionRecord,
    ScotiaMargin => "scotia-margin" => scotia::ScotiaMarginRecord,
    TdPositions => "td-positions" => td::TdPositionRecord,
    TdTrades => "td-trades" => td::TdTradeRecord,
    IbPositions => "ib-positions" => ib::IbPositionRecord,
    IbTrades => "ib-trades" => ib::IbTradeRecord,
    IbCashReport => "ib-cash-report" => ib::IbCashReportRecord,
    BmoPositions => "bmo-positions" => bmo::BmoPositionRecord,
    BmoMargin => "bmo-margin" => bmo::BmoMarginRecord,
    UbsSwapPositions => "ubs-swap-positions" => ubs::UbsSwapPositionRecord,
    UbsMargin => "ubs-margin" => ubs::UbsMarginRecord,
    MsPositions => "ms-positions" => morgan_stanley::MsPositionRecord,
    MsSwapActivity => "ms-swap-activity" => morgan_stanley::MsSwapActivityRecord,
    MsTaxLots => "ms-tax-lots" => morgan_stanley::MsTaxLotRecord,
    BamlPositions => "baml-positions" => baml::BamlPositionRecord,
    BamlMargin => "baml-margin" => baml::BamlMarginRecord,
    EdfFuturesPositions => "edf-futures-positions" => edf::EdfFuturesPositionRecord,
    EdfMargin => "edf-margin" => edf::EdfMarginRecord,
    SecurityPriceHistory => "security-price-history" => vendor::SecurityPriceHistoryRecord,
    BdcResearch => "bdc-research" => vendor::BdcResearchRecord,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
