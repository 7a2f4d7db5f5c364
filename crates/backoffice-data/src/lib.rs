//! 브로커 리포트 조회 및 가격 데이터 적재.
//!
//! 이 crate는 다음을 제공합니다:
//! - MySQL 연결 풀 래퍼
//! - 브로커별 리포트 카탈로그와 기간 조회 (파라미터 바인딩)
//! - 티커 맵, 브로커 목록, 수수료율 조회 (첫 행 우선)
//! - 스테이징 테이블 → 병합 프로시저 방식의 일괄 적재

pub mod error;
pub mod ingest;
pub mod lookups;
pub mod reports;
pub mod repository;
pub mod storage;

pub use error::{DataError, Result};
pub use storage::database::Database;

pub use ingest::{
    ClearMode, DailyPrice, FxRate, IngestOutcome, MonthEndPrice, SecurityPrice, SharesImbalance,
    StagingPipeline, StagingRow,
};
pub use lookups::{Broker, CommissionRate, TickerMap};
pub use reports::{
    BrokerReport, FundSummaryRecord, ProcedureReport, ReportKind, ReportQuery, ReportSource,
    ReportTable, SecurityMarginHistoryRecord, SortOrder,
};
pub use repository::{
    BrokerDataRepository, DailySaveReport, LookupRepository, SecurityPriceRepository, StepStatus,
};
