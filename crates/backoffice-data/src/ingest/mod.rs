//! 스테이징 테이블 → 병합 프로시저 방식의 일괄 적재.

pub mod records;
pub mod staging;

pub use records::{DailyPrice, FxRate, MonthEndPrice, SecurityPrice, SharesImbalance};
pub use staging::{
    clear_staging, insert_statement, merge_staging, rows_per_statement, stage_rows, ClearMode,
    IngestOutcome, StagingPipeline, StagingRow,
};
