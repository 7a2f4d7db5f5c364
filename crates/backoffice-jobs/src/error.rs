//! 에러 타입 정의.

use backoffice_core::CoreError;
use backoffice_data::DataError;
use thiserror::Error;

/// 작업 에러 타입
#[derive(Debug, Error)]
pub enum JobError {
    /// 데이터 계층 에러
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// 설정 에러
    #[error("Configuration error: {0}")]
    Config(#[from] CoreError),

    /// 스냅샷 파일 읽기/쓰기 에러
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV 파싱/쓰기 에러
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON 쓰기 에러
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 일부 단계 실패
    #[error("Job finished with failures: {0}")]
    Partial(String),
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, JobError>;
