//! 데이터 모듈 오류 타입.

use backoffice_core::CoreError;
use thiserror::Error;

/// 데이터 계층 오류.
///
/// 데이터베이스 실패는 원래의 `sqlx::Error`를 그대로 담아 호출자에게 전달합니다.
#[derive(Debug, Error)]
pub enum DataError {
    /// 연결 풀 생성 실패
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    /// 쿼리 실행, 프로시저 호출, 행 매핑 실패
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 잘못된 조회 조건 (날짜 형식, 지원하지 않는 필터 등)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 설정 오류
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 일괄 적재 타임아웃
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// 리포트 직렬화 실패
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<CoreError> for DataError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(msg) => DataError::InvalidInput(msg),
            CoreError::Config(msg) => DataError::ConfigError(msg),
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::SerializationError(err.to_string())
    }
}

impl DataError {
    /// 행이 없어서 발생한 오류인지 확인합니다.
    pub fn is_row_not_found(&self) -> bool {
        matches!(self, DataError::Database(sqlx::Error::RowNotFound))
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
