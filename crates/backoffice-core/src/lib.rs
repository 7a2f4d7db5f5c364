//! # Backoffice Core
//!
//! 백오피스 데이터 계층 전반에서 공유하는 기본 구성 요소를 제공합니다:
//! - 설정 관리 (파일 + 환경 변수)
//! - 로깅 인프라
//! - 조회 기간, 펀드 별칭, 티커 정규화 같은 값 타입

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use types::*;
