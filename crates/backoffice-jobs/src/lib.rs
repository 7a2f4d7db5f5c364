//! 백오피스 스케줄 작업.
//!
//! 스케줄러가 호출하는 바이너리를 제공합니다:
//! - 가격/환율/주문 불균형 스냅샷 적재 (스테이징 → 병합 프로시저)
//! - 일간 가격 저장과 FX 수익률 계산
//! - 리포트 내보내기 (JSON, CSV)

pub mod context;
pub mod error;
pub mod modules;
pub mod stats;

pub use context::JobContext;
pub use error::{JobError, Result};
pub use stats::JobStats;
