//! 작업 통계 구조체.

use backoffice_data::IngestOutcome;
use serde::Serialize;
use std::time::Duration;

use crate::error::{JobError, Result};

/// 작업 통계
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobStats {
    /// 입력에서 읽은 행 수
    pub read: usize,
    /// 스테이징에 적재한 행 수
    pub staged: u64,
    /// 병합/계산 프로시저가 보고한 영향 행 수
    pub merged: u64,
    /// 건너뛴 행 또는 단계 수 (중복 키, 빈 입력)
    pub skipped: usize,
    /// 실패한 단계 수
    pub errors: usize,
    /// 내보낸 행 수
    pub exported: usize,
    /// 소요 시간
    #[serde(skip)]
    pub elapsed: Duration,
}

impl JobStats {
    /// 새 통계 객체 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 적재 사이클 결과를 반영합니다.
    pub fn record_outcome(&mut self, outcome: &IngestOutcome) {
        if outcome.is_skipped() {
            self.skipped += 1;
            return;
        }
        self.staged += outcome.staged;
        self.merged += outcome.merged.unwrap_or(0);
    }

    /// 실패 없이 끝났는지 여부
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    /// 실패한 단계가 있으면 `JobError::Partial`을 반환합니다.
    pub fn ensure_success(&self, operation: &str) -> Result<()> {
        if self.is_success() {
            return Ok(());
        }
        Err(JobError::Partial(format!(
            "{}: {} step(s) failed",
            operation, self.errors
        )))
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            read = self.read,
            staged = self.staged,
            merged = self.merged,
            skipped = self.skipped,
            errors = self.errors,
            exported = self.exported,
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "작업 완료"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_success_reports_partial_failure() {
        let mut stats = JobStats::new();
        assert!(stats.ensure_success("일간 가격 저장").is_ok());

        stats.errors = 1;
        let err = stats.ensure_success("일간 가격 저장").unwrap_err();
        assert!(matches!(err, JobError::Partial(_)));
        assert!(err.to_string().contains("1 step(s) failed"));
    }

    #[test]
    fn test_record_outcome() {
        let mut stats = JobStats::new();
        stats.record_outcome(&IngestOutcome {
            cleared: true,
            staged: 120,
            merged: Some(118),
        });
        stats.record_outcome(&IngestOutcome::skipped());

        assert_eq!(stats.staged, 120);
        assert_eq!(stats.merged, 118);
        assert_eq!(stats.skipped, 1);
        assert!(stats.is_success());
    }
}
