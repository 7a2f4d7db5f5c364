//! 주문 불균형 적재 작업.

use backoffice_data::{SecurityPriceRepository, SharesImbalance};
use std::time::Instant;
use tracing::info;

use crate::{JobStats, Result};

/// 주문 불균형 스냅샷 적재. 스테이징 삭제, 적재, 병합이 하나의 트랜잭션입니다.
pub async fn load_shares_imbalance(
    repo: &SecurityPriceRepository,
    rows: Vec<SharesImbalance>,
) -> Result<JobStats> {
    let start = Instant::now();
    let mut stats = JobStats::new();
    stats.read = rows.len();

    info!(rows = rows.len(), "주문 불균형 적재 시작");
    let outcome = repo.save_shares_imbalance(&rows).await?;
    stats.record_outcome(&outcome);

    stats.elapsed = start.elapsed();
    Ok(stats)
}
