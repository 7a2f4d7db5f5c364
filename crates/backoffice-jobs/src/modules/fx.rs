//! 환율 적재 작업.

use backoffice_data::{FxRate, SecurityPriceRepository};
use chrono::NaiveDate;
use std::time::Instant;
use tracing::info;

use crate::{JobStats, Result};

/// 실시간 환율 스냅샷 적재.
pub async fn load_fx_rates(repo: &SecurityPriceRepository, rows: Vec<FxRate>) -> Result<JobStats> {
    let start = Instant::now();
    let mut stats = JobStats::new();
    stats.read = rows.len();

    info!(rows = rows.len(), "환율 적재 시작");
    let outcome = repo.save_fx_rates(&rows).await?;
    stats.record_outcome(&outcome);

    stats.elapsed = start.elapsed();
    Ok(stats)
}

/// 지정일의 FX 수익률 계산.
pub async fn calc_fx_returns(repo: &SecurityPriceRepository, date: NaiveDate) -> Result<JobStats> {
    let start = Instant::now();
    let mut stats = JobStats::new();

    info!(%date, "FX 수익률 계산 시작");
    stats.merged = repo.calc_fx_returns(date).await?;

    stats.elapsed = start.elapsed();
    Ok(stats)
}
