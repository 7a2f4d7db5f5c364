//! 데이터베이스 상태 확인.

use backoffice_data::Database;
use std::time::{Duration, Instant};
use tracing::info;

use crate::Result;

/// `SELECT 1` 왕복 시간을 측정합니다.
pub async fn health_check(db: &Database) -> Result<Duration> {
    let start = Instant::now();
    db.health_check().await?;
    let latency = start.elapsed();

    info!(latency_ms = latency.as_millis() as u64, "데이터베이스 상태 정상");
    Ok(latency)
}
