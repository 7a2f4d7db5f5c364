//! 가격 적재 작업.

use backoffice_data::{DailyPrice, MonthEndPrice, SecurityPrice, SecurityPriceRepository};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{info, warn};

use crate::{JobStats, Result};

/// 스냅샷 행을 티커별로 모읍니다 (대소문자 구분 없음).
/// 저장되는 행의 티커도 키와 같은 대문자 형태로 바뀝니다.
///
/// 같은 티커가 여러 번 나오면 파일에서 나중에 나온 행이 남습니다
/// (스냅샷은 시간순으로 기록됨). 덮어쓴 행 수를 함께 반환합니다.
pub fn key_by_ticker(rows: Vec<SecurityPrice>) -> (HashMap<String, SecurityPrice>, usize) {
    let mut map = HashMap::with_capacity(rows.len());
    let mut replaced = 0;

    for mut row in rows {
        row.ticker = row.ticker.trim().to_uppercase();
        if map.insert(row.ticker.clone(), row).is_some() {
            replaced += 1;
        }
    }

    (map, replaced)
}

/// 실시간 가격 스냅샷 적재.
pub async fn load_security_prices(
    repo: &SecurityPriceRepository,
    rows: Vec<SecurityPrice>,
) -> Result<JobStats> {
    let start = Instant::now();
    let mut stats = JobStats::new();
    stats.read = rows.len();

    let (prices, replaced) = key_by_ticker(rows);
    if replaced > 0 {
        warn!(replaced, "중복 티커는 마지막 행으로 대체");
    }
    stats.skipped += replaced;

    info!(tickers = prices.len(), "실시간 가격 적재 시작");
    let outcome = repo.save_security_prices(&prices).await?;
    stats.record_outcome(&outcome);

    stats.elapsed = start.elapsed();
    Ok(stats)
}

/// 월말 가격 적재.
pub async fn load_month_end_prices(
    repo: &SecurityPriceRepository,
    rows: Vec<MonthEndPrice>,
) -> Result<JobStats> {
    let start = Instant::now();
    let mut stats = JobStats::new();
    stats.read = rows.len();

    info!(rows = rows.len(), "월말 가격 적재 시작");
    let outcome = repo.save_month_end_prices(&rows).await?;
    stats.record_outcome(&outcome);

    stats.elapsed = start.elapsed();
    Ok(stats)
}

/// 일간 가격 저장 (가격 적재 → FX 수익률 계산).
///
/// 단계 실패는 통계의 `errors`로 집계되며 에러로 반환되지 않습니다.
pub async fn save_daily_prices(
    repo: &SecurityPriceRepository,
    date: NaiveDate,
    rows: Vec<DailyPrice>,
) -> Result<JobStats> {
    let start = Instant::now();
    let mut stats = JobStats::new();
    stats.read = rows.len();

    let off_date = rows.iter().filter(|r| r.price_date != date).count();
    if off_date > 0 {
        warn!(%date, off_date, "기준일과 다른 가격 날짜가 포함됨");
    }

    info!(%date, rows = rows.len(), "일간 가격 저장 시작");
    let report = repo.save_daily_prices(date, &rows).await;

    stats.record_outcome(&report.prices);
    for (step, reason) in report.failures() {
        warn!(step, reason, "일간 가격 저장 단계 실패");
        stats.errors += 1;
    }

    stats.elapsed = start.elapsed();
    Ok(stats)
}
