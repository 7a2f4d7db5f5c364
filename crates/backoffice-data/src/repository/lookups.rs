//! 조회용 맵 repository.

use std::collections::HashMap;
use tracing::{debug, error, instrument};

use crate::error::Result;
use crate::lookups::{
    first_wins, Broker, CommissionRate, TickerMap, TickerMapRow, BROKERS_SQL,
    COMMISSION_RATES_SQL, TICKER_MAP_SQL,
};
use crate::storage::database::Database;

/// 티커 맵, 브로커, 수수료율 조회.
#[derive(Clone)]
pub struct LookupRepository {
    db: Database,
}

impl LookupRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 원본 → 대상 티커 맵.
    #[instrument(skip(self))]
    pub async fn ticker_map(&self) -> Result<TickerMap> {
        let rows: Vec<TickerMapRow> = sqlx::query_as(TICKER_MAP_SQL)
            .fetch_all(self.db.pool())
            .await
            .inspect_err(|e| error!(error = %e, "Failed to load ticker map"))?;

        let (map, dropped) = TickerMap::from_rows(rows);
        debug!(entries = map.len(), dropped, "Ticker map loaded");
        Ok(map)
    }

    /// 브로커 코드별 브로커.
    #[instrument(skip(self))]
    pub async fn brokers(&self) -> Result<HashMap<String, Broker>> {
        let rows: Vec<Broker> = sqlx::query_as(BROKERS_SQL)
            .fetch_all(self.db.pool())
            .await
            .inspect_err(|e| error!(error = %e, "Failed to load brokers"))?;

        let (map, dropped) = first_wins(rows, |b| b.broker_code.clone());
        debug!(entries = map.len(), dropped, "Brokers loaded");
        Ok(map)
    }

    /// 브로커 코드별 수수료율.
    #[instrument(skip(self))]
    pub async fn commission_rates(&self) -> Result<HashMap<String, CommissionRate>> {
        let rows: Vec<CommissionRate> = sqlx::query_as(COMMISSION_RATES_SQL)
            .fetch_all(self.db.pool())
            .await
            .inspect_err(|e| error!(error = %e, "Failed to load commission rates"))?;

        let (map, dropped) = first_wins(rows, |r| r.broker_code.clone());
        debug!(entries = map.len(), dropped, "Commission rates loaded");
        Ok(map)
    }
}
