//! 작업 실행 컨텍스트.

use backoffice_core::AppConfig;
use backoffice_data::{BrokerDataRepository, Database, SecurityPriceRepository};
use tracing::info;

use crate::Result;

/// 설정과 연결 풀, 그리고 작업이 쓰는 repository 묶음.
pub struct JobContext {
    pub config: AppConfig,
    pub db: Database,
}

impl JobContext {
    /// 설정의 데이터베이스에 연결합니다.
    pub async fn connect(config: AppConfig) -> Result<Self> {
        let db = Database::connect(&config.database).await?;
        info!("데이터베이스 연결 성공");
        Ok(Self { config, db })
    }

    pub fn broker_data(&self) -> BrokerDataRepository {
        BrokerDataRepository::new(self.db.clone(), self.config.fund_aliases.clone())
    }

    pub fn prices(&self) -> SecurityPriceRepository {
        SecurityPriceRepository::new(self.db.clone(), self.config.ingest.clone())
    }

    /// 연결 풀을 닫습니다.
    pub async fn close(self) {
        self.db.close().await;
    }
}
