//! MySQL 연결 풀 래퍼.

use backoffice_core::DatabaseConfig;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use crate::error::{DataError, Result};

/// 데이터베이스 연결 풀 래퍼.
///
/// 각 작업은 풀에서 연결 하나를 빌려 쓰고, 작업이 끝나거나 실패하면
/// 연결이 drop되면서 풀로 반환됩니다.
#[derive(Clone)]
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    /// 새로운 데이터베이스 연결 풀을 생성합니다.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!(
            max_connections = config.max_connections,
            "Connecting to database..."
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(config.idle_timeout())
            .connect(&config.url)
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        info!("Database connection established");

        Ok(Self { pool })
    }

    /// 첫 사용 시점에 연결하는 풀을 생성합니다.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(0)
            .acquire_timeout(config.connect_timeout())
            .connect_lazy(&config.url)
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        Ok(Self { pool })
    }

    /// 기존 연결 풀에서 Database 인스턴스를 생성합니다.
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// 내부 연결 풀을 반환합니다.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// 데이터베이스 상태를 확인합니다.
    pub async fn health_check(&self) -> Result<bool> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(true)
    }

    /// 풀을 닫고 모든 연결이 반환될 때까지 기다립니다.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
