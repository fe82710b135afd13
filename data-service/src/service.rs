//! 数据查询服务模块

use common::config::DatabaseConfig;
use common::errors::{AppError, AppResult};
use sqlx::{Connection, MySqlConnection};
use tracing::{debug, warn};

/// 针对目标 MySQL 库的单次查询服务
pub struct DataService {
    config: DatabaseConfig,
}

impl DataService {
    /// 创建新的查询服务实例
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// 查询当前连接的数据库名
    ///
    /// 每次调用建立一条新连接，查询结束后显式关闭；出错路径上连接随
    /// drop 释放，不会在请求间累积。
    pub async fn database_name(&self) -> AppResult<String> {
        let mut conn = MySqlConnection::connect(&self.config.url())
            .await
            .map_err(|e| AppError::DatabaseConnection(e.to_string()))?;

        debug!(host = %self.config.host, database = %self.config.database, "connected");

        let row: (Option<String>,) = sqlx::query_as("SELECT DATABASE()")
            .fetch_one(&mut conn)
            .await
            .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;

        if let Err(e) = conn.close().await {
            warn!(error = %e, "connection close failed");
        }

        // SELECT DATABASE() 在未选定默认库时返回 NULL
        row.0
            .ok_or_else(|| AppError::DatabaseQuery("no database selected".to_string()))
    }
}
