// ==========================================
// 酒店连锁运营管理 - 应用状态
// ==========================================
// 职责: 持有唯一数据库连接，装配全部仓储与报表引擎
// 生命周期: 启动时 open 一次，退出时 shutdown 一次
// ==========================================

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::config::AppConfig;
use crate::db::{close_sqlite_connection, init_schema, open_sqlite_connection};
use crate::report::ReportEngine;
use crate::repository::{
    AssignmentRepository, BookingRepository, CustomerRepository, IdAllocator,
    MaintenanceCompanyRepository, RepairRepository, RepositoryError, RepositoryResult,
    RequestRepository, RoomRepository, StoreExecutor,
};

/// 应用状态
///
/// 所有仓储共享同一个连接与同一个主键分配器
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    pub customers: CustomerRepository,
    pub rooms: RoomRepository,
    pub companies: MaintenanceCompanyRepository,
    pub repairs: RepairRepository,
    pub bookings: BookingRepository,
    pub assignments: AssignmentRepository,
    pub requests: RequestRepository,

    /// 报表引擎
    pub reports: ReportEngine,

    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// 按配置打开数据库并装配应用状态
    ///
    /// # 返回
    /// - Err(DatabaseConnectionError): 无法打开数据库或建表失败（启动期致命）
    pub fn open(config: &AppConfig) -> RepositoryResult<Self> {
        tracing::info!("初始化AppState，数据库路径: {}", config.db_path);

        let conn = open_sqlite_connection(&config.db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(format!("无法打开数据库: {}", e)))?;

        if config.init_schema {
            init_schema(&conn)
                .map_err(|e| RepositoryError::DatabaseConnectionError(format!("建表失败: {}", e)))?;
        }

        Ok(Self::from_connection(
            config.db_path.clone(),
            conn,
            &config.delimiter,
        ))
    }

    /// 从已打开的连接装配（测试与嵌入场景）
    pub fn from_connection(db_path: String, conn: Connection, delimiter: &str) -> Self {
        let conn = Arc::new(Mutex::new(conn));
        let executor = StoreExecutor::new(conn.clone()).with_delimiter(delimiter);
        let allocator = Arc::new(IdAllocator::new());

        Self {
            db_path,
            customers: CustomerRepository::new(executor.clone()),
            rooms: RoomRepository::new(executor.clone()),
            companies: MaintenanceCompanyRepository::new(executor.clone()),
            repairs: RepairRepository::new(executor.clone()),
            bookings: BookingRepository::new(executor.clone(), allocator.clone()),
            assignments: AssignmentRepository::new(executor.clone(), allocator.clone()),
            requests: RequestRepository::new(executor.clone(), allocator),
            reports: ReportEngine::new(executor),
            conn,
        }
    }

    /// 关闭连接
    ///
    /// 消耗 self，因此只会执行一次；关闭失败只记录日志
    pub fn shutdown(self) {
        let conn = self.conn.clone();
        // 先释放所有仓储持有的连接引用
        drop(self);

        match Arc::try_unwrap(conn) {
            Ok(mutex) => {
                let conn = mutex.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());
                close_sqlite_connection(conn);
                tracing::info!("数据库连接已关闭");
            }
            Err(_) => {
                tracing::warn!("数据库连接仍被引用，随进程退出释放");
            }
        }
    }
}
