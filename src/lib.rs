// ==========================================
// 酒店连锁运营管理 - 核心库
// ==========================================
// 技术栈: Rust + SQLite (rusqlite)
// 系统定位: 单管理员、顺序菜单会话
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 执行器、主键分配、实体新建
pub mod repository;

// 报表层 - 只读分析查询
pub mod report;

// 配置层 - 启动配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA/建表）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 应用层 - 状态装配与菜单会话
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

pub use app::{AppState, Session};
pub use config::AppConfig;
pub use domain::{
    AssignOutcome, Assigned, Booking, Customer, Gender, MaintenanceCompany, NewBooking,
    NewRequest, Repair, Request, Room, TopK,
};
pub use report::ReportEngine;
pub use repository::{IdAllocator, IdSequence, RepositoryError, RepositoryResult, StoreExecutor};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "酒店连锁运营管理";
