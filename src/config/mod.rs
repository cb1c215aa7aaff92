// ==========================================
// 酒店连锁运营管理 - 配置层
// ==========================================
// 职责: 启动配置解析（命令行 / 环境变量 / 配置文件 / 默认值）
// ==========================================

pub mod app_config;
pub mod cli;

// 重导出
pub use app_config::{
    get_default_db_path, AppConfig, ConfigError, ConfigOverrides, DB_PATH_ENV, SUPPORTED_LOCALES,
};
pub use cli::Cli;
