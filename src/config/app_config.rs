// ==========================================
// 酒店连锁运营管理 - 应用配置
// ==========================================
// 覆写优先级 (高 → 低):
// 1. 命令行参数
// 2. 环境变量 HOTEL_OPS_DB_PATH
// 3. JSON 配置文件 (--config)
// 4. 默认值 (用户数据目录)
// ==========================================

use crate::repository::executor::DEFAULT_DELIMITER;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 数据库路径环境变量
pub const DB_PATH_ENV: &str = "HOTEL_OPS_DB_PATH";

/// 支持的界面语言
pub const SUPPORTED_LOCALES: &[&str] = &["zh-CN", "en"];

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("不支持的语言: {0} (可选: zh-CN, en)")]
    UnsupportedLocale(String),

    #[error("列分隔符不能为空")]
    EmptyDelimiter,

    #[error("数据库路径不能为空")]
    EmptyDbPath,
}

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite 数据库文件路径
    pub db_path: String,
    /// 界面语言
    pub locale: String,
    /// 报表列分隔符
    pub delimiter: String,
    /// 启动时是否执行建表脚本
    pub init_schema: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: get_default_db_path(),
            locale: "zh-CN".to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            init_schema: true,
        }
    }
}

/// 命令行覆写项（未指定的保持 None）
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub db_path: Option<String>,
    pub locale: Option<String>,
    pub delimiter: Option<String>,
    pub skip_init_schema: bool,
}

impl AppConfig {
    /// 从 JSON 文件加载；文件中缺省的字段取默认值
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// 按优先级解析最终配置
    pub fn resolve(
        config_file: Option<&Path>,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(path) = env_db_path() {
            config.db_path = path;
        }

        if let Some(path) = overrides.db_path {
            config.db_path = path;
        }
        if let Some(locale) = overrides.locale {
            config.locale = locale;
        }
        if let Some(delimiter) = overrides.delimiter {
            config.delimiter = delimiter;
        }
        if overrides.skip_init_schema {
            config.init_schema = false;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.db_path.trim().is_empty() {
            return Err(ConfigError::EmptyDbPath);
        }
        if !SUPPORTED_LOCALES.contains(&self.locale.as_str()) {
            return Err(ConfigError::UnsupportedLocale(self.locale.clone()));
        }
        if self.delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(())
    }
}

fn env_db_path() -> Option<String> {
    std::env::var(DB_PATH_ENV)
        .ok()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
}

/// 默认数据库路径
///
/// 优先使用用户数据目录 (<data_dir>/hotel-ops/hotel_ops.db)，
/// 取不到时回退到当前目录。
pub fn get_default_db_path() -> String {
    let mut path = PathBuf::from("./hotel_ops.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("hotel-ops");
        // 目录创建失败时沿用当前目录
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("hotel_ops.db");
        }
    }

    path.to_string_lossy().to_string()
}
