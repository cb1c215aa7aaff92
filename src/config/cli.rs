// ==========================================
// 酒店连锁运营管理 - 命令行参数
// ==========================================

use crate::config::app_config::ConfigOverrides;
use clap::Parser;
use std::path::PathBuf;

/// 酒店连锁运营管理 - 交互式管理终端
#[derive(Parser, Debug)]
#[command(name = "hotel-ops", version, about)]
pub struct Cli {
    /// SQLite 数据库文件路径
    pub db_path: Option<String>,

    /// JSON 配置文件
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 界面语言 (zh-CN / en)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// 报表列分隔符
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// 启动时不执行建表脚本
    #[arg(long)]
    pub no_init_schema: bool,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            db_path: self.db_path.clone(),
            locale: self.locale.clone(),
            delimiter: self.delimiter.clone(),
            skip_init_schema: self.no_init_schema,
        }
    }
}
