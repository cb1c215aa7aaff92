// ==========================================
// 酒店连锁运营管理 - 领域类型定义
// ==========================================
// 职责: 跨实体共享的值类型（性别、Top-K 限额）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 性别 (Gender)
// ==========================================
// 存储格式: 首字母大写 (与数据库 CHECK 约束一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// 从字符串解析（大小写不敏感）
    ///
    /// 无法识别时返回 None，由输入层决定是否重新提示
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            "other" | "o" => Some(Gender::Other),
            _ => None,
        }
    }

    /// 转换为数据库存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// Top-K 限额
// ==========================================
// 非负由类型保证 (u32)，绑定到 SQL 的 LIMIT 参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TopK(pub u32);

impl TopK {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TopK {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
