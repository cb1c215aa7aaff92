// ==========================================
// 酒店连锁运营管理 - 客户领域模型
// ==========================================
// 对齐: Customer 表
// 约束: f_name / l_name 长度 1-30 (由输入层校验)
// ==========================================

use crate::domain::types::Gender;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 名字字段最大长度
pub const NAME_MAX_LEN: usize = 30;

// ==========================================
// Customer - 客户
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: i64, // 客户ID (调用方指定)
    pub f_name: String,   // 名
    pub l_name: String,   // 姓
    pub address: String,  // 地址
    pub ph_no: String,    // 电话
    pub dob: NaiveDate,   // 出生日期
    pub gender: Gender,   // 性别
}

impl Customer {
    /// 全名（名 + 空格 + 姓），用于日志与提示
    pub fn full_name(&self) -> String {
        format!("{} {}", self.f_name, self.l_name)
    }
}
