// ==========================================
// 酒店连锁运营管理 - 维修领域模型
// ==========================================
// 对齐: MaintenanceCompany 表 / Repair 表
// 说明: Repair.m_company 引用 MaintenanceCompany.cmp_id，
//       引用完整性交给数据库外键约束
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 维修公司名称最大长度
pub const COMPANY_NAME_MAX_LEN: usize = 10;

/// 维修类型最大长度
pub const REPAIR_TYPE_MAX_LEN: usize = 10;

// ==========================================
// MaintenanceCompany - 维修公司
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceCompany {
    pub cmp_id: i64,        // 公司ID
    pub name: String,       // 名称 (1-10 字符)
    pub address: String,    // 地址
    pub is_certified: bool, // 是否认证
}

// ==========================================
// Repair - 维修记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repair {
    pub r_id: i64,              // 维修ID
    pub hotel_id: i64,          // 酒店ID
    pub room_no: i64,           // 房间号
    pub m_company: i64,         // 维修公司ID (外键)
    pub repair_date: NaiveDate, // 维修日期
    pub description: String,    // 描述
    pub repair_type: String,    // 维修类型 (1-10 字符)
}
