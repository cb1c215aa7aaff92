// ==========================================
// 酒店连锁运营管理 - 员工作业领域模型
// ==========================================
// 对齐: Assigned 表 (保洁员分配) / Request 表 (维修申请)
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Assigned - 保洁员分配
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assigned {
    pub asg_id: i64,   // 分配ID
    pub staff_id: i64, // 员工ID
    pub hotel_id: i64, // 酒店ID
    pub room_no: i64,  // 房间号
}

// ==========================================
// AssignOutcome - 分配更新结果
// ==========================================
// 分配操作是对已有 (hotel_id, staff_id) 行的 UPDATE；
// 没有匹配行时不视为错误，但必须显式返回给调用方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignOutcome {
    /// 已更新（rows 为受影响行数）
    Assigned { asg_id: i64, rows: usize },
    /// 不存在 (hotel_id, staff_id) 对应的分配行，未做任何修改
    NoMatchingRow,
}

impl AssignOutcome {
    pub fn is_assigned(&self) -> bool {
        matches!(self, AssignOutcome::Assigned { .. })
    }
}

// ==========================================
// Request - 维修申请
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub req_id: i64,             // 申请ID (IdAllocator 分配)
    pub staff_id: i64,           // 发起员工ID
    pub repair_id: i64,          // 维修ID (外键)
    pub request_date: NaiveDate, // 申请日期
    pub description: String,     // 描述
}

/// 维修申请请求（申请ID尚未分配）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRequest {
    pub staff_id: i64,
    pub repair_id: i64,
    pub request_date: NaiveDate,
    pub description: String,
}
