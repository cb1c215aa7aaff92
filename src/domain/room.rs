// ==========================================
// 酒店连锁运营管理 - 客房领域模型
// ==========================================
// 对齐: Room 表, 主键 (hotel_id, room_no)
// ==========================================

use serde::{Deserialize, Serialize};

/// 房型字段最大长度
pub const ROOM_TYPE_MAX_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub hotel_id: i64,     // 酒店ID
    pub room_no: i64,      // 房间号
    pub room_type: String, // 房型 (1-10 字符)
}
