// ==========================================
// 酒店连锁运营管理 - 预订领域模型
// ==========================================
// 对齐: Booking 表
// 说明: b_id 由 IdAllocator 分配，不由数据库生成；
//       customer_id 通过姓名查询解析
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Booking - 已落库的预订
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub b_id: i64,               // 预订ID
    pub customer_id: i64,        // 客户ID (外键)
    pub hotel_id: i64,           // 酒店ID
    pub room_no: i64,            // 房间号
    pub booking_date: NaiveDate, // 预订日期
    pub no_of_people: i64,       // 入住人数
    pub price: f64,              // 价格
}

// ==========================================
// NewBooking - 预订请求
// ==========================================
// 以客户姓名（而非ID）标识客户，与前台操作习惯一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub hotel_id: i64,
    pub room_no: i64,
    pub first_name: String,
    pub last_name: String,
    pub booking_date: NaiveDate,
    pub no_of_people: i64,
    pub price: f64,
}
