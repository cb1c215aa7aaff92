// ==========================================
// 酒店连锁运营管理 - 领域模型层
// ==========================================
// 职责: 定义领域实体与值类型
// 红线: 不含数据访问逻辑
// ==========================================

pub mod booking;
pub mod customer;
pub mod maintenance;
pub mod room;
pub mod staff;
pub mod types;

// 重导出核心类型
pub use booking::{Booking, NewBooking};
pub use customer::Customer;
pub use maintenance::{MaintenanceCompany, Repair};
pub use room::Room;
pub use staff::{AssignOutcome, Assigned, NewRequest, Request};
pub use types::{Gender, TopK};
