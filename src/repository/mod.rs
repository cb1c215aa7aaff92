// ==========================================
// 酒店连锁运营管理 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供数据访问接口,屏蔽数据库细节
// 约束: 所有语句使用参数化,防止 SQL 注入
// ==========================================

pub mod assignment_repo;
pub mod booking_repo;
pub mod customer_repo;
pub mod error;
pub mod executor;
pub mod id_allocator;
pub mod maintenance_repo;
pub mod request_repo;
pub mod room_repo;

// 重导出核心仓储
pub use assignment_repo::AssignmentRepository;
pub use booking_repo::BookingRepository;
pub use customer_repo::CustomerRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use executor::{StoreExecutor, DEFAULT_DELIMITER};
pub use id_allocator::{max_plus_one, IdAllocator, IdSequence};
pub use maintenance_repo::{MaintenanceCompanyRepository, RepairRepository};
pub use request_repo::RequestRepository;
pub use room_repo::RoomRepository;
