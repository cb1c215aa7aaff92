// ==========================================
// 酒店连锁运营管理 - 应用层
// ==========================================
// 职责: 应用状态装配、输入校验、菜单会话
// ==========================================

pub mod input;
pub mod session;
pub mod state;

pub use input::InputError;
pub use session::{Flow, Session, SessionError, EXIT_CHOICE};
pub use state::AppState;
