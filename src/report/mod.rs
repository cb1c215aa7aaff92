// ==========================================
// 酒店连锁运营管理 - 报表引擎
// ==========================================
// 职责: 九个只读分析查询，统一经 StoreExecutor 的表格渲染模式输出
// 规则:
// - Top-K 查询一律按排名列严格降序，K 为非负整数 (TopK)
// - 日期以 ISO 文本绑定，比较使用 SQLite 日期语义
// - 区间两端均为闭区间
// - 输出顺序即数据库返回顺序，客户端不重排
// ==========================================

mod booking;
mod repair;

use crate::repository::executor::StoreExecutor;

// ==========================================
// ReportEngine - 报表引擎
// ==========================================
pub struct ReportEngine {
    executor: StoreExecutor,
}

impl ReportEngine {
    pub fn new(executor: StoreExecutor) -> Self {
        Self { executor }
    }
}
