// ==========================================
// 酒店连锁运营管理 - 维修申请数据仓储
// ==========================================

use crate::domain::staff::{NewRequest, Request};
use crate::repository::error::RepositoryResult;
use crate::repository::executor::StoreExecutor;
use crate::repository::id_allocator::{IdAllocator, IdSequence};
use rusqlite::params;
use std::sync::Arc;

pub struct RequestRepository {
    executor: StoreExecutor,
    allocator: Arc<IdAllocator>,
}

impl RequestRepository {
    pub fn new(executor: StoreExecutor, allocator: Arc<IdAllocator>) -> Self {
        Self {
            executor,
            allocator,
        }
    }

    /// 发起维修申请
    pub fn create_request(&self, request: &NewRequest) -> RepositoryResult<Request> {
        let (req_id, _) = self
            .allocator
            .allocate_with(&self.executor, IdSequence::Request, |req_id| {
                self.executor.execute(
                    r#"
                    INSERT INTO Request (reqID, staffID, repairID, requestDate, description)
                    VALUES (?1, ?2, ?3, ?4, ?5)
                    "#,
                    params![
                        req_id,
                        request.staff_id,
                        request.repair_id,
                        request.request_date,
                        request.description,
                    ],
                )
            })?;
        tracing::info!(req_id, repair_id = request.repair_id, "维修申请已创建");
        Ok(Request {
            req_id,
            staff_id: request.staff_id,
            repair_id: request.repair_id,
            request_date: request.request_date,
            description: request.description.clone(),
        })
    }
}
