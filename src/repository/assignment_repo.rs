// ==========================================
// 酒店连锁运营管理 - 保洁员分配数据仓储
// ==========================================
// 说明:
// - assign_staff 是对已存在的 (hotelID, staffID) 行做 UPDATE，
//   不存在时不报错，以 AssignOutcome::NoMatchingRow 显式返回
// - create_assignment 用于先建立分配行
// ==========================================

use crate::domain::staff::{AssignOutcome, Assigned};
use crate::repository::error::RepositoryResult;
use crate::repository::executor::StoreExecutor;
use crate::repository::id_allocator::{IdAllocator, IdSequence};
use rusqlite::params;
use std::sync::Arc;

// ==========================================
// AssignmentRepository - 保洁员分配仓储
// ==========================================
pub struct AssignmentRepository {
    executor: StoreExecutor,
    allocator: Arc<IdAllocator>,
}

impl AssignmentRepository {
    pub fn new(executor: StoreExecutor, allocator: Arc<IdAllocator>) -> Self {
        Self {
            executor,
            allocator,
        }
    }

    /// 新建分配行（分配ID由 IdAllocator 分配）
    pub fn create_assignment(
        &self,
        staff_id: i64,
        hotel_id: i64,
        room_no: i64,
    ) -> RepositoryResult<Assigned> {
        let (asg_id, _) = self
            .allocator
            .allocate_with(&self.executor, IdSequence::Assigned, |asg_id| {
                self.executor.execute(
                    "INSERT INTO Assigned (asgID, staffID, hotelID, roomNo) VALUES (?1, ?2, ?3, ?4)",
                    params![asg_id, staff_id, hotel_id, room_no],
                )
            })?;
        tracing::info!(asg_id, staff_id, hotel_id, room_no, "分配行已创建");
        Ok(Assigned {
            asg_id,
            staff_id,
            hotel_id,
            room_no,
        })
    }

    /// 将保洁员分配到房间
    ///
    /// 为 (hotel_id, staff_id) 对应的行设置新的分配ID与房间号。
    ///
    /// # 返回
    /// - Ok(Assigned { .. }): 已更新
    /// - Ok(NoMatchingRow): 没有对应分配行，未修改任何数据
    pub fn assign_staff(
        &self,
        staff_id: i64,
        hotel_id: i64,
        room_no: i64,
    ) -> RepositoryResult<AssignOutcome> {
        let (asg_id, rows) = self
            .allocator
            .allocate_with(&self.executor, IdSequence::Assigned, |asg_id| {
                self.executor.execute(
                    "UPDATE Assigned SET asgID = ?1, roomNo = ?2 WHERE hotelID = ?3 AND staffID = ?4",
                    params![asg_id, room_no, hotel_id, staff_id],
                )
            })?;

        if rows == 0 {
            tracing::warn!(staff_id, hotel_id, "没有对应的分配行，分配未生效");
            return Ok(AssignOutcome::NoMatchingRow);
        }

        tracing::info!(asg_id, staff_id, hotel_id, room_no, "保洁员已分配");
        Ok(AssignOutcome::Assigned { asg_id, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::setup_executor;

    #[test]
    fn test_assign_without_existing_row_is_silent_miss() {
        let repo = AssignmentRepository::new(setup_executor(), Arc::new(IdAllocator::new()));
        let outcome = repo.assign_staff(9, 5, 101).unwrap();
        assert_eq!(outcome, AssignOutcome::NoMatchingRow);
    }

    #[test]
    fn test_silent_miss_does_not_consume_id() {
        let repo = AssignmentRepository::new(setup_executor(), Arc::new(IdAllocator::new()));
        assert_eq!(repo.assign_staff(9, 5, 101).unwrap(), AssignOutcome::NoMatchingRow);
        assert_eq!(repo.assign_staff(9, 5, 102).unwrap(), AssignOutcome::NoMatchingRow);

        let created = repo.create_assignment(9, 5, 101).unwrap();
        assert_eq!(created.asg_id, 1);
    }

    #[test]
    fn test_create_then_assign_moves_room() {
        let executor = setup_executor();
        let repo = AssignmentRepository::new(executor.clone(), Arc::new(IdAllocator::new()));

        let created = repo.create_assignment(9, 5, 101).unwrap();
        assert_eq!(created.asg_id, 1);

        let outcome = repo.assign_staff(9, 5, 202).unwrap();
        assert_eq!(outcome, AssignOutcome::Assigned { asg_id: 2, rows: 1 });

        let (asg_id, room_no): (i64, i64) = executor
            .query_raw(
                "SELECT asgID, roomNo FROM Assigned WHERE hotelID = 5 AND staffID = 9",
                [],
                |rows| {
                    let row = rows.next()?.expect("assignment row missing");
                    Ok((row.get(0)?, row.get(1)?))
                },
            )
            .unwrap();
        assert_eq!(asg_id, 2);
        assert_eq!(room_no, 202);
    }
}
