// ==========================================
// 酒店连锁运营管理 - 标识符分配器
// ==========================================
// Booking / Assigned / Request 三张表的主键不由数据库生成。
//
// 直接"读 MAX(id) 再 +1"在读与写之间存在竞争窗口：
// 两个调用方读到同一个 MAX 会分到同一个 ID。
// IdAllocator 在同一把锁内完成"读 MAX + 1"与写入，
// 共享该分配器的调用方（同一个 AppState 下的全部仓储）不会拿到重复 ID。
// 写入失败或未影响任何行时该 ID 不算发放，下一次分配仍得到同一个值。
// ==========================================

use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::executor::StoreExecutor;
use std::sync::Mutex;

// ==========================================
// IdSequence - 需要分配主键的表
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdSequence {
    Booking,
    Assigned,
    Request,
}

impl IdSequence {
    pub fn table(&self) -> &'static str {
        match self {
            IdSequence::Booking => "Booking",
            IdSequence::Assigned => "Assigned",
            IdSequence::Request => "Request",
        }
    }

    fn max_sql(&self) -> &'static str {
        match self {
            IdSequence::Booking => "SELECT MAX(bID) AS max_id FROM Booking",
            IdSequence::Assigned => "SELECT MAX(asgID) AS max_id FROM Assigned",
            IdSequence::Request => "SELECT MAX(reqID) AS max_id FROM Request",
        }
    }
}

/// 读取当前最大ID并加一（空表返回 1）
///
/// 单独调用时不提供任何互斥保证，新代码应通过 [`IdAllocator`] 分配。
pub fn max_plus_one(executor: &StoreExecutor, seq: IdSequence) -> RepositoryResult<i64> {
    let current: Option<i64> = executor.query_raw(seq.max_sql(), [], |rows| match rows.next()? {
        Some(row) => Ok(row.get(0)?),
        None => Ok(None),
    })?;
    Ok(current.unwrap_or(0) + 1)
}

// ==========================================
// IdAllocator - 主键分配器
// ==========================================
#[derive(Debug, Default)]
pub struct IdAllocator {
    lock: Mutex<()>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 分配ID并在同一把锁内执行写入
    ///
    /// `write` 收到候选ID，返回受影响行数。
    ///
    /// # 返回
    /// - Ok((id, rows)): rows 为 0 时数据库中没有出现该ID
    /// - Err: 读取 MAX 或写入失败，该ID未被使用
    pub fn allocate_with<F>(
        &self,
        executor: &StoreExecutor,
        seq: IdSequence,
        write: F,
    ) -> RepositoryResult<(i64, usize)>
    where
        F: FnOnce(i64) -> RepositoryResult<usize>,
    {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let id = max_plus_one(executor, seq)?;
        let rows = write(id)?;

        if rows > 0 {
            tracing::debug!(table = seq.table(), id, "已分配主键");
        }
        Ok((id, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init_schema, open_sqlite_connection};
    use rusqlite::params;
    use std::sync::{Arc, Mutex};

    fn setup_executor() -> StoreExecutor {
        let conn = open_sqlite_connection(":memory:").expect("Failed to open db");
        init_schema(&conn).expect("Failed to init schema");
        StoreExecutor::new(Arc::new(Mutex::new(conn)))
    }

    fn insert_assigned(executor: &StoreExecutor, asg_id: i64) -> RepositoryResult<usize> {
        executor.execute(
            "INSERT INTO Assigned (asgID, staffID, hotelID, roomNo) VALUES (?1, 1, 1, 1)",
            params![asg_id],
        )
    }

    #[test]
    fn test_empty_table_starts_at_one() {
        let executor = setup_executor();
        assert_eq!(max_plus_one(&executor, IdSequence::Request).unwrap(), 1);

        let allocator = IdAllocator::new();
        let (id, rows) = allocator
            .allocate_with(&executor, IdSequence::Assigned, |id| insert_assigned(&executor, id))
            .unwrap();
        assert_eq!((id, rows), (1, 1));
    }

    #[test]
    fn test_follows_store_maximum() {
        let executor = setup_executor();
        insert_assigned(&executor, 41).unwrap();

        let allocator = IdAllocator::new();
        let (id, _) = allocator
            .allocate_with(&executor, IdSequence::Assigned, |id| insert_assigned(&executor, id))
            .unwrap();
        assert_eq!(id, 42);
    }

    #[test]
    fn test_failed_write_does_not_consume_id() {
        let executor = setup_executor();
        let allocator = IdAllocator::new();

        let result = allocator.allocate_with(&executor, IdSequence::Assigned, |_| {
            Err(RepositoryError::DatabaseQueryError("rejected".to_string()))
        });
        assert!(result.is_err());

        let (id, rows) = allocator
            .allocate_with(&executor, IdSequence::Assigned, |_| Ok(0))
            .unwrap();
        assert_eq!((id, rows), (1, 0));

        let (id, _) = allocator
            .allocate_with(&executor, IdSequence::Assigned, |id| insert_assigned(&executor, id))
            .unwrap();
        assert_eq!(id, 1);
    }

    #[test]
    fn test_external_insert_moves_sequence_forward() {
        let executor = setup_executor();
        let allocator = IdAllocator::new();
        allocator
            .allocate_with(&executor, IdSequence::Assigned, |id| insert_assigned(&executor, id))
            .unwrap();

        insert_assigned(&executor, 10).unwrap();
        let (id, _) = allocator
            .allocate_with(&executor, IdSequence::Assigned, |id| insert_assigned(&executor, id))
            .unwrap();
        assert_eq!(id, 11);

        // 各表的序列互不影响
        assert_eq!(max_plus_one(&executor, IdSequence::Request).unwrap(), 1);
    }
}
