// ==========================================
// 酒店连锁运营管理 - 客房数据仓储
// ==========================================

use crate::domain::room::Room;
use crate::repository::error::RepositoryResult;
use crate::repository::executor::StoreExecutor;
use rusqlite::params;

pub struct RoomRepository {
    executor: StoreExecutor,
}

impl RoomRepository {
    pub fn new(executor: StoreExecutor) -> Self {
        Self { executor }
    }

    /// 新建客房
    pub fn create(&self, room: &Room) -> RepositoryResult<()> {
        self.executor.execute(
            "INSERT INTO Room (hotelID, roomNo, roomType) VALUES (?1, ?2, ?3)",
            params![room.hotel_id, room.room_no, room.room_type],
        )?;
        tracing::info!(hotel_id = room.hotel_id, room_no = room.room_no, "客房已创建");
        Ok(())
    }
}
