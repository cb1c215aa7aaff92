// ==========================================
// 酒店连锁运营管理 - 预订数据仓储
// ==========================================
// 新建预订流程:
// 1. 按姓名解析客户ID（同名取第一条）
// 2. 在 IdAllocator 的锁内分配预订ID并插入预订行
// ==========================================

use crate::domain::booking::{Booking, NewBooking};
use crate::repository::customer_repo::CustomerRepository;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::executor::StoreExecutor;
use crate::repository::id_allocator::{IdAllocator, IdSequence};
use rusqlite::params;
use std::sync::Arc;

// ==========================================
// BookingRepository - 预订仓储
// ==========================================
pub struct BookingRepository {
    executor: StoreExecutor,
    customers: CustomerRepository,
    allocator: Arc<IdAllocator>,
}

impl BookingRepository {
    pub fn new(executor: StoreExecutor, allocator: Arc<IdAllocator>) -> Self {
        Self {
            customers: CustomerRepository::new(executor.clone()),
            executor,
            allocator,
        }
    }

    /// 新建预订
    ///
    /// # 返回
    /// - Ok(Booking): 已落库的预订（含分配的 b_id 与解析出的 customer_id）
    /// - Err(NotFound): 没有该姓名的客户，不插入任何数据
    /// - Err: 数据库拒绝插入
    pub fn create_booking(&self, request: &NewBooking) -> RepositoryResult<Booking> {
        let customer_id = self
            .customers
            .find_id_by_name(&request.first_name, &request.last_name)?
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "Customer".to_string(),
                id: format!("{} {}", request.first_name, request.last_name),
            })?;

        let (b_id, _) = self
            .allocator
            .allocate_with(&self.executor, IdSequence::Booking, |b_id| {
                self.executor.execute(
                    r#"
                    INSERT INTO Booking (bID, customer, hotelID, roomNo, bookingDate, noOfPeople, price)
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                    "#,
                    params![
                        b_id,
                        customer_id,
                        request.hotel_id,
                        request.room_no,
                        request.booking_date,
                        request.no_of_people,
                        request.price,
                    ],
                )
            })?;

        let booking = Booking {
            b_id,
            customer_id,
            hotel_id: request.hotel_id,
            room_no: request.room_no,
            booking_date: request.booking_date,
            no_of_people: request.no_of_people,
            price: request.price,
        };

        tracing::info!(
            b_id = booking.b_id,
            customer_id = booking.customer_id,
            hotel_id = booking.hotel_id,
            room_no = booking.room_no,
            "预订已创建"
        );
        Ok(booking)
    }
}
