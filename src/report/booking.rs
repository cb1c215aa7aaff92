// ==========================================
// 报表引擎 - 客房与预订类报表
// ==========================================

use super::ReportEngine;
use crate::domain::types::TopK;
use crate::repository::error::RepositoryResult;
use chrono::NaiveDate;
use rusqlite::params;
use std::io::Write;

impl ReportEngine {
    /// 可用客房数：该酒店中没有任何预订引用的客房数量
    pub fn available_room_count(&self, hotel_id: i64, out: &mut dyn Write) -> RepositoryResult<usize> {
        self.executor.query_and_render(
            r#"
            SELECT COUNT(*) AS available_rooms
            FROM Room r
            WHERE r.hotelID = ?1
              AND NOT EXISTS (
                  SELECT 1 FROM Booking b
                  WHERE b.hotelID = r.hotelID AND b.roomNo = r.roomNo
              )
            "#,
            params![hotel_id],
            out,
        )
    }

    /// 该酒店的预订数
    pub fn booked_room_count(&self, hotel_id: i64, out: &mut dyn Write) -> RepositoryResult<usize> {
        self.executor.query_and_render(
            "SELECT COUNT(*) AS booked_rooms FROM Booking b WHERE b.hotelID = ?1",
            params![hotel_id],
            out,
        )
    }

    /// 一周内的预订：预订日期落在 [start, start + 6 天] 内（共七天，闭区间）
    pub fn bookings_for_week(
        &self,
        hotel_id: i64,
        start: NaiveDate,
        out: &mut dyn Write,
    ) -> RepositoryResult<usize> {
        self.executor.query_and_render(
            r#"
            SELECT b.roomNo, b.customer, b.bookingDate
            FROM Booking b
            WHERE b.hotelID = ?1
              AND b.bookingDate BETWEEN ?2 AND date(?2, '+6 days')
            GROUP BY b.roomNo, b.customer, b.bookingDate
            "#,
            params![hotel_id, start],
            out,
        )
    }

    /// 日期区间内价格最高的 K 条预订
    pub fn top_k_prices_in_range(
        &self,
        k: TopK,
        start: NaiveDate,
        end: NaiveDate,
        out: &mut dyn Write,
    ) -> RepositoryResult<usize> {
        self.executor.query_and_render(
            r#"
            SELECT b.bID, b.hotelID, b.roomNo, b.bookingDate, b.price
            FROM Booking b
            WHERE b.bookingDate BETWEEN ?1 AND ?2
            ORDER BY b.price DESC
            LIMIT ?3
            "#,
            params![start, end, k.value()],
            out,
        )
    }

    /// 某客户价格最高的 K 条预订
    pub fn top_k_prices_for_customer(
        &self,
        k: TopK,
        first_name: &str,
        last_name: &str,
        out: &mut dyn Write,
    ) -> RepositoryResult<usize> {
        self.executor.query_and_render(
            r#"
            SELECT b.bID, b.hotelID, b.roomNo, b.bookingDate, b.price
            FROM Booking b
            JOIN Customer c ON c.customerID = b.customer
            WHERE c.fName = ?1 AND c.lName = ?2
            ORDER BY b.price DESC
            LIMIT ?3
            "#,
            params![first_name, last_name, k.value()],
            out,
        )
    }

    /// 客户在某酒店、某日期区间内的消费总额
    ///
    /// 客户按姓名解析，同名取第一条（与新建预订一致）；无匹配时总额为 0。
    pub fn total_cost_for_customer(
        &self,
        hotel_id: i64,
        first_name: &str,
        last_name: &str,
        start: NaiveDate,
        end: NaiveDate,
        out: &mut dyn Write,
    ) -> RepositoryResult<usize> {
        self.executor.query_and_render(
            r#"
            SELECT COALESCE(SUM(b.price), 0) AS total_cost
            FROM Booking b
            WHERE b.hotelID = ?1
              AND b.customer = (
                  SELECT c.customerID FROM Customer c
                  WHERE c.fName = ?2 AND c.lName = ?3
                  LIMIT 1
              )
              AND b.bookingDate BETWEEN ?4 AND ?5
            "#,
            params![hotel_id, first_name, last_name, start, end],
            out,
        )
    }
}
