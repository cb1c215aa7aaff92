// ==========================================
// 报表引擎 - 维修类报表
// ==========================================

use super::ReportEngine;
use crate::domain::types::TopK;
use crate::repository::error::RepositoryResult;
use rusqlite::params;
use std::io::Write;

impl ReportEngine {
    /// 某维修公司做过的全部维修（维修类型、酒店、房间）
    ///
    /// 公司按名称解析，同名取第一条（与按姓名解析客户一致）。
    pub fn repairs_by_company(&self, company_name: &str, out: &mut dyn Write) -> RepositoryResult<usize> {
        self.executor.query_and_render(
            r#"
            SELECT m.name AS company, r.rID, r.repairType, r.hotelID, r.roomNo
            FROM Repair r
            JOIN MaintenanceCompany m ON r.mCompany = m.cmpID
            WHERE m.cmpID = (
                SELECT c.cmpID FROM MaintenanceCompany c
                WHERE c.name = ?1
                LIMIT 1
            )
            "#,
            params![company_name],
            out,
        )
    }

    /// 按维修次数排名前 K 的维修公司
    pub fn top_k_companies_by_repairs(&self, k: TopK, out: &mut dyn Write) -> RepositoryResult<usize> {
        self.executor.query_and_render(
            r#"
            SELECT m.cmpID, m.name, COUNT(r.rID) AS repair_count
            FROM MaintenanceCompany m
            JOIN Repair r ON r.mCompany = m.cmpID
            GROUP BY m.cmpID, m.name
            ORDER BY repair_count DESC
            LIMIT ?1
            "#,
            params![k.value()],
            out,
        )
    }

    /// 某客房每年的维修次数
    pub fn repairs_per_year(
        &self,
        hotel_id: i64,
        room_no: i64,
        out: &mut dyn Write,
    ) -> RepositoryResult<usize> {
        self.executor.query_and_render(
            r#"
            SELECT strftime('%Y', r.repairDate) AS repair_year, COUNT(*) AS repair_count
            FROM Repair r
            WHERE r.hotelID = ?1 AND r.roomNo = ?2
            GROUP BY repair_year
            ORDER BY repair_year
            "#,
            params![hotel_id, room_no],
            out,
        )
    }
}
