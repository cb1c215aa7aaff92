// ==========================================
// 酒店连锁运营管理 - 维修公司 / 维修记录数据仓储
// ==========================================
// 说明: Repair.mCompany 的引用完整性由数据库外键保证，
//       仓储层不预先校验
// ==========================================

use crate::domain::maintenance::{MaintenanceCompany, Repair};
use crate::repository::error::RepositoryResult;
use crate::repository::executor::StoreExecutor;
use rusqlite::params;

// ==========================================
// MaintenanceCompanyRepository - 维修公司仓储
// ==========================================
pub struct MaintenanceCompanyRepository {
    executor: StoreExecutor,
}

impl MaintenanceCompanyRepository {
    pub fn new(executor: StoreExecutor) -> Self {
        Self { executor }
    }

    /// 新建维修公司
    pub fn create(&self, company: &MaintenanceCompany) -> RepositoryResult<()> {
        self.executor.execute(
            r#"
            INSERT INTO MaintenanceCompany (cmpID, name, address, isCertified)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                company.cmp_id,
                company.name,
                company.address,
                company.is_certified,
            ],
        )?;
        tracing::info!(cmp_id = company.cmp_id, "维修公司已创建: {}", company.name);
        Ok(())
    }
}

// ==========================================
// RepairRepository - 维修记录仓储
// ==========================================
pub struct RepairRepository {
    executor: StoreExecutor,
}

impl RepairRepository {
    pub fn new(executor: StoreExecutor) -> Self {
        Self { executor }
    }

    /// 新建维修记录
    pub fn create(&self, repair: &Repair) -> RepositoryResult<()> {
        self.executor.execute(
            r#"
            INSERT INTO Repair (rID, hotelID, roomNo, mCompany, repairDate, description, repairType)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                repair.r_id,
                repair.hotel_id,
                repair.room_no,
                repair.m_company,
                repair.repair_date,
                repair.description,
                repair.repair_type,
            ],
        )?;
        tracing::info!(
            r_id = repair.r_id,
            hotel_id = repair.hotel_id,
            room_no = repair.room_no,
            "维修记录已创建"
        );
        Ok(())
    }
}
