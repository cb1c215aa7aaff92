// ==========================================
// 酒店连锁运营管理 - 客户数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 约束: 所有语句使用参数绑定
// ==========================================

use crate::domain::customer::Customer;
use crate::repository::error::RepositoryResult;
use crate::repository::executor::StoreExecutor;
use rusqlite::params;

// ==========================================
// CustomerRepository - 客户仓储
// ==========================================
pub struct CustomerRepository {
    executor: StoreExecutor,
}

impl CustomerRepository {
    pub fn new(executor: StoreExecutor) -> Self {
        Self { executor }
    }

    /// 新建客户
    pub fn create(&self, customer: &Customer) -> RepositoryResult<()> {
        self.executor.execute(
            r#"
            INSERT INTO Customer (customerID, fName, lName, address, phNo, DOB, gender)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                customer.customer_id,
                customer.f_name,
                customer.l_name,
                customer.address,
                customer.ph_no,
                customer.dob,
                customer.gender.to_db_str(),
            ],
        )?;
        tracing::info!(customer_id = customer.customer_id, "客户已创建: {}", customer.full_name());
        Ok(())
    }

    /// 按姓名精确查找客户ID
    ///
    /// 同名客户有多个时取数据库返回的第一行，不做进一步区分。
    ///
    /// # 返回
    /// - Ok(Some(id)): 找到
    /// - Ok(None): 无此客户
    pub fn find_id_by_name(&self, first_name: &str, last_name: &str) -> RepositoryResult<Option<i64>> {
        let (first, matches) = self.executor.query_raw(
            "SELECT customerID FROM Customer WHERE fName = ?1 AND lName = ?2",
            params![first_name, last_name],
            |rows| {
                let mut first: Option<i64> = None;
                let mut matches = 0usize;
                while let Some(row) = rows.next()? {
                    if first.is_none() {
                        first = Some(row.get(0)?);
                    }
                    matches += 1;
                }
                Ok((first, matches))
            },
        )?;

        if matches > 1 {
            tracing::warn!(
                matches,
                chosen = ?first,
                "存在同名客户 {} {}，使用第一条记录",
                first_name,
                last_name
            );
        }
        Ok(first)
    }
}
