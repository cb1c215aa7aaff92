// ==========================================
// 酒店连锁运营管理 - 语句执行器
// ==========================================
// 职责:
// - 命令执行: 提交单条写语句 (INSERT / UPDATE)
// - 查询执行: 原始游标模式 / 表格渲染模式
// 红线: 执行器不解析、不校验语句内容；不重试
// ==========================================

use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Params, Rows};
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

/// 默认列分隔符
pub const DEFAULT_DELIMITER: &str = "\t";

// ==========================================
// StoreExecutor - 语句执行器
// ==========================================
/// 持有唯一的共享连接，所有仓储与报表都通过它访问数据库
#[derive(Clone)]
pub struct StoreExecutor {
    conn: Arc<Mutex<Connection>>,
    delimiter: String,
}

impl StoreExecutor {
    /// 从已有连接创建执行器（分隔符为制表符）
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self {
            conn,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// 指定渲染模式使用的列分隔符
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// 共享连接句柄
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 命令执行：提交一条写语句
    ///
    /// # 返回
    /// - Ok(usize): 受影响行数（普通新建操作不关心该值）
    /// - Err: 数据库拒绝该语句，携带数据库原始消息
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let affected = conn.execute(sql, params)?;
        tracing::debug!(affected, "语句执行完成");
        Ok(affected)
    }

    /// 查询执行（原始游标模式）
    ///
    /// 游标完全交给 `consume` 消费；闭包返回后游标随语句一并释放。
    pub fn query_raw<P, T, F>(&self, sql: &str, params: P, consume: F) -> RepositoryResult<T>
    where
        P: Params,
        F: FnOnce(&mut Rows<'_>) -> RepositoryResult<T>,
    {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        consume(&mut rows)
    }

    /// 查询执行（表格渲染模式）
    ///
    /// - 表头（列名）只在第一行数据之前输出一次；空结果不输出表头
    /// - 每行按列值用分隔符拼接输出，顺序与数据库返回顺序一致
    /// - 中途出错时游标同样被释放
    ///
    /// # 返回
    /// 输出的数据行数（不含表头）
    pub fn query_and_render<P: Params>(
        &self,
        sql: &str,
        params: P,
        out: &mut dyn Write,
    ) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();

        let mut rows = stmt.query(params)?;
        let mut row_count = 0usize;
        while let Some(row) = rows.next()? {
            if row_count == 0 {
                writeln!(out, "{}", columns.join(&self.delimiter))?;
            }
            let values = (0..columns.len())
                .map(|idx| row.get_ref(idx).map(render_value))
                .collect::<rusqlite::Result<Vec<_>>>()?;
            writeln!(out, "{}", values.join(&self.delimiter))?;
            row_count += 1;
        }
        out.flush()?;

        tracing::debug!(row_count, "查询渲染完成");
        Ok(row_count)
    }
}

/// 单元格渲染
fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "null".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => format!("<blob {} bytes>", b.len()),
    }
}
