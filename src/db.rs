// ==========================================
// 酒店连锁运营管理 - SQLite 连接初始化
// ==========================================
// 目标:
// - 进程启动时打开唯一连接，统一 PRAGMA 行为
// - 提供幂等的建表脚本（不做迁移）
// - 关闭连接只做一次，关闭失败只记录日志
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 建表脚本（七张业务表）
///
/// 日期统一存为 ISO-8601 文本 (YYYY-MM-DD)，以便直接使用 SQLite 的
/// date() / strftime() / BETWEEN 语义。
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS Customer (
    customerID INTEGER PRIMARY KEY CHECK (customerID >= 0),
    fName      TEXT NOT NULL CHECK (length(fName) BETWEEN 1 AND 30),
    lName      TEXT NOT NULL CHECK (length(lName) BETWEEN 1 AND 30),
    address    TEXT,
    phNo       TEXT,
    DOB        TEXT,
    gender     TEXT CHECK (gender IN ('Male', 'Female', 'Other'))
);

CREATE TABLE IF NOT EXISTS Room (
    hotelID  INTEGER NOT NULL CHECK (hotelID >= 0),
    roomNo   INTEGER NOT NULL CHECK (roomNo >= 0),
    roomType TEXT NOT NULL CHECK (length(roomType) BETWEEN 1 AND 10),
    PRIMARY KEY (hotelID, roomNo)
);

CREATE TABLE IF NOT EXISTS MaintenanceCompany (
    cmpID       INTEGER PRIMARY KEY CHECK (cmpID >= 0),
    name        TEXT NOT NULL CHECK (length(name) BETWEEN 1 AND 10),
    address     TEXT,
    isCertified INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS Repair (
    rID         INTEGER PRIMARY KEY CHECK (rID >= 0),
    hotelID     INTEGER NOT NULL CHECK (hotelID >= 0),
    roomNo      INTEGER NOT NULL CHECK (roomNo >= 0),
    mCompany    INTEGER NOT NULL REFERENCES MaintenanceCompany(cmpID),
    repairDate  TEXT NOT NULL,
    description TEXT,
    repairType  TEXT NOT NULL CHECK (length(repairType) BETWEEN 1 AND 10)
);

CREATE TABLE IF NOT EXISTS Booking (
    bID         INTEGER PRIMARY KEY CHECK (bID >= 0),
    customer    INTEGER NOT NULL REFERENCES Customer(customerID),
    hotelID     INTEGER NOT NULL CHECK (hotelID >= 0),
    roomNo      INTEGER NOT NULL CHECK (roomNo >= 0),
    bookingDate TEXT NOT NULL,
    noOfPeople  INTEGER NOT NULL CHECK (noOfPeople >= 0),
    price       REAL NOT NULL CHECK (price >= 0)
);

CREATE TABLE IF NOT EXISTS Assigned (
    asgID   INTEGER PRIMARY KEY CHECK (asgID >= 0),
    staffID INTEGER NOT NULL CHECK (staffID >= 0),
    hotelID INTEGER NOT NULL CHECK (hotelID >= 0),
    roomNo  INTEGER NOT NULL CHECK (roomNo >= 0)
);

CREATE TABLE IF NOT EXISTS Request (
    reqID       INTEGER PRIMARY KEY CHECK (reqID >= 0),
    staffID     INTEGER NOT NULL CHECK (staffID >= 0),
    repairID    INTEGER NOT NULL REFERENCES Repair(rID),
    requestDate TEXT NOT NULL,
    description TEXT
);
"#;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要"每个连接"单独开启
/// - busy_timeout 需要"每个连接"单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
///
/// 同时挂载 SQL 跟踪回调（RUST_LOG=hotel_ops::sql=trace 时可见）
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let mut conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    conn.trace(Some(trace_statement));
    tracing::debug!("SQLite 连接已打开: {}", db_path);
    Ok(conn)
}

fn trace_statement(sql: &str) {
    tracing::trace!(target: "hotel_ops::sql", "{}", sql.trim());
}

/// 初始化七张业务表（幂等）
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    tracing::info!("数据库表结构已就绪");
    Ok(())
}

/// 关闭连接
///
/// 关闭阶段出错已无可补救，只记录日志
pub fn close_sqlite_connection(conn: Connection) {
    if let Err((_conn, e)) = conn.close() {
        tracing::warn!("关闭数据库连接失败(已忽略): {}", e);
    }
}
