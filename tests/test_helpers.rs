// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的数据库初始化、测试数据生成等功能
// ==========================================

#![allow(dead_code)]

use chrono::NaiveDate;
use hotel_ops::app::AppState;
use hotel_ops::config::AppConfig;
use hotel_ops::domain::{Customer, Gender, MaintenanceCompany, Repair, Room};
use std::error::Error;
use tempfile::NamedTempFile;

/// 创建临时测试数据库
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - AppState: 已建表的应用状态
pub fn create_test_state() -> Result<(NamedTempFile, AppState), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file
        .path()
        .to_str()
        .ok_or("temp path is not valid UTF-8")?
        .to_string();

    let config = AppConfig {
        db_path,
        ..AppConfig::default()
    };
    let state = AppState::open(&config)?;
    Ok((temp_file, state))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("invalid test date")
}

pub fn insert_customer(state: &AppState, id: i64, first: &str, last: &str) {
    state
        .customers
        .create(&Customer {
            customer_id: id,
            f_name: first.to_string(),
            l_name: last.to_string(),
            address: "12 Test Ave".to_string(),
            ph_no: "5550199".to_string(),
            dob: date(1988, 8, 8),
            gender: Gender::Other,
        })
        .expect("Failed to insert customer");
}

pub fn insert_room(state: &AppState, hotel_id: i64, room_no: i64) {
    state
        .rooms
        .create(&Room {
            hotel_id,
            room_no,
            room_type: "Double".to_string(),
        })
        .expect("Failed to insert room");
}

pub fn insert_company(state: &AppState, cmp_id: i64, name: &str) {
    state
        .companies
        .create(&MaintenanceCompany {
            cmp_id,
            name: name.to_string(),
            address: "1 Works Rd".to_string(),
            is_certified: true,
        })
        .expect("Failed to insert company");
}

pub fn insert_repair(state: &AppState, r_id: i64, hotel_id: i64, room_no: i64, cmp_id: i64, day: NaiveDate) {
    state
        .repairs
        .create(&Repair {
            r_id,
            hotel_id,
            room_no,
            m_company: cmp_id,
            repair_date: day,
            description: "test repair".to_string(),
            repair_type: "general".to_string(),
        })
        .expect("Failed to insert repair");
}

/// 把报表输出拆为数据行（跳过表头）
pub fn data_rows(output: &[u8]) -> Vec<Vec<String>> {
    String::from_utf8_lossy(output)
        .lines()
        .skip(1)
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}
